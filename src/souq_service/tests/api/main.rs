mod auth;
mod cart;
mod favorites;
mod helpers;
mod users;
