pub mod cart;
pub mod email;
pub mod favorite;
pub mod password;
pub mod price;
pub mod product;
pub mod quantity;
pub mod user;
