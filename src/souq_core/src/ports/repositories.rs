use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    cart::{CartLine, CartLineWithProduct},
    email::Email,
    favorite::{FavoriteEntry, FavoriteWithProduct},
    password::Password,
    product::{NewProduct, Product, ProductPatch},
    quantity::Quantity,
    user::{NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Hash the password and persist the user, assigning its id.
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn get_user_by_id(&self, user_id: i64) -> Result<User, UserStoreError>;
    /// Verify the password against the stored hash.
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError>;
    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError>;
}

// ProductStore port trait and errors
#[derive(Debug, Error)]
pub enum ProductStoreError {
    #[error("Product not found")]
    ProductNotFound,
    #[error("Product is referenced by carts or favorites")]
    ProductInUse,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for ProductStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ProductNotFound, Self::ProductNotFound) => true,
            (Self::ProductInUse, Self::ProductInUse) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn add_product(&self, new_product: NewProduct) -> Result<Product, ProductStoreError>;
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductStoreError>;
    async fn get_product(&self, product_id: i64) -> Result<Product, ProductStoreError>;
    /// Apply the non-`None` fields of the patch and return the updated product.
    async fn update_product(
        &self,
        product_id: i64,
        patch: ProductPatch,
    ) -> Result<Product, ProductStoreError>;
    /// Fails with [`ProductStoreError::ProductInUse`] while any cart line or
    /// favorite still references the product.
    async fn delete_product(&self, product_id: i64) -> Result<(), ProductStoreError>;
}

// CartStore port trait and errors
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("User or product not found")]
    UserOrProductNotFound,
    #[error("Product not found in cart")]
    LineNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CartStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserOrProductNotFound, Self::UserOrProductNotFound) => true,
            (Self::LineNotFound, Self::LineNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait CartStore: Send + Sync {
    /// Insert a line for (user, product), or add the quantity to an existing
    /// line. The two cases must not race with each other.
    async fn upsert_line(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: Quantity,
    ) -> Result<CartLine, CartStoreError>;
    /// Remove the line for (user, product) and return it.
    async fn remove_line(&self, user_id: i64, product_id: i64)
        -> Result<CartLine, CartStoreError>;
    async fn get_cart(&self, user_id: i64) -> Result<Vec<CartLineWithProduct>, CartStoreError>;
}

// FavoriteStore port trait and errors
#[derive(Debug, Error)]
pub enum FavoriteStoreError {
    #[error("User or product not found")]
    UserOrProductNotFound,
    #[error("Product is already in favorites")]
    AlreadyFavorite,
    #[error("Product not found in favorites")]
    EntryNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for FavoriteStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserOrProductNotFound, Self::UserOrProductNotFound) => true,
            (Self::AlreadyFavorite, Self::AlreadyFavorite) => true,
            (Self::EntryNotFound, Self::EntryNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn add_favorite(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, FavoriteStoreError>;
    /// Remove the favorite for (user, product) and return it.
    async fn remove_favorite(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, FavoriteStoreError>;
    async fn get_favorites(
        &self,
        user_id: i64,
    ) -> Result<Vec<FavoriteWithProduct>, FavoriteStoreError>;
}
