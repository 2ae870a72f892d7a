use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use souq_application::{AddFavoriteError, AddToCartError, LoginError};
use souq_core::{
    CartStoreError, FavoriteStoreError, PriceError, ProductStoreError, QuantityError, UserError,
    UserStoreError,
};
use thiserror::Error;

use crate::auth::TokenAuthError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ShopApiError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product is referenced by carts or favorites")]
    ProductInUse,

    #[error("Product not found in cart")]
    CartLineNotFound,

    #[error("Product not found in favorites")]
    FavoriteNotFound,

    #[error("Product is already in favorites")]
    AlreadyFavorite,

    #[error("User or product not found")]
    UserOrProductNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    AuthenticationError(String),

    #[error("Unexpected error")]
    UnexpectedError(String),
}

impl IntoResponse for ShopApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ShopApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            ShopApiError::InvalidCredentials | ShopApiError::MissingToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            ShopApiError::AuthenticationError(ref details) => {
                // Log why the token was rejected, respond with a generic message only.
                tracing::warn!("Token rejected: {details}");
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            ShopApiError::UserNotFound
            | ShopApiError::ProductNotFound
            | ShopApiError::CartLineNotFound
            | ShopApiError::FavoriteNotFound
            | ShopApiError::UserOrProductNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            ShopApiError::UserAlreadyExists
            | ShopApiError::AlreadyFavorite
            | ShopApiError::ProductInUse => (StatusCode::CONFLICT, self.to_string()),

            ShopApiError::UnexpectedError(ref details) => {
                // Log the details, respond with a generic message only.
                tracing::error!("Unexpected error: {details}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for ShopApiError {
    fn from(error: UserError) -> Self {
        ShopApiError::InvalidInput(error.to_string())
    }
}

impl From<PriceError> for ShopApiError {
    fn from(error: PriceError) -> Self {
        ShopApiError::InvalidInput(error.to_string())
    }
}

impl From<QuantityError> for ShopApiError {
    fn from(error: QuantityError) -> Self {
        ShopApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for ShopApiError {
    fn from(rejection: JsonRejection) -> Self {
        ShopApiError::InvalidInput(rejection.body_text())
    }
}

impl From<UserStoreError> for ShopApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ShopApiError::UserAlreadyExists,
            UserStoreError::UserNotFound => ShopApiError::UserNotFound,
            UserStoreError::IncorrectPassword => ShopApiError::InvalidCredentials,
            UserStoreError::UnexpectedError(e) => ShopApiError::UnexpectedError(e),
        }
    }
}

impl From<ProductStoreError> for ShopApiError {
    fn from(error: ProductStoreError) -> Self {
        match error {
            ProductStoreError::ProductNotFound => ShopApiError::ProductNotFound,
            ProductStoreError::ProductInUse => ShopApiError::ProductInUse,
            ProductStoreError::UnexpectedError(e) => ShopApiError::UnexpectedError(e),
        }
    }
}

impl From<CartStoreError> for ShopApiError {
    fn from(error: CartStoreError) -> Self {
        match error {
            CartStoreError::UserOrProductNotFound => ShopApiError::UserOrProductNotFound,
            CartStoreError::LineNotFound => ShopApiError::CartLineNotFound,
            CartStoreError::UnexpectedError(e) => ShopApiError::UnexpectedError(e),
        }
    }
}

impl From<FavoriteStoreError> for ShopApiError {
    fn from(error: FavoriteStoreError) -> Self {
        match error {
            FavoriteStoreError::UserOrProductNotFound => ShopApiError::UserOrProductNotFound,
            FavoriteStoreError::AlreadyFavorite => ShopApiError::AlreadyFavorite,
            FavoriteStoreError::EntryNotFound => ShopApiError::FavoriteNotFound,
            FavoriteStoreError::UnexpectedError(e) => ShopApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenAuthError> for ShopApiError {
    fn from(error: TokenAuthError) -> Self {
        match error {
            TokenAuthError::MissingToken => ShopApiError::MissingToken,
            TokenAuthError::TokenError(e) => ShopApiError::AuthenticationError(e.to_string()),
            TokenAuthError::UnexpectedError(e) => ShopApiError::UnexpectedError(e),
        }
    }
}

// A failed login never reveals whether the email or the password was wrong.
impl From<LoginError> for ShopApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserStoreError(UserStoreError::UserNotFound)
            | LoginError::UserStoreError(UserStoreError::IncorrectPassword) => {
                ShopApiError::InvalidCredentials
            }
            LoginError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<AddToCartError> for ShopApiError {
    fn from(error: AddToCartError) -> Self {
        match error {
            AddToCartError::ProductStoreError(e) => e.into(),
            AddToCartError::CartStoreError(e) => e.into(),
        }
    }
}

// Adding a favorite reports one combined not-found for either missing side.
impl From<AddFavoriteError> for ShopApiError {
    fn from(error: AddFavoriteError) -> Self {
        match error {
            AddFavoriteError::UserStoreError(UserStoreError::UserNotFound)
            | AddFavoriteError::ProductStoreError(ProductStoreError::ProductNotFound) => {
                ShopApiError::UserOrProductNotFound
            }
            AddFavoriteError::UserStoreError(e) => e.into(),
            AddFavoriteError::ProductStoreError(e) => e.into(),
            AddFavoriteError::FavoriteStoreError(e) => e.into(),
        }
    }
}
