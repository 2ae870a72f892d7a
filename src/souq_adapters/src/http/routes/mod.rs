pub mod add_favorite;
pub mod add_to_cart;
pub mod create_product;
pub mod delete_product;
pub mod error;
pub mod get_cart;
pub mod get_product;
pub mod get_user;
pub mod list_favorites;
pub mod list_products;
pub mod login;
pub mod logout;
pub mod register;
pub mod remove_favorite;
pub mod remove_from_cart;
pub mod reset_password;
pub mod update_product;

pub use add_favorite::{AddFavoriteRequest, add_favorite};
pub use add_to_cart::{AddToCartRequest, add_to_cart};
pub use create_product::{CreateProductRequest, create_product};
pub use delete_product::delete_product;
pub use error::{ErrorResponse, ShopApiError};
pub use get_cart::get_cart;
pub use get_product::get_product;
pub use get_user::get_user;
pub use list_favorites::list_favorites;
pub use list_products::list_products;
pub use login::{LoginRequest, LoginResponse, login};
pub use logout::{LogoutResponse, logout};
pub use register::{RegisterRequest, RegisterResponse, register};
pub use remove_favorite::remove_favorite;
pub use remove_from_cart::remove_from_cart;
pub use reset_password::{ResetPasswordRequest, ResetPasswordResponse, reset_password};
pub use update_product::{UpdateProductRequest, update_product};
