pub mod add_favorite;
pub mod add_to_cart;
pub mod create_product;
pub mod delete_product;
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

// Re-export for convenience
pub use add_favorite::{AddFavoriteError, AddFavoriteUseCase};
pub use add_to_cart::{AddToCartError, AddToCartUseCase};
pub use create_product::CreateProductUseCase;
pub use delete_product::DeleteProductUseCase;
pub use get_cart::GetCartUseCase;
pub use get_product::GetProductUseCase;
pub use get_user::GetUserUseCase;
pub use list_favorites::ListFavoritesUseCase;
pub use list_products::ListProductsUseCase;
pub use login::{LoginError, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::RegisterUseCase;
pub use remove_favorite::RemoveFavoriteUseCase;
pub use remove_from_cart::RemoveFromCartUseCase;
pub use reset_password::ResetPasswordUseCase;
pub use update_product::UpdateProductUseCase;
