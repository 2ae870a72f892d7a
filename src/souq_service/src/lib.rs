mod helpers;
mod shop_service;
mod tracing;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use shop_service::ShopService;

// Re-export commonly used types
pub use souq_core::{CartStore, Email, FavoriteStore, ProductStore, UserStore};
