//! # Souq - Shop Service Library
//!
//! This is a facade crate that re-exports all public APIs from the shop service components.
//! Use this crate to get access to all shop functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! souq = { path = "../souq" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Product`, `CartLine`, etc.
//! - **Repository traits**: `UserStore`, `ProductStore`, `CartStore`, `FavoriteStore`
//! - **Use cases**: `RegisterUseCase`, `AddToCartUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `HashMapProductStore`, etc.
//! - **Service**: `ShopService` - The main entry point for the shop service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use souq_core::*;
}

// Re-export most commonly used core types at the root level
pub use souq_core::{
    CartLine, CartLineWithProduct, Email, FavoriteEntry, FavoriteWithProduct, NewProduct, NewUser,
    Password, Price, Product, ProductPatch, Quantity, User, UserError,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use souq_core::{
        CartStore, CartStoreError, FavoriteStore, FavoriteStoreError, ProductStore,
        ProductStoreError, UserStore, UserStoreError,
    };
}

// Re-export repository traits at root level
pub use souq_core::{
    CartStore, CartStoreError, FavoriteStore, FavoriteStoreError, ProductStore, ProductStoreError,
    UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use souq_application::*;
}

// Re-export use cases at root level
pub use souq_application::{
    AddFavoriteUseCase, AddToCartUseCase, CreateProductUseCase, DeleteProductUseCase,
    GetCartUseCase, GetProductUseCase, GetUserUseCase, ListFavoritesUseCase, ListProductsUseCase,
    LoginUseCase, LogoutUseCase, RegisterUseCase, RemoveFavoriteUseCase, RemoveFromCartUseCase,
    ResetPasswordUseCase, UpdateProductUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use souq_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use souq_adapters::persistence::*;
    }

    /// JWT authentication utilities
    pub mod auth {
        pub use souq_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use souq_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use souq_adapters::persistence::{
    HashMapCartStore, HashMapFavoriteStore, HashMapProductStore, HashMapUserStore,
    PostgresCartStore, PostgresFavoriteStore, PostgresProductStore, PostgresUserStore,
};

// ============================================================================
// Shop Service (Main Entry Point)
// ============================================================================

/// Main shop service
pub use souq_service::{ShopService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
