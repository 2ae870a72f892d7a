pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    cart::{CartLine, CartLineWithProduct},
    email::Email,
    favorite::{FavoriteEntry, FavoriteWithProduct},
    password::Password,
    price::{Price, PriceError},
    product::{NewProduct, Product, ProductPatch},
    quantity::{Quantity, QuantityError},
    user::{NewUser, User, UserError},
};

pub use ports::repositories::{
    CartStore, CartStoreError, FavoriteStore, FavoriteStoreError, ProductStore, ProductStoreError,
    UserStore, UserStoreError,
};
