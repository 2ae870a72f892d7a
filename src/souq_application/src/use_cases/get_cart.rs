use souq_core::{CartLineWithProduct, CartStore, CartStoreError};

/// Get cart use case - lists a user's cart with product details
pub struct GetCartUseCase<C>
where
    C: CartStore,
{
    cart_store: C,
}

impl<C> GetCartUseCase<C>
where
    C: CartStore,
{
    pub fn new(cart_store: C) -> Self {
        Self { cart_store }
    }

    /// Execute the get cart use case
    ///
    /// A user with no cart lines gets an empty list, not an error.
    #[tracing::instrument(name = "GetCartUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64) -> Result<Vec<CartLineWithProduct>, CartStoreError> {
        self.cart_store.get_cart(user_id).await
    }
}
