use souq_core::{CartLine, CartStore, CartStoreError};

/// Remove from cart use case - drops a product from a user's cart
pub struct RemoveFromCartUseCase<C>
where
    C: CartStore,
{
    cart_store: C,
}

impl<C> RemoveFromCartUseCase<C>
where
    C: CartStore,
{
    pub fn new(cart_store: C) -> Self {
        Self { cart_store }
    }

    /// Execute the remove from cart use case
    ///
    /// The whole line is removed regardless of its quantity.
    #[tracing::instrument(name = "RemoveFromCartUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64, product_id: i64) -> Result<CartLine, CartStoreError> {
        self.cart_store.remove_line(user_id, product_id).await
    }
}
