use souq_core::{CartLine, CartStore, CartStoreError, ProductStore, ProductStoreError, Quantity};

/// Error types specific to add to cart use case
#[derive(Debug, thiserror::Error)]
pub enum AddToCartError {
    #[error("Product store error: {0}")]
    ProductStoreError(#[from] ProductStoreError),
    #[error("Cart store error: {0}")]
    CartStoreError(#[from] CartStoreError),
}

/// Add to cart use case - puts product units into a user's cart
pub struct AddToCartUseCase<P, C>
where
    P: ProductStore,
    C: CartStore,
{
    product_store: P,
    cart_store: C,
}

impl<P, C> AddToCartUseCase<P, C>
where
    P: ProductStore,
    C: CartStore,
{
    pub fn new(product_store: P, cart_store: C) -> Self {
        Self {
            product_store,
            cart_store,
        }
    }

    /// Execute the add to cart use case
    ///
    /// Adding a product that is already in the cart increases the stored
    /// quantity by the requested amount instead of replacing it.
    ///
    /// # Returns
    /// The cart line after the write, with the accumulated quantity
    #[tracing::instrument(name = "AddToCartUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: Quantity,
    ) -> Result<CartLine, AddToCartError> {
        self.product_store.get_product(product_id).await?;

        let line = self
            .cart_store
            .upsert_line(user_id, product_id, quantity)
            .await?;

        Ok(line)
    }
}
