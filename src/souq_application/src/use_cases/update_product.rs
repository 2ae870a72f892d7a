use souq_core::{Product, ProductPatch, ProductStore, ProductStoreError};

/// Update product use case - applies a partial update to a product
pub struct UpdateProductUseCase<P>
where
    P: ProductStore,
{
    product_store: P,
}

impl<P> UpdateProductUseCase<P>
where
    P: ProductStore,
{
    pub fn new(product_store: P) -> Self {
        Self { product_store }
    }

    /// Execute the update product use case
    ///
    /// Fields left out of the patch keep their stored value.
    #[tracing::instrument(name = "UpdateProductUseCase::execute", skip(self, patch))]
    pub async fn execute(
        &self,
        product_id: i64,
        patch: ProductPatch,
    ) -> Result<Product, ProductStoreError> {
        self.product_store.update_product(product_id, patch).await
    }
}
