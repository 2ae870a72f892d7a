use souq_core::{ProductStore, ProductStoreError};

/// Delete product use case - removes a product from the catalog
pub struct DeleteProductUseCase<P>
where
    P: ProductStore,
{
    product_store: P,
}

impl<P> DeleteProductUseCase<P>
where
    P: ProductStore,
{
    pub fn new(product_store: P) -> Self {
        Self { product_store }
    }

    /// Execute the delete product use case
    ///
    /// Deletion is refused while any cart line or favorite references the
    /// product, so lists never end up pointing at a missing product.
    #[tracing::instrument(name = "DeleteProductUseCase::execute", skip(self))]
    pub async fn execute(&self, product_id: i64) -> Result<(), ProductStoreError> {
        self.product_store.delete_product(product_id).await
    }
}
