use souq_core::{Product, ProductStore, ProductStoreError};

/// Get product use case - looks up one product by id
pub struct GetProductUseCase<P>
where
    P: ProductStore,
{
    product_store: P,
}

impl<P> GetProductUseCase<P>
where
    P: ProductStore,
{
    pub fn new(product_store: P) -> Self {
        Self { product_store }
    }

    #[tracing::instrument(name = "GetProductUseCase::execute", skip(self))]
    pub async fn execute(&self, product_id: i64) -> Result<Product, ProductStoreError> {
        self.product_store.get_product(product_id).await
    }
}
