use souq_core::{Product, ProductStore, ProductStoreError};

/// List products use case - returns the whole catalog
pub struct ListProductsUseCase<P>
where
    P: ProductStore,
{
    product_store: P,
}

impl<P> ListProductsUseCase<P>
where
    P: ProductStore,
{
    pub fn new(product_store: P) -> Self {
        Self { product_store }
    }

    #[tracing::instrument(name = "ListProductsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Product>, ProductStoreError> {
        self.product_store.get_all_products().await
    }
}
