use souq_core::{NewProduct, Product, ProductStore, ProductStoreError};

/// Create product use case - adds a product to the catalog
pub struct CreateProductUseCase<P>
where
    P: ProductStore,
{
    product_store: P,
}

impl<P> CreateProductUseCase<P>
where
    P: ProductStore,
{
    pub fn new(product_store: P) -> Self {
        Self { product_store }
    }

    #[tracing::instrument(name = "CreateProductUseCase::execute", skip_all)]
    pub async fn execute(&self, new_product: NewProduct) -> Result<Product, ProductStoreError> {
        self.product_store.add_product(new_product).await
    }
}
