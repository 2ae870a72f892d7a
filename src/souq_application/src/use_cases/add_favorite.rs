use souq_core::{
    FavoriteEntry, FavoriteStore, FavoriteStoreError, ProductStore, ProductStoreError, UserStore,
    UserStoreError,
};

/// Error types specific to add favorite use case
#[derive(Debug, thiserror::Error)]
pub enum AddFavoriteError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Product store error: {0}")]
    ProductStoreError(#[from] ProductStoreError),
    #[error("Favorite store error: {0}")]
    FavoriteStoreError(#[from] FavoriteStoreError),
}

/// Add favorite use case - marks a product as a user's favorite
pub struct AddFavoriteUseCase<U, P, F>
where
    U: UserStore,
    P: ProductStore,
    F: FavoriteStore,
{
    user_store: U,
    product_store: P,
    favorite_store: F,
}

impl<U, P, F> AddFavoriteUseCase<U, P, F>
where
    U: UserStore,
    P: ProductStore,
    F: FavoriteStore,
{
    pub fn new(user_store: U, product_store: P, favorite_store: F) -> Self {
        Self {
            user_store,
            product_store,
            favorite_store,
        }
    }

    /// Execute the add favorite use case
    ///
    /// Both the user and the product must exist. Favoriting the same product
    /// twice is rejected by the favorite store.
    #[tracing::instrument(name = "AddFavoriteUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, AddFavoriteError> {
        self.user_store.get_user_by_id(user_id).await?;
        self.product_store.get_product(product_id).await?;

        let entry = self.favorite_store.add_favorite(user_id, product_id).await?;

        Ok(entry)
    }
}
