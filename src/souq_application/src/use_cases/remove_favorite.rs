use souq_core::{FavoriteEntry, FavoriteStore, FavoriteStoreError};

/// Remove favorite use case - drops a product from a user's favorites
pub struct RemoveFavoriteUseCase<F>
where
    F: FavoriteStore,
{
    favorite_store: F,
}

impl<F> RemoveFavoriteUseCase<F>
where
    F: FavoriteStore,
{
    pub fn new(favorite_store: F) -> Self {
        Self { favorite_store }
    }

    #[tracing::instrument(name = "RemoveFavoriteUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<FavoriteEntry, FavoriteStoreError> {
        self.favorite_store.remove_favorite(user_id, product_id).await
    }
}
