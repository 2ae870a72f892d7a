use souq_core::{FavoriteStore, FavoriteStoreError, FavoriteWithProduct};

/// List favorites use case - lists a user's favorites with product details
pub struct ListFavoritesUseCase<F>
where
    F: FavoriteStore,
{
    favorite_store: F,
}

impl<F> ListFavoritesUseCase<F>
where
    F: FavoriteStore,
{
    pub fn new(favorite_store: F) -> Self {
        Self { favorite_store }
    }

    /// Execute the list favorites use case
    ///
    /// A user with no favorites gets an empty list, not an error.
    #[tracing::instrument(name = "ListFavoritesUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: i64,
    ) -> Result<Vec<FavoriteWithProduct>, FavoriteStoreError> {
        self.favorite_store.get_favorites(user_id).await
    }
}
