use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use souq_application::ListFavoritesUseCase;
use souq_core::FavoriteStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "List favorites", skip_all)]
pub async fn list_favorites<F>(
    State(favorite_store): State<F>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ShopApiError>
where
    F: FavoriteStore + Clone + 'static,
{
    let use_case = ListFavoritesUseCase::new(favorite_store);
    let favorites = use_case.execute(user_id).await?;

    Ok(Json(favorites))
}
