use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use souq_application::RemoveFavoriteUseCase;
use souq_core::FavoriteStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "Remove favorite", skip_all)]
pub async fn remove_favorite<F>(
    State(favorite_store): State<F>,
    Path((user_id, product_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ShopApiError>
where
    F: FavoriteStore + Clone + 'static,
{
    let use_case = RemoveFavoriteUseCase::new(favorite_store);
    let entry = use_case.execute(user_id, product_id).await?;

    Ok(Json(entry))
}
