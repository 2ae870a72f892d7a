use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use souq_application::AddFavoriteUseCase;
use souq_core::{FavoriteStore, ProductStore, UserStore};

use super::error::ShopApiError;

#[derive(Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "productId")]
    pub product_id: i64,
}

#[tracing::instrument(name = "Add favorite", skip_all)]
pub async fn add_favorite<U, P, F>(
    State((user_store, product_store, favorite_store)): State<(U, P, F)>,
    WithRejection(Json(request), _): WithRejection<Json<AddFavoriteRequest>, ShopApiError>,
) -> Result<impl IntoResponse, ShopApiError>
where
    U: UserStore + Clone + 'static,
    P: ProductStore + Clone + 'static,
    F: FavoriteStore + Clone + 'static,
{
    let use_case = AddFavoriteUseCase::new(user_store, product_store, favorite_store);

    let entry = use_case.execute(request.user_id, request.product_id).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}
