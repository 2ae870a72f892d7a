use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use souq_application::GetProductUseCase;
use souq_core::ProductStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "Get product", skip_all)]
pub async fn get_product<P>(
    State(product_store): State<P>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ShopApiError>
where
    P: ProductStore + Clone + 'static,
{
    let use_case = GetProductUseCase::new(product_store);
    let product = use_case.execute(product_id).await?;

    Ok(Json(product))
}
