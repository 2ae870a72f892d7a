use axum::{Json, extract::State, response::IntoResponse};
use souq_application::ListProductsUseCase;
use souq_core::ProductStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "List products", skip_all)]
pub async fn list_products<P>(
    State(product_store): State<P>,
) -> Result<impl IntoResponse, ShopApiError>
where
    P: ProductStore + Clone + 'static,
{
    let use_case = ListProductsUseCase::new(product_store);
    let products = use_case.execute().await?;

    Ok(Json(products))
}
