use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use souq_application::DeleteProductUseCase;
use souq_core::ProductStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "Delete product", skip_all)]
pub async fn delete_product<P>(
    State(product_store): State<P>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ShopApiError>
where
    P: ProductStore + Clone + 'static,
{
    let use_case = DeleteProductUseCase::new(product_store);
    use_case.execute(product_id).await?;

    Ok(StatusCode::OK)
}
