use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use souq_application::RemoveFromCartUseCase;
use souq_core::CartStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "Remove from cart", skip_all)]
pub async fn remove_from_cart<C>(
    State(cart_store): State<C>,
    Path((user_id, product_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ShopApiError>
where
    C: CartStore + Clone + 'static,
{
    let use_case = RemoveFromCartUseCase::new(cart_store);
    let line = use_case.execute(user_id, product_id).await?;

    Ok(Json(line))
}
