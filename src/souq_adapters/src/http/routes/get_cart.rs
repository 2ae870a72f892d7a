use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use souq_application::GetCartUseCase;
use souq_core::CartStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "Get cart", skip_all)]
pub async fn get_cart<C>(
    State(cart_store): State<C>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ShopApiError>
where
    C: CartStore + Clone + 'static,
{
    let use_case = GetCartUseCase::new(cart_store);
    let cart = use_case.execute(user_id).await?;

    Ok(Json(cart))
}
