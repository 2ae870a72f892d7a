use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use souq_application::AddToCartUseCase;
use souq_core::{CartStore, ProductStore, Quantity};

use super::error::ShopApiError;

#[derive(Deserialize)]
pub struct AddToCartRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: i32,
}

#[tracing::instrument(name = "Add to cart", skip_all)]
pub async fn add_to_cart<P, C>(
    State((product_store, cart_store)): State<(P, C)>,
    WithRejection(Json(request), _): WithRejection<Json<AddToCartRequest>, ShopApiError>,
) -> Result<impl IntoResponse, ShopApiError>
where
    P: ProductStore + Clone + 'static,
    C: CartStore + Clone + 'static,
{
    let use_case = AddToCartUseCase::new(product_store, cart_store);

    let quantity = Quantity::try_from(request.quantity)?;

    let line = use_case
        .execute(request.user_id, request.product_id, quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(line)))
}
