use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use rust_decimal::Decimal;
use serde::Deserialize;
use souq_application::UpdateProductUseCase;
use souq_core::{Price, ProductPatch, ProductStore};

use super::error::ShopApiError;

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[tracing::instrument(name = "Update product", skip_all)]
pub async fn update_product<P>(
    State(product_store): State<P>,
    Path(product_id): Path<i64>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateProductRequest>, ShopApiError>,
) -> Result<impl IntoResponse, ShopApiError>
where
    P: ProductStore + Clone + 'static,
{
    let use_case = UpdateProductUseCase::new(product_store);

    let price = request.price.map(Price::try_from).transpose()?;

    let product = use_case
        .execute(
            product_id,
            ProductPatch {
                name: request.name,
                description: request.description,
                price,
                image_url: request.image_url,
            },
        )
        .await?;

    Ok(Json(product))
}
