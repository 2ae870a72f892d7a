use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use rust_decimal::Decimal;
use serde::Deserialize;
use souq_application::CreateProductUseCase;
use souq_core::{NewProduct, Price, ProductStore};

use super::error::ShopApiError;

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[tracing::instrument(name = "Create product", skip_all)]
pub async fn create_product<P>(
    State(product_store): State<P>,
    WithRejection(Json(request), _): WithRejection<Json<CreateProductRequest>, ShopApiError>,
) -> Result<impl IntoResponse, ShopApiError>
where
    P: ProductStore + Clone + 'static,
{
    let use_case = CreateProductUseCase::new(product_store);

    let price = Price::try_from(request.price)?;

    let product = use_case
        .execute(NewProduct {
            name: request.name,
            description: request.description,
            price,
            image_url: request.image_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}
