use axum::{Json, extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use souq_application::LogoutUseCase;

use crate::auth::{JwtAuthConfig, extract_bearer_token, validate_auth_token};

use super::error::ShopApiError;

#[derive(Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Acknowledges the logout. Nothing is revoked server side, the token
/// simply expires on its own.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(auth_config): State<JwtAuthConfig>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ShopApiError> {
    let token = extract_bearer_token(&headers)?;
    let claims = validate_auth_token(token, &auth_config)?;

    let use_case = LogoutUseCase::new();
    let message = use_case.execute(claims.sub);

    Ok((StatusCode::OK, Json(LogoutResponse { message })))
}
