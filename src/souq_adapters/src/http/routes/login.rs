use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use souq_application::LoginUseCase;
use souq_core::{Email, Password, User, UserStore};

use crate::auth::{JwtAuthConfig, generate_auth_token};

use super::error::ShopApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: User,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U>(
    State((user_store, auth_config)): State<(U, JwtAuthConfig)>,
    WithRejection(Json(request), _): WithRejection<Json<LoginRequest>, ShopApiError>,
) -> Result<impl IntoResponse, ShopApiError>
where
    U: UserStore + Clone + 'static,
{
    let use_case = LoginUseCase::new(user_store);

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let user = use_case.execute(email, password).await?;
    let access_token = generate_auth_token(&user, &auth_config)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse { access_token, user }),
    ))
}
