use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use souq_application::ResetPasswordUseCase;
use souq_core::{Email, Password, UserStore};

use super::error::ShopApiError;

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: Secret<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Secret<String>,
}

#[derive(Serialize)]
pub struct ResetPasswordResponse {
    pub message: String,
}

#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<U>(
    State(user_store): State<U>,
    WithRejection(Json(request), _): WithRejection<Json<ResetPasswordRequest>, ShopApiError>,
) -> Result<impl IntoResponse, ShopApiError>
where
    U: UserStore + Clone + 'static,
{
    let use_case = ResetPasswordUseCase::new(user_store);

    let email = Email::try_from(request.email)?;
    let new_password = Password::try_from(request.new_password)?;

    use_case.execute(email, new_password).await?;

    Ok((
        StatusCode::OK,
        Json(ResetPasswordResponse {
            message: String::from("Password reset successfully"),
        }),
    ))
}
