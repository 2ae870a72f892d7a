use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use souq_application::RegisterUseCase;
use souq_core::{Email, NewUser, Password, User, UserStore};

use super::error::ShopApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub age: i32,
    pub image: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U>(
    State(user_store): State<U>,
    WithRejection(Json(request), _): WithRejection<Json<RegisterRequest>, ShopApiError>,
) -> Result<impl IntoResponse, ShopApiError>
where
    U: UserStore + Clone + 'static,
{
    let use_case = RegisterUseCase::new(user_store);

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let user = use_case
        .execute(NewUser {
            email,
            password,
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            image: request.image,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: String::from("User registered successfully"),
            user,
        }),
    ))
}
