use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use souq_application::GetUserUseCase;
use souq_core::UserStore;

use super::error::ShopApiError;

#[tracing::instrument(name = "Get user", skip_all)]
pub async fn get_user<U>(
    State(user_store): State<U>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ShopApiError>
where
    U: UserStore + Clone + 'static,
{
    let use_case = GetUserUseCase::new(user_store);
    let user = use_case.execute(user_id).await?;

    Ok(Json(user))
}
