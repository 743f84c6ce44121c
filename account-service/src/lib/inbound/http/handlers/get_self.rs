use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;

pub async fn get_self(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    state
        .account_service
        .get_self(&identity)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
