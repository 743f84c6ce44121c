use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::AccountId;
use crate::domain::auth::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;

pub async fn delete_self(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<DeleteAccountResponseData>, ApiError> {
    let account_id =
        AccountId::from_string(&account_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .account_service
        .delete_self(&account_id, &identity)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteAccountResponseData {
                    message: "Account deleted".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAccountResponseData {
    pub message: String,
}
