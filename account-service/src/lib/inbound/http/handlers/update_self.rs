use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AccountError;
use crate::account::models::AccountId;
use crate::account::models::AccountName;
use crate::account::models::EmailAddress;
use crate::account::models::UpdateAccountCommand;
use crate::domain::auth::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an account (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateAccountRequestBody {
    fn try_into_command(self) -> Result<UpdateAccountCommand, AccountError> {
        // Provided fields are re-validated with the same rules as signup
        let name = self.name.map(AccountName::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateAccountCommand {
            name,
            email,
            password: self.password,
        })
    }
}

pub async fn update_self(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(account_id): Path<String>,
    Json(body): Json<UpdateAccountRequestBody>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let account_id =
        AccountId::from_string(&account_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    // The original token stays valid unchanged; update never reissues.
    state
        .account_service
        .update_self(&account_id, command, &identity)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
