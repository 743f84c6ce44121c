use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::login::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AccountError;
use crate::account::models::AccountName;
use crate::account::models::EmailAddress;
use crate::account::models::SignupCommand;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::from)?;

    let session = state
        .account_service
        .signup(command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SessionResponseData {
            account: (&session.account).into(),
            token: session.access_token,
        },
    ))
}

/// HTTP request body for creating an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl SignupRequestBody {
    fn try_into_command(self) -> Result<SignupCommand, AccountError> {
        let name = AccountName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        SignupCommand::new(name, email, self.password)
    }
}
