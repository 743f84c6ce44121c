use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::GateError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware guarding protected routes.
///
/// Hands the raw `Authorization` header to the authorization gate and,
/// on admission, attaches the resolved identity to the request
/// extensions as a typed value for downstream handlers.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let bearer = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = state.gate.admit(bearer).await.map_err(|e| {
        match &e {
            GateError::Store(detail) => {
                tracing::error!(error = %detail, "Identity resolution failed in store")
            }
            rejection => tracing::warn!(reason = %rejection, "Request rejected at gate"),
        }

        match e {
            GateError::MissingCredential => {
                ApiError::Unauthorized("Missing bearer token in Authorization header".to_string())
            }
            GateError::Expired => ApiError::Unauthorized("Token is expired".to_string()),
            GateError::Invalid(_) => ApiError::Unauthorized("Token is invalid".to_string()),
            GateError::UnknownIdentity(_) => {
                ApiError::Unauthorized("No account for this token".to_string())
            }
            GateError::Store(detail) => ApiError::InternalServerError(detail),
        }
        .into_response()
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
