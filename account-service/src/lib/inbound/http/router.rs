use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_self::delete_self;
use super::handlers::get_self::get_self;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::update_self::update_self;
use super::middleware::authorize;
use crate::account::ports::AccountServicePort;
use crate::domain::auth::AuthorizationGate;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub gate: Arc<AuthorizationGate>,
}

pub fn create_router(
    account_service: Arc<dyn AccountServicePort>,
    gate: Arc<AuthorizationGate>,
) -> Router {
    let state = AppState {
        account_service,
        gate,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/accounts/me", get(get_self))
        .route("/api/accounts/:account_id", patch(update_self))
        .route("/api/accounts/:account_id", delete(delete_self))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
