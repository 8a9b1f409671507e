use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_transaction::create_transaction;
use super::handlers::current_user::current_user;
use super::handlers::delete_transaction::delete_transaction;
use super::handlers::get_transaction::get_transaction;
use super::handlers::health::health;
use super::handlers::list_transactions::list_transactions;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_transaction::update_transaction;
use super::middleware::authenticate;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::transaction::ports::TransactionServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub transaction_service: Arc<dyn TransactionServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    transaction_service: Arc<dyn TransactionServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        transaction_service,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/v1/users/me", get(current_user))
        .route(
            "/api/v1/transactions",
            post(create_transaction).get(list_transactions),
        )
        .route(
            "/api/v1/transactions/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Headers are left out of the span: they carry bearer tokens
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
