//! HTTP edge: routing and handlers for the submission and retrieval
//! endpoints. Everything beyond status-code and message mapping lives in the
//! application layer.

pub mod handlers;

use crate::application::gateway::PaymentGateway;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;

pub fn create_router(gateway: Arc<PaymentGateway>) -> Router {
    Router::new()
        .route("/api/payments", post(handlers::submit_payment))
        .route("/api/payments/{id}", get(handlers::get_payment))
        .layer(Extension(gateway))
}
