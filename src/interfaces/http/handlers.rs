use crate::application::gateway::PaymentGateway;
use crate::domain::payment::PaymentRequest;
use crate::error::PaymentError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

pub async fn submit_payment(
    Extension(gateway): Extension<Arc<PaymentGateway>>,
    Json(request): Json<PaymentRequest>,
) -> Response {
    match gateway.submit_payment(request).await {
        Ok(payment) => (StatusCode::OK, Json(payment)).into_response(),
        Err(err @ PaymentError::Validation { .. }) => (
            StatusCode::BAD_REQUEST,
            format!("Please provide all required fields for the payment request.\n{err}"),
        )
            .into_response(),
        Err(err) => {
            error!(%err, "payment submission failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Simulator error: {err}"),
            )
                .into_response()
        }
    }
}

pub async fn get_payment(
    Extension(gateway): Extension<Arc<PaymentGateway>>,
    Path(id): Path<Uuid>,
) -> Response {
    match gateway.get_payment(id).await {
        Ok(Some(payment)) => (StatusCode::OK, Json(payment)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            format!("Payment with ID '{id}' was not found."),
        )
            .into_response(),
        Err(err) => {
            error!(%err, "payment lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
