use crate::domain::payment::{PaymentRequest, PaymentStatus};
use crate::domain::ports::Authorizer;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// HTTP client for the external acquirer simulator.
///
/// One authoritative attempt per submission: no retries, no backoff. Timeout
/// and cancellation policy belong to the caller's transport configuration.
pub struct SimulatorClient {
    endpoint: String,
    http: reqwest::Client,
}

/// Wire shape the simulator expects.
#[derive(Serialize)]
struct SimulatorRequest<'a> {
    card_number: &'a str,
    expiry_date: String,
    currency: &'a str,
    amount: u64,
    cvv: &'a str,
}

#[derive(Deserialize)]
struct SimulatorResponse {
    authorized: bool,
}

impl SimulatorClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Authorizer for SimulatorClient {
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentStatus> {
        let payload = SimulatorRequest {
            card_number: &request.card_number,
            // Two-digit month, four-digit year.
            expiry_date: format!("{:02}/{}", request.expiry_month, request.expiry_year),
            currency: &request.currency,
            amount: request.amount,
            cvv: &request.cvv,
        };

        let response = self.http.post(&self.endpoint).json(&payload).send().await?;

        // A 400 is the simulator refusing to evaluate the request: a business
        // outcome, not a failure.
        if response.status() == StatusCode::BAD_REQUEST {
            return Ok(PaymentStatus::Rejected);
        }
        if !response.status().is_success() {
            error!(
                status = response.status().as_u16(),
                "simulator returned unexpected status"
            );
            return Err(PaymentError::Downstream(response.status().as_u16()));
        }

        let body: SimulatorResponse = response.json().await?;
        debug!(authorized = body.authorized, "simulator verdict received");

        Ok(if body.authorized {
            PaymentStatus::Authorized
        } else {
            PaymentStatus::Declined
        })
    }
}
