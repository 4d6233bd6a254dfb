use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card payment submission as received from the client.
///
/// Carries the full card number and verification code for the duration of a
/// single submission only; neither is ever persisted.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub card_number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: u64,
    pub cvv: String,
}

/// Terminal outcome of a submission the authorizer got to see.
///
/// `Authorized`/`Declined` mean the authorizer evaluated the request;
/// `Rejected` means it refused to evaluate it at all.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

/// The stored record of a decided submission.
///
/// Created exactly once per decided submission and immutable afterwards.
/// Only the last four card digits are retained.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: u16,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: u64,
}

impl Payment {
    /// Builds the record for a validated request, generating a fresh id and
    /// deriving the last four card digits.
    pub fn from_request(request: &PaymentRequest, status: PaymentStatus) -> Result<Self> {
        let digits = &request.card_number;
        let tail = digits
            .len()
            .checked_sub(4)
            .and_then(|start| digits.get(start..))
            .ok_or_else(|| {
                PaymentError::Internal(
                    "card number too short to derive last four digits".to_string(),
                )
            })?;
        let last_four = tail
            .parse::<u16>()
            .map_err(|e| PaymentError::Internal(format!("card number is not numeric: {e}")))?;

        Ok(Self {
            id: Uuid::new_v4(),
            status,
            card_number_last_four: last_four,
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.clone(),
            amount: request.amount,
        })
    }
}
