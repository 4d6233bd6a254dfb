use super::payment::{Payment, PaymentRequest, PaymentStatus};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Decides whether a validated payment is allowed.
///
/// Implemented by the acquirer-simulator client in production and by
/// deterministic stand-ins under test. One authoritative attempt per call;
/// implementations must not retry.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentStatus>;
}

/// Keyed storage for decided payments.
///
/// `add` must be atomic with respect to concurrent `get`/`add` calls: a
/// reader sees either nothing or the fully-populated record. No update or
/// delete exists; records are immutable once stored.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn add(&self, payment: Payment) -> Result<()>;
    async fn get(&self, id: Uuid) -> Result<Option<Payment>>;
}

pub type AuthorizerBox = Box<dyn Authorizer>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
