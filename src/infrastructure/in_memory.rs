use crate::domain::payment::Payment;
use crate::domain::ports::PaymentStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory store for decided payments.
///
/// Uses `Arc<RwLock<HashMap<Uuid, Payment>>>` to allow shared concurrent
/// access. Records live for the lifetime of the process; there is no update
/// or delete path.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<Uuid, Payment>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn add(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        // Records are immutable once stored; a colliding id is refused
        // rather than overwritten.
        if payments.contains_key(&payment.id) {
            return Err(PaymentError::DuplicatePayment(payment.id));
        }
        payments.insert(payment.id, payment);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&id).cloned())
    }
}
