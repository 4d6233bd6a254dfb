use crate::domain::payment::{Payment, PaymentRequest, PaymentStatus};
use crate::domain::ports::{AuthorizerBox, PaymentStoreBox};
use crate::domain::validation;
use crate::error::{PaymentError, Result};
use tracing::{info, warn};
use uuid::Uuid;

/// Turns a validated request into a payment status by delegating to the
/// injected authorizer.
///
/// Kept as its own seam so the network client can be replaced without
/// touching submission orchestration.
pub struct OutcomeResolver {
    authorizer: AuthorizerBox,
}

impl OutcomeResolver {
    pub fn new(authorizer: AuthorizerBox) -> Self {
        Self { authorizer }
    }

    /// Returns the authorizer's verdict, propagating its error unchanged.
    pub async fn resolve(&self, request: &PaymentRequest) -> Result<PaymentStatus> {
        self.authorizer.authorize(request).await
    }
}

/// The submission entry point.
///
/// One submission is one linear pass: validate, resolve the outcome against
/// the authorizer, persist the record, return it. Validation failures stop
/// before the authorizer is contacted; downstream failures propagate with
/// nothing stored.
pub struct PaymentGateway {
    store: PaymentStoreBox,
    resolver: OutcomeResolver,
}

impl PaymentGateway {
    pub fn new(store: PaymentStoreBox, authorizer: AuthorizerBox) -> Self {
        Self {
            store,
            resolver: OutcomeResolver::new(authorizer),
        }
    }

    /// Submits a payment for processing.
    ///
    /// Every authorizer-decided outcome, including `Rejected`, stores exactly
    /// one record before returning it.
    pub async fn submit_payment(&self, request: PaymentRequest) -> Result<Payment> {
        let validation = validation::validate(&request);
        if !validation.is_valid() {
            warn!(
                reasons = validation.reasons().len(),
                "payment request failed validation"
            );
            return Err(PaymentError::Validation {
                reasons: validation.into_reasons(),
            });
        }

        let status = self.resolver.resolve(&request).await?;
        let payment = Payment::from_request(&request, status)?;
        self.store.add(payment.clone()).await?;
        info!(id = %payment.id, status = ?payment.status, "payment stored");

        Ok(payment)
    }

    /// Looks up a previously stored payment; `None` means not found.
    pub async fn get_payment(&self, id: Uuid) -> Result<Option<Payment>> {
        self.store.get(id).await
    }
}
