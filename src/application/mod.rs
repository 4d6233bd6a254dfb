//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PaymentGateway` which acts as the primary entry
//! point for submitting payments and looking them up, composing the domain
//! rules with the injected store and authorizer ports.

pub mod gateway;
