use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// The request failed one or more business rules. The authorizer is never
    /// contacted for these.
    #[error("{}", reasons.join("\n"))]
    Validation { reasons: Vec<String> },
    /// The acquirer simulator answered with an unexpected HTTP status.
    #[error("simulator responded with status {0}")]
    Downstream(u16),
    /// The acquirer simulator was unreachable or sent an unreadable body.
    #[error("simulator unreachable: {0}")]
    DownstreamUnavailable(#[from] reqwest::Error),
    /// A record with this id is already stored. Ids are generated fresh per
    /// submission, so this only guards the create-once invariant.
    #[error("payment {0} already exists")]
    DuplicatePayment(Uuid),
    #[error("internal error: {0}")]
    Internal(String),
}
