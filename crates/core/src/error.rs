//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Stage names
/// and regions are carried as plain strings so this crate stays independent of
/// the product model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The active catalog does not recognize the requested type token.
    ///
    /// This is an expected outcome; callers report it and move on.
    #[error("unknown type token {token:?} for region {region}")]
    UnknownToken { token: String, region: String },

    /// A creation strategy was used before a family catalog was injected.
    #[error("no family catalog configured")]
    NoCatalogConfigured,

    /// A lifecycle stage was invoked before its predecessor completed.
    #[error("stage {attempted} invoked out of order (current stage: {current})")]
    OutOfOrderStage { attempted: String, current: String },

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn unknown_token(token: impl Into<String>, region: impl Into<String>) -> Self {
        Self::UnknownToken {
            token: token.into(),
            region: region.into(),
        }
    }

    pub fn out_of_order(attempted: impl Into<String>, current: impl Into<String>) -> Self {
        Self::OutOfOrderStage {
            attempted: attempted.into(),
            current: current.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
