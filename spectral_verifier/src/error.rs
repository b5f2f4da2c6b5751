use thiserror::Error;

/// Construction-time rejection of verifier inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("tolerance must be a positive finite number, got {0}")]
    NonPositiveTolerance(f64),
}

/// Result type for verifier construction.
pub type Result<T, E = DomainError> = std::result::Result<T, E>;
