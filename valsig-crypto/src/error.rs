//! Signer error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SignerError>;

/// Errors surfaced by [`crate::Signer`] and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("The supplied hashing algorithm '{0}' is not supported by this system.")]
    InvalidAlgorithm(String),

    #[error("The signature for '{0}' was invalid.")]
    InvalidSignature(String),

    #[error("Invalid signer configuration: {0}")]
    Config(String),
}

impl SignerError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            SignerError::InvalidAlgorithm(_) => "INVALID_ALGORITHM",
            SignerError::InvalidSignature(_) => "INVALID_SIGNATURE",
            SignerError::Config(_) => "CONFIG_ERROR",
        }
    }
}
