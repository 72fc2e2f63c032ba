//! Error types for the VOUCH verification framework.
//!
//! The verification engine only ever produces `VerificationFailed`. The other
//! variants belong to the outer layers (manifest loading, pattern compilation)
//! and are raised before a verification pass starts.

use thiserror::Error;

/// The unified error type for the VOUCH crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VouchError {
    /// A registered rule evaluated to false during a verification pass.
    ///
    /// Carries the message of the first failing rule only.
    #[error("verification failed: {message}")]
    VerificationFailed { message: String },

    /// A manifest or other configuration source is missing or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A pattern handed to a pattern combinator could not be compiled.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl VouchError {
    /// Build a `VerificationFailed` error from any message.
    pub fn verification_failed(message: impl Into<String>) -> Self {
        Self::VerificationFailed {
            message: message.into(),
        }
    }

    /// The bare message without the variant prefix.
    ///
    /// For `VerificationFailed` this is exactly the failing rule's message.
    pub fn message(&self) -> &str {
        match self {
            Self::VerificationFailed { message } => message,
            Self::ConfigError { reason } => reason,
            Self::InvalidPattern { reason, .. } => reason,
        }
    }

    /// True if this error came out of a verification pass.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Self::VerificationFailed { .. })
    }
}

/// Convenience alias used throughout the VOUCH crates.
pub type VouchResult<T> = Result<T, VouchError>;
