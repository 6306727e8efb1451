//! Error types for PhysiLab
//!
//! Every failure the crate can raise is a variant of one enum so the front
//! end catches a single root and renders a message; raw low-level faults are
//! never leaked to callers.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
///
/// Validation and consistency failures are user-correctable; data-integrity
/// failures signal manual file edits or schema drift and are surfaced
/// distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input is physically or structurally invalid.
    Validation,
    /// The request conflicts with the current store state.
    Consistency,
    /// Persisted data does not match the expected schema.
    DataIntegrity,
    /// Underlying file or encoding failure.
    Io,
}

/// PhysiLab error types
#[derive(Error, Debug)]
pub enum Error {
    /// Too few known quantities to infer the missing one
    #[error("insufficient data: {missing} quantities missing, at most one may be unknown")]
    InsufficientData {
        /// Number of unknown quantities in the candidate
        missing: usize,
    },

    /// Identifier already present in the store
    #[error("duplicate identifier: id {0} already exists in the store")]
    DuplicateId(i64),

    /// Identifier is not a positive integer
    #[error("invalid identifier: {0} is not a positive integer")]
    InvalidId(i64),

    /// A provided physical quantity is negative
    #[error("invalid value: {0} must be non-negative")]
    NegativeValue(f64),

    /// Deriving a quantity would divide by zero
    #[error("cannot compute {0}: divisor is zero")]
    DivisionByZero(&'static str),

    /// No record matches the identifier
    #[error("experiment not found: no record with id {0}")]
    NotFound(i64),

    /// Launch angle outside the physically meaningful range
    #[error("invalid angle: {0} degrees is outside [0, 90]")]
    InvalidAngle(f64),

    /// Persisted record carries an unrecognized kind tag
    #[error("unknown experiment kind '{0}' in stored data")]
    UnknownKind(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error for boundary reporting.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InsufficientData { .. }
            | Self::NegativeValue(_)
            | Self::DivisionByZero(_)
            | Self::InvalidAngle(_) => ErrorCategory::Validation,
            Self::DuplicateId(_) | Self::InvalidId(_) | Self::NotFound(_) => {
                ErrorCategory::Consistency
            }
            Self::UnknownKind(_) => ErrorCategory::DataIntegrity,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Io,
        }
    }
}
