//! Error types for the LOPA engine and its command-line shell.
//!
//! Two layers:
//!
//! - [`DomainError`] is raised only by the strict validators
//!   (`rrf_from_pfd`, `pfd_from_rrf`, `rrf_requirement` and the refined
//!   constructors in [`crate::core`]). Everything downstream of those is total.
//! - [`Error`] is the application error used by scenario loading, configuration
//!   and output. Domain errors convert into it with `?`.
//!
//! ```rust
//! use lopa::errors::{DomainError, Error};
//! use lopa::lopa::arithmetic::rrf_from_pfd;
//!
//! let err = rrf_from_pfd(1.5).unwrap_err();
//! assert!(matches!(err, DomainError::PfdOutOfRange(_)));
//!
//! let app: Error = err.into();
//! assert!(app.is_input_error());
//! ```

use thiserror::Error;

/// Arithmetic domain violations raised by the strict validators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("PFD must be in (0, 1], got {0}")]
    PfdOutOfRange(f64),

    #[error("RRF must be positive, got {0}")]
    NonPositiveRrf(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositiveFrequency { name: &'static str, value: f64 },

    #[error(
        "initiating event frequency {initiating_event_frequency} over target frequency \
         {target_frequency} does not give a finite positive RRF"
    )]
    UnrepresentableRrf {
        initiating_event_frequency: f64,
        target_frequency: f64,
    },

    #[error("SIL must be between 1 and 4, got {0}")]
    InvalidSil(u8),

    #[error("severity must be between 1 and 5, got {0}")]
    InvalidSeverity(u8),
}

/// Main error type for lopa operations
#[derive(Debug, Error)]
pub enum Error {
    /// Strict validator rejected an input value
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),

    /// Scenario file is structurally valid but cannot be evaluated
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn scenario(message: impl Into<String>) -> Self {
        Self::Scenario(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the failure stems from user-supplied data rather than the environment.
    ///
    /// Callers map these to input-validation failures, never to internal errors.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(_) | Self::Scenario(_) | Self::Json(_) | Self::Toml(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
