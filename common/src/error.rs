//! Error types, one enum per concern.

use thiserror::Error;

/// Invalid controller settings, rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The typewriter needs at least one phrase to cycle through.
    #[error("phrase list is empty")]
    EmptyPhrases,

    /// A repeating tick with a zero period never lets time advance.
    #[error("{name} period must be greater than zero")]
    ZeroPeriod { name: &'static str },

    /// Increment range must be finite, non-negative and non-empty.
    #[error("invalid increment range [{min}, {max})")]
    InvalidIncrementRange { min: f32, max: f32 },
}

/// Project catalog failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed project catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Detail page requested for an unknown project.
    #[error("no project with id `{id}`")]
    NotFound { id: String },

    #[error("project id `{id}` appears more than once")]
    DuplicateId { id: String },
}

/// Contact form failures, surfaced to the visitor as an error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("email address is not valid")]
    InvalidEmail,

    /// The delivery service refused the message.
    #[error("message rejected: {reason}")]
    Rejected { reason: String },
}
