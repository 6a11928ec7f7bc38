//! Errors raised at the edges of the calculator (input files, validation, export)
//!
//! The engines themselves never fail; out-of-range numbers degrade gracefully and
//! runaway simulations stop at fixed month caps.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidField { field: String, reason: String },

    #[error("No scenarios found in {0}")]
    EmptyBatch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InputError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        InputError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
