// Fatal conditions that abort a harness run.
// Expected negative outcomes (no availability, failed reservation, ...) are not errors,
// see harness::StopReason.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0} environment variable is missing")]
    MissingParameter(String),

    #[error("Unparseable value for {name}: {value}")]
    UnparseableParameter { name: String, value: String },

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Plugin erred on {operation}: {message}")]
    RpcError {
        operation: &'static str,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{url} has returned {status_code}: {body}")]
    HttpStatusError {
        url: String,
        status_code: u16,
        body: String,
    },

    #[error("Invalid response format: {0}")]
    DecodeError(String),

    #[error("{operation} expects exactly one response, received {received}")]
    CardinalityViolation {
        operation: &'static str,
        received: usize,
    },

    #[error("No products returned")]
    EmptyCatalog,

    #[error("Validation of {subject} failed: {errors:?}")]
    ValidationFailed { subject: String, errors: Vec<String> },

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl HarnessError {
    // Validation errors come out of a set; sort them so the message is stable
    pub fn validation(subject: impl Into<String>, errors: impl IntoIterator<Item = String>) -> Self {
        let mut errors: Vec<String> = errors.into_iter().collect();
        errors.sort();
        HarnessError::ValidationFailed {
            subject: subject.into(),
            errors,
        }
    }
}
