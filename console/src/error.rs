//! Error handling for the Stockdesk console
//!
//! Failures map onto three backend-facing categories: transport failure,
//! non-2xx API response, and contract violation (a payload the versioned
//! contract does not allow). Contract mismatches fail loudly; there is no
//! try-another-endpoint fallback. Every failure is terminal for the
//! triggering command and never fatal to anything beyond it.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// The request never produced an HTTP response (DNS, connect, timeout)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response; `message` comes from the body's `error` field when
    /// present, otherwise it is a generic status description
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body does not match the versioned contract
    #[error("contract violation at {url}: {detail}")]
    Contract { url: String, detail: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Valuation(#[from] shared::valuation::ValuationError),

    #[error("export failed: {0}")]
    Export(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

impl From<&'static str> for AppError {
    fn from(message: &'static str) -> Self {
        AppError::Validation(message.to_string())
    }
}

/// Result type alias for console operations
pub type AppResult<T> = Result<T, AppError>;
