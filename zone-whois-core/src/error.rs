//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error types
pub use zone_whois_provider::ProviderError;
pub use zone_whois_toolbox::ToolboxError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// SOA record present but its RNAME cannot be read
    #[error("Malformed SOA record for zone '{zone}': {detail}")]
    MalformedSoa { zone: String, detail: String },

    /// Report file could not be written
    #[error("I/O error: {0}")]
    Io(String),

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// WHOIS lookup failed
    #[error("{0}")]
    Whois(#[from] ToolboxError),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (bad input, missing record, ...), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MalformedSoa { .. } => true,
            Self::Whois(e) => !matches!(e, ToolboxError::NetworkError(_)),
            Self::Provider(e) => e.is_expected(),
            Self::Io(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
