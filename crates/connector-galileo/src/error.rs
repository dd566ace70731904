//! Error types for the Galileo-FT connector.

use connector_core::ConnectorError;
use thiserror::Error;

/// Result type alias using `GalileoError`.
pub type GalileoResult<T> = Result<T, GalileoError>;

/// Errors that can occur when talking to the Galileo-FT API.
#[derive(Debug, Error)]
pub enum GalileoError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request construction or network failure.
    #[error("Request to {endpoint} failed: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response without a decodable error envelope.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    HttpStatus {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    /// Response was not JSON.
    #[error("{endpoint} returned unexpected content type '{content_type}': {body}")]
    UnexpectedContentType {
        endpoint: &'static str,
        content_type: String,
        body: String,
    },

    /// Response body could not be decoded.
    #[error("Failed to decode {endpoint} response: {source}")]
    Json {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Upstream error envelope.
    #[error("{endpoint}: {status} ({status_code})")]
    Api {
        endpoint: &'static str,
        status_code: u32,
        status: String,
    },

    /// A membership query for one group returned more than one record.
    #[error("Unexpected number of group to accounts records for group {group_id}: {count}")]
    UnexpectedMembershipCount { group_id: String, count: usize },

    /// Account overview carried no customer profile.
    #[error("Customer profile not found for account {account_id}")]
    CustomerNotFound { account_id: String },

    /// The cancellation token fired while the request was in flight.
    #[error("Request to {endpoint} cancelled")]
    Cancelled { endpoint: &'static str },
}

impl GalileoError {
    /// Whether the error was caused by cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GalileoError::Cancelled { .. })
    }

    /// The endpoint the failing request targeted, if any.
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            GalileoError::Http { endpoint, .. }
            | GalileoError::HttpStatus { endpoint, .. }
            | GalileoError::UnexpectedContentType { endpoint, .. }
            | GalileoError::Json { endpoint, .. }
            | GalileoError::Api { endpoint, .. }
            | GalileoError::Cancelled { endpoint } => Some(endpoint),
            GalileoError::Config(_)
            | GalileoError::UnexpectedMembershipCount { .. }
            | GalileoError::CustomerNotFound { .. } => None,
        }
    }
}

impl From<GalileoError> for ConnectorError {
    fn from(err: GalileoError) -> Self {
        let operation = err.endpoint().unwrap_or("galileo-ft").to_string();
        match err {
            GalileoError::Config(message) => ConnectorError::invalid_configuration(message),
            GalileoError::Cancelled { .. } => ConnectorError::Cancelled,
            GalileoError::Http { source, .. } => ConnectorError::transport(operation, source),
            GalileoError::HttpStatus { .. }
            | GalileoError::UnexpectedContentType { .. }
            | GalileoError::Json { .. }
            | GalileoError::Api { .. }
            | GalileoError::UnexpectedMembershipCount { .. } => {
                ConnectorError::protocol(operation, err.to_string())
            }
            GalileoError::CustomerNotFound { .. } => ConnectorError::operation_failed(err.to_string()),
        }
    }
}
