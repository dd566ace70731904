//! Connector error types
//!
//! Error definitions shared by every connector, classified the way the host
//! reports them back to the operator.

use thiserror::Error;

use crate::resource::ResourceKind;

/// Error that can occur during connector operations.
#[derive(Debug, Error)]
pub enum ConnectorError {
    // Configuration errors (reported before any network call)
    /// Connector configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    // Authentication errors
    /// The target system rejected the configured credentials.
    #[error("unauthenticated: {message}")]
    Unauthenticated { message: String },

    // Transport errors
    /// Request construction or network failure.
    #[error("transport error during {operation}: {source}")]
    Transport {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Protocol errors
    /// Unexpected content type, malformed payload, or an upstream error envelope.
    #[error("protocol error during {operation}: {message}")]
    Protocol { operation: String, message: String },

    /// The page token handed back by the host could not be decoded.
    #[error("invalid page token '{token}'")]
    InvalidPageToken { token: String },

    // Domain errors
    /// Principal is not of a kind the entitlement can be granted to.
    #[error("principal '{principal}' of kind {kind} cannot hold this entitlement")]
    InvalidPrincipal {
        principal: String,
        kind: ResourceKind,
    },

    /// Operation failed.
    #[error("{message}")]
    OperationFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request-scoped cancellation signal fired.
    #[error("operation cancelled")]
    Cancelled,
}

impl ConnectorError {
    /// Get an error code for classification.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConnectorError::InvalidConfiguration { .. } => "INVALID_CONFIG",
            ConnectorError::Unauthenticated { .. } => "UNAUTHENTICATED",
            ConnectorError::Transport { .. } => "TRANSPORT_ERROR",
            ConnectorError::Protocol { .. } => "PROTOCOL_ERROR",
            ConnectorError::InvalidPageToken { .. } => "INVALID_PAGE_TOKEN",
            ConnectorError::InvalidPrincipal { .. } => "INVALID_PRINCIPAL",
            ConnectorError::OperationFailed { .. } => "OPERATION_FAILED",
            ConnectorError::Cancelled => "CANCELLED",
        }
    }

    /// Whether this error, or an error it wraps, is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        match self {
            ConnectorError::Cancelled => true,
            ConnectorError::OperationFailed {
                source: Some(source),
                ..
            } => source
                .downcast_ref::<ConnectorError>()
                .is_some_and(ConnectorError::is_cancelled),
            _ => false,
        }
    }

    // Convenience constructors

    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ConnectorError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an unauthenticated error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        ConnectorError::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a transport error for the named operation.
    pub fn transport(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConnectorError::Transport {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Create a protocol error for the named operation.
    pub fn protocol(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ConnectorError::Protocol {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an operation failed error.
    pub fn operation_failed(message: impl Into<String>) -> Self {
        ConnectorError::OperationFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create an operation failed error with source.
    ///
    /// Cancellation is passed through unchanged so callers can still match on
    /// [`ConnectorError::Cancelled`] after context has been added.
    pub fn operation_failed_with_source(message: impl Into<String>, source: ConnectorError) -> Self {
        if matches!(source, ConnectorError::Cancelled) {
            return source;
        }
        ConnectorError::OperationFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;
