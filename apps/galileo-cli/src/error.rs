//! CLI error types and exit codes

use connector_core::ConnectorError;
use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error
/// - 2: Configuration error
/// - 3: Authentication failed
/// - 130: Interrupted
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Interrupted")]
    Cancelled,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Connector(ConnectorError),

    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::AuthenticationFailed(_) => 3,
            CliError::Cancelled => 130,
            CliError::NotFound(_) | CliError::Connector(_) | CliError::Output(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {self}");
        } else {
            eprintln!("Error: {self}");
        }

        if let CliError::Connector(err) = self {
            let mut source = std::error::Error::source(err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {suggestion}");
            } else {
                eprintln!("\nSuggestion: {suggestion}");
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Config(_) => Some(
                "Pass --api-login, --api-trans-key and --provider-id, or set the matching BATON_* variables.",
            ),
            CliError::AuthenticationFailed(_) => {
                Some("Check the credentials and --hostname, then run 'galileo-connector validate'.")
            }
            _ => None,
        }
    }
}

impl From<ConnectorError> for CliError {
    fn from(e: ConnectorError) -> Self {
        if e.is_cancelled() {
            return CliError::Cancelled;
        }

        match e {
            ConnectorError::InvalidConfiguration { message } => CliError::Config(message),
            ConnectorError::Unauthenticated { message } => CliError::AuthenticationFailed(message),
            other => CliError::Connector(other),
        }
    }
}

impl From<connector_galileo::GalileoError> for CliError {
    fn from(e: connector_galileo::GalileoError) -> Self {
        ConnectorError::from(e).into()
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(format!("JSON error: {e}"))
    }
}
