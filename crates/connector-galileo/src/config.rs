//! Galileo-FT connector configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;

use crate::{GalileoError, GalileoResult};

/// Default API host (Galileo-FT sandbox).
pub const DEFAULT_HOSTNAME: &str = "api-sandbox.cv.gpsrv.com";

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size accepted by `validate`.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Connection settings for the Galileo-FT API.
///
/// Built once and never mutated; the client keeps its own copy.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GalileoConfig {
    /// Username provided by Galileo-FT for API access.
    pub api_login: String,

    /// Password paired with `api_login`.
    pub api_trans_key: SecretString,

    /// Identifier of the integrating organization.
    pub provider_id: String,

    /// Host override for production (defaults to the sandbox host).
    #[serde(default)]
    pub hostname: Option<String>,

    /// Primary account whose related accounts are listed as users.
    #[serde(default)]
    pub root_account: Option<String>,

    /// Records requested per page of list endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl fmt::Debug for GalileoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalileoConfig")
            .field("api_login", &self.api_login)
            .field("api_trans_key", &"***REDACTED***")
            .field("provider_id", &self.provider_id)
            .field("hostname", &self.hostname)
            .field("root_account", &self.root_account)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl GalileoConfig {
    /// Create a config with the required credentials.
    pub fn new(
        api_login: impl Into<String>,
        api_trans_key: impl Into<String>,
        provider_id: impl Into<String>,
    ) -> Self {
        Self {
            api_login: api_login.into(),
            api_trans_key: SecretString::from(api_trans_key.into()),
            provider_id: provider_id.into(),
            hostname: None,
            root_account: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the API host. A value carrying an `http://` or `https://`
    /// scheme is used as the full base URL.
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the primary account whose related accounts are listed as users.
    #[must_use]
    pub fn with_root_account(mut self, account: impl Into<String>) -> Self {
        self.root_account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check required fields before any network call is made.
    pub fn validate(&self) -> GalileoResult<()> {
        let missing: Vec<&str> = [
            ("api-login", self.api_login.trim().is_empty()),
            (
                "api-trans-key",
                self.api_trans_key.expose_secret().trim().is_empty(),
            ),
            ("provider-id", self.provider_id.trim().is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, empty)| empty.then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(GalileoError::Config(format!(
                "{} must be provided",
                missing.join(", ")
            )));
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(GalileoError::Config(format!(
                "page-size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }

        self.base_url()?;
        Ok(())
    }

    /// Base URL all endpoint paths are joined onto.
    pub fn base_url(&self) -> GalileoResult<url::Url> {
        let host = self
            .hostname
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOSTNAME);

        let raw = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        };

        let url = url::Url::parse(&raw)
            .map_err(|e| GalileoError::Config(format!("invalid hostname '{host}': {e}")))?;

        if url.path() != "/" || url.query().is_some() {
            return Err(GalileoError::Config(format!(
                "hostname must not contain a path or query: {host}"
            )));
        }

        Ok(url)
    }

    /// Copy with the secret replaced, safe to log or print.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.api_trans_key = SecretString::from("***REDACTED***".to_string());
        config
    }
}
