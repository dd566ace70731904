//! Connector configuration flags

use clap::Args;
use connector_galileo::{GalileoConfig, DEFAULT_PAGE_SIZE};

/// Galileo-FT connection settings, from flags or `BATON_*` variables.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// The API login used to connect to the Galileo-FT API
    #[arg(long, env = "BATON_API_LOGIN", global = true, default_value = "")]
    pub api_login: String,

    /// The API transaction key used to connect to the Galileo-FT API
    #[arg(
        long,
        env = "BATON_API_TRANS_KEY",
        hide_env_values = true,
        global = true,
        default_value = ""
    )]
    pub api_trans_key: String,

    /// The provider ID used to connect to the Galileo-FT API
    #[arg(long, env = "BATON_PROVIDER_ID", global = true, default_value = "")]
    pub provider_id: String,

    /// The hostname used to connect to the Galileo-FT API
    #[arg(long, env = "BATON_HOSTNAME", global = true)]
    pub hostname: Option<String>,

    /// Account whose related accounts are listed as top-level users
    #[arg(long, env = "BATON_ROOT_ACCOUNT", global = true)]
    pub root_account: Option<String>,

    /// Number of root groups requested per page
    #[arg(long, env = "BATON_PAGE_SIZE", global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

impl ConfigArgs {
    /// Build the connector configuration. Validation happens when the
    /// connector is created.
    pub fn to_config(&self) -> GalileoConfig {
        let mut config = GalileoConfig::new(
            self.api_login.as_str(),
            self.api_trans_key.as_str(),
            self.provider_id.as_str(),
        )
        .with_page_size(self.page_size);

        if let Some(hostname) = self.hostname.as_deref().filter(|h| !h.is_empty()) {
            config = config.with_hostname(hostname);
        }
        if let Some(account) = self.root_account.as_deref().filter(|a| !a.is_empty()) {
            config = config.with_root_account(account);
        }

        config
    }
}
