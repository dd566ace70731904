//! Galileo-FT connector facade.

use async_trait::async_trait;
use connector_core::{Connector, ConnectorError, ConnectorMetadata, ConnectorResult, ResourceSyncer};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::{GalileoClient, GalileoConfig, GroupSyncer, UserSyncer};

/// Connector syncing Galileo-FT accounts and groups.
#[derive(Debug, Clone)]
pub struct GalileoConnector {
    client: Arc<GalileoClient>,
}

impl GalileoConnector {
    /// Create a connector with its own HTTP transport.
    ///
    /// Configuration problems are reported here, before any network call.
    pub fn new(config: GalileoConfig) -> ConnectorResult<Self> {
        let client = GalileoClient::new(config)?;
        Ok(Self::from_client(client))
    }

    /// Create a connector on a shared HTTP transport.
    pub fn with_http_client(
        config: GalileoConfig,
        http_client: reqwest::Client,
    ) -> ConnectorResult<Self> {
        let client = GalileoClient::with_http_client(config, http_client)?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: GalileoClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &GalileoClient {
        &self.client
    }
}

#[async_trait]
impl Connector for GalileoConnector {
    fn metadata(&self) -> ConnectorMetadata {
        ConnectorMetadata {
            display_name: "Galileo-FT".to_string(),
            description: "Connector syncing Galileo-FT accounts and groups".to_string(),
        }
    }

    /// Pings the API with the configured credentials.
    #[instrument(skip(self, cancel))]
    async fn validate(&self, cancel: &CancellationToken) -> ConnectorResult<()> {
        match self.client.ping(cancel).await {
            Ok(()) => {
                info!(host = %self.client.base_url(), "Galileo-FT credentials validated");
                Ok(())
            }
            Err(e) if e.is_cancelled() => Err(ConnectorError::Cancelled),
            Err(e) => {
                warn!(error = %e, "Galileo-FT credential validation failed");
                Err(ConnectorError::unauthenticated(format!(
                    "failed to validate credentials: {e}"
                )))
            }
        }
    }

    fn resource_syncers(&self) -> Vec<Arc<dyn ResourceSyncer>> {
        vec![
            Arc::new(UserSyncer::new(self.client.clone())),
            Arc::new(GroupSyncer::new(self.client.clone())),
        ]
    }
}
