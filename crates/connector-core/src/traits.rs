//! Connector contract traits
//!
//! The capability traits a connector implements so the host can drive
//! synchronization. Every call receives the request-scoped cancellation
//! token; implementations must stop work and return
//! [`ConnectorError::Cancelled`](crate::error::ConnectorError::Cancelled)
//! once it fires.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::ConnectorResult;
use crate::page::SyncPage;
use crate::resource::{Entitlement, Grant, Resource, ResourceId, ResourceType};

/// Syncer for one resource type.
///
/// `page_token` is the opaque token returned by the previous call, or the
/// empty string for the first page.
#[async_trait]
pub trait ResourceSyncer: Send + Sync {
    /// Descriptor of the resource type this syncer produces.
    fn resource_type(&self) -> ResourceType;

    /// List one page of resources, optionally scoped to a parent resource.
    async fn list(
        &self,
        cancel: &CancellationToken,
        parent: Option<&ResourceId>,
        page_token: &str,
    ) -> ConnectorResult<SyncPage<Resource>>;

    /// List one page of entitlements offered by `resource`.
    async fn entitlements(
        &self,
        cancel: &CancellationToken,
        resource: &Resource,
        page_token: &str,
    ) -> ConnectorResult<SyncPage<Entitlement>>;

    /// List one page of grants on the entitlements of `resource`.
    async fn grants(
        &self,
        cancel: &CancellationToken,
        resource: &Resource,
        page_token: &str,
    ) -> ConnectorResult<SyncPage<Grant>>;

    /// Grant `entitlement` to `principal`.
    ///
    /// Syncers that do not provision return an error by default.
    async fn grant(
        &self,
        cancel: &CancellationToken,
        principal: &Resource,
        entitlement: &Entitlement,
    ) -> ConnectorResult<()> {
        let _ = (cancel, principal);
        Err(crate::error::ConnectorError::operation_failed(format!(
            "{} does not support granting {}",
            self.resource_type().id(),
            entitlement.id
        )))
    }

    /// Revoke an existing grant.
    async fn revoke(&self, cancel: &CancellationToken, grant: &Grant) -> ConnectorResult<()> {
        let _ = cancel;
        Err(crate::error::ConnectorError::operation_failed(format!(
            "{} does not support revoking {}",
            self.resource_type().id(),
            grant.id
        )))
    }
}

/// Display metadata for a connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorMetadata {
    pub display_name: String,
    pub description: String,
}

/// Base trait for all connectors.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Display metadata.
    fn metadata(&self) -> ConnectorMetadata;

    /// Exercise the configured credentials against the target system.
    ///
    /// Returns `Ok(())` if they are accepted.
    async fn validate(&self, cancel: &CancellationToken) -> ConnectorResult<()>;

    /// One syncer per resource type the connector synchronizes.
    fn resource_syncers(&self) -> Vec<Arc<dyn ResourceSyncer>>;
}
