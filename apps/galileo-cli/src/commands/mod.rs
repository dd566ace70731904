//! CLI command implementations

pub mod entitlements;
pub mod grants;
pub mod list;
pub mod membership;
pub mod validate;

use connector_core::{Connector, Resource, ResourceKind, ResourceSyncer};
use connector_galileo::{group_resource, GalileoConnector};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::{CliError, CliResult};

/// Everything a command needs: the connector and the run's cancel signal.
pub struct Context {
    pub connector: GalileoConnector,
    pub cancel: CancellationToken,
}

impl Context {
    /// The syncer for one resource kind.
    pub fn syncer(&self, kind: ResourceKind) -> CliResult<Arc<dyn ResourceSyncer>> {
        self.connector
            .resource_syncers()
            .into_iter()
            .find(|s| s.resource_type().kind == kind)
            .ok_or_else(|| CliError::NotFound(format!("no syncer for resource type {kind}")))
    }

    /// Fetch one group and map it to its resource.
    pub async fn resolve_group(&self, group_id: &str) -> CliResult<Resource> {
        let groups = self
            .connector
            .client()
            .get_groups_info(&self.cancel, &[group_id.to_string()])
            .await?;

        groups
            .iter()
            .find(|g| g.id == group_id)
            .map(group_resource)
            .ok_or_else(|| CliError::NotFound(format!("group {group_id}")))
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
