//! User synchronization.
//!
//! Users are payment accounts hydrated with their customer profile. Without
//! a parent they are the related accounts of the configured root account;
//! under a group they are that group's members.

use async_trait::async_trait;
use connector_core::{
    ConnectorError, ConnectorResult, Entitlement, Grant, Resource, ResourceId, ResourceKind,
    ResourceSyncer, ResourceType, SyncPage,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::mapping::user_resource;
use crate::GalileoClient;

/// Syncer for user resources.
#[derive(Debug, Clone)]
pub struct UserSyncer {
    client: Arc<GalileoClient>,
}

impl UserSyncer {
    pub fn new(client: Arc<GalileoClient>) -> Self {
        Self { client }
    }

    /// Account ids to list for the given parent.
    async fn account_ids(
        &self,
        cancel: &CancellationToken,
        parent: Option<&ResourceId>,
    ) -> ConnectorResult<Vec<String>> {
        match parent {
            Some(ResourceId {
                kind: ResourceKind::Group,
                resource,
            }) => {
                let members = self
                    .client
                    .list_group_members(cancel, resource)
                    .await
                    .map_err(|e| {
                        ConnectorError::operation_failed_with_source(
                            format!("failed to list members of group {resource}"),
                            e.into(),
                        )
                    })?;
                Ok(members.account_ids)
            }
            Some(ResourceId {
                kind: ResourceKind::User,
                ..
            }) => Ok(Vec::new()),
            None => {
                let Some(root) = self.client.config().root_account.as_deref() else {
                    debug!("No root account configured, skipping top-level users");
                    return Ok(Vec::new());
                };

                let accounts = self
                    .client
                    .list_related_accounts(cancel, root)
                    .await
                    .map_err(|e| {
                        ConnectorError::operation_failed_with_source("failed to list users", e.into())
                    })?;
                Ok(accounts.into_iter().map(|a| a.id).collect())
            }
        }
    }
}

#[async_trait]
impl ResourceSyncer for UserSyncer {
    fn resource_type(&self) -> ResourceType {
        ResourceType::user()
    }

    #[instrument(skip(self, cancel))]
    async fn list(
        &self,
        cancel: &CancellationToken,
        parent: Option<&ResourceId>,
        _page_token: &str,
    ) -> ConnectorResult<SyncPage<Resource>> {
        let account_ids = self.account_ids(cancel, parent).await?;

        let mut resources = Vec::with_capacity(account_ids.len());
        for account_id in account_ids.iter().filter(|id| !id.is_empty()) {
            let customer = self
                .client
                .get_customer(cancel, account_id)
                .await
                .map_err(|e| {
                    ConnectorError::operation_failed_with_source("failed to get customer", e.into())
                })?;

            resources.push(user_resource(account_id, &customer));
        }

        info!(users = resources.len(), "Listed users");
        Ok(SyncPage::last(resources))
    }

    /// Users offer no entitlements.
    async fn entitlements(
        &self,
        _cancel: &CancellationToken,
        _resource: &Resource,
        _page_token: &str,
    ) -> ConnectorResult<SyncPage<Entitlement>> {
        Ok(SyncPage::empty())
    }

    /// Users offer no entitlements, so hold no grants.
    async fn grants(
        &self,
        _cancel: &CancellationToken,
        _resource: &Resource,
        _page_token: &str,
    ) -> ConnectorResult<SyncPage<Grant>> {
        Ok(SyncPage::empty())
    }
}
