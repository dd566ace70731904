//! Group synchronization and membership provisioning.
//!
//! Galileo-FT groups form trees: several root groups, one parent per group,
//! at most five levels below a root, and an account in at most one group at
//! a time. Root groups are paged; each root's descendants are resolved from
//! the hierarchy endpoint and hydrated in one batch.
//!
//! See <https://docs.galileo-ft.com/pro/docs/creating-a-corporate-hierarchy>.

use async_trait::async_trait;
use connector_core::{
    ConnectorError, ConnectorResult, Entitlement, Grant, Resource, ResourceId, ResourceKind,
    ResourceSyncer, ResourceType, SyncPage,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::form::PaginationVars;
use crate::mapping::{group_resource, membership_entitlement, membership_grants};
use crate::pagination::PageCursor;
use crate::GalileoClient;

/// Syncer for group resources.
#[derive(Debug, Clone)]
pub struct GroupSyncer {
    client: Arc<GalileoClient>,
}

impl GroupSyncer {
    pub fn new(client: Arc<GalileoClient>) -> Self {
        Self { client }
    }

    /// Resource ids of the group and the principal of a membership change,
    /// rejecting principals that are not users and entitlements that do not
    /// belong to a group.
    fn membership_target<'a>(
        principal: &'a ResourceId,
        group: &'a ResourceId,
        action: &str,
    ) -> ConnectorResult<(&'a str, &'a str)> {
        if group.kind != ResourceKind::Group {
            warn!(entitlement_resource = %group, "Membership entitlement is not on a group");
            return Err(ConnectorError::operation_failed(format!(
                "entitlement resource {group} is not a group"
            )));
        }

        match principal.kind {
            ResourceKind::User => Ok((group.resource.as_str(), principal.resource.as_str())),
            ResourceKind::Group => {
                warn!(
                    principal_id = %principal,
                    principal_type = %principal.kind,
                    "Only users can {action} group membership"
                );
                Err(ConnectorError::InvalidPrincipal {
                    principal: principal.to_string(),
                    kind: principal.kind,
                })
            }
        }
    }
}

#[async_trait]
impl ResourceSyncer for GroupSyncer {
    fn resource_type(&self) -> ResourceType {
        ResourceType::group()
    }

    /// Lists one page of root groups, each followed by all of its
    /// descendants.
    #[instrument(skip(self, cancel))]
    async fn list(
        &self,
        cancel: &CancellationToken,
        parent: Option<&ResourceId>,
        page_token: &str,
    ) -> ConnectorResult<SyncPage<Resource>> {
        let cursor = PageCursor::from_token(page_token)?;
        let vars = PaginationVars::new(cursor.page(), self.client.config().page_size);

        let (root_groups, total_pages) = self
            .client
            .list_root_groups(cancel, vars)
            .await
            .map_err(|e| {
                ConnectorError::operation_failed_with_source("failed to list root groups", e.into())
            })?;

        let mut resources = Vec::new();
        for root in &root_groups {
            resources.push(group_resource(root));

            let children_ids = self
                .client
                .list_children_groups(cancel, &root.id)
                .await
                .map_err(|e| {
                    ConnectorError::operation_failed_with_source(
                        format!("failed to list children groups of {}", root.id),
                        e.into(),
                    )
                })?;

            if children_ids.is_empty() {
                continue;
            }

            debug!(root = %root.id, children = children_ids.len(), "Hydrating children groups");
            let children = self
                .client
                .get_groups_info(cancel, &children_ids)
                .await
                .map_err(|e| {
                    ConnectorError::operation_failed_with_source(
                        format!("failed to get children groups info of {}", root.id),
                        e.into(),
                    )
                })?;

            resources.extend(children.iter().map(group_resource));
        }

        let next_page_token = cursor.next_token(total_pages);
        info!(
            page = cursor.page(),
            total_pages,
            groups = resources.len(),
            "Listed groups"
        );

        Ok(SyncPage::last(resources).with_next_page_token(next_page_token))
    }

    async fn entitlements(
        &self,
        _cancel: &CancellationToken,
        resource: &Resource,
        _page_token: &str,
    ) -> ConnectorResult<SyncPage<Entitlement>> {
        Ok(SyncPage::last(vec![membership_entitlement(resource)]))
    }

    #[instrument(skip(self, cancel, resource), fields(group_id = %resource.id.resource))]
    async fn grants(
        &self,
        cancel: &CancellationToken,
        resource: &Resource,
        _page_token: &str,
    ) -> ConnectorResult<SyncPage<Grant>> {
        let members = self
            .client
            .list_group_members(cancel, &resource.id.resource)
            .await
            .map_err(|e| {
                ConnectorError::operation_failed_with_source("failed to list group members", e.into())
            })?;

        Ok(SyncPage::last(membership_grants(resource, &members)))
    }

    #[instrument(skip(self, cancel, principal, entitlement), fields(principal_id = %principal.id, entitlement_id = %entitlement.id))]
    async fn grant(
        &self,
        cancel: &CancellationToken,
        principal: &Resource,
        entitlement: &Entitlement,
    ) -> ConnectorResult<()> {
        let (group_id, account_id) =
            Self::membership_target(&principal.id, &entitlement.resource_id, "be granted")?;

        self.client
            .add_account_to_group(cancel, group_id, account_id)
            .await
            .map_err(|e| {
                ConnectorError::operation_failed_with_source(
                    "failed to grant group membership",
                    e.into(),
                )
            })?;

        info!(group_id, account_id, "Granted group membership");
        Ok(())
    }

    #[instrument(skip(self, cancel, grant), fields(grant_id = %grant.id))]
    async fn revoke(&self, cancel: &CancellationToken, grant: &Grant) -> ConnectorResult<()> {
        let (group_id, account_id) = Self::membership_target(
            &grant.principal,
            &grant.entitlement.resource_id,
            "have revoked",
        )?;

        self.client
            .remove_account_from_group(cancel, group_id, account_id)
            .await
            .map_err(|e| {
                ConnectorError::operation_failed_with_source(
                    "failed to revoke group membership",
                    e.into(),
                )
            })?;

        info!(group_id, account_id, "Revoked group membership");
        Ok(())
    }
}
