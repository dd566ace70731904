//! Galileo-FT Connector
//!
//! Synchronizes Galileo-FT payment accounts and organizational groups into
//! the generic identity model of `connector-core`.
//!
//! # Features
//!
//! - Credential validation via the `ping` endpoint
//! - Users from a root account's related accounts, or per group membership
//! - Paged root groups with their full descendant hierarchy
//! - Group membership entitlements, grants, and grant/revoke provisioning
//!
//! # Example
//!
//! ```no_run
//! use connector_core::{Connector, ResourceSyncer};
//! use connector_galileo::{GalileoConfig, GalileoConnector};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GalileoConfig::new("api-login", "api-trans-key", "provider-id")
//!     .with_hostname("api.cv.gpsrv.com");
//!
//! let connector = GalileoConnector::new(config)?;
//! let cancel = CancellationToken::new();
//! connector.validate(&cancel).await?;
//!
//! for syncer in connector.resource_syncers() {
//!     let page = syncer.list(&cancel, None, "").await?;
//!     println!("{}: {} resources", syncer.resource_type().id(), page.items.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod connector;
mod error;
mod form;
mod groups;
mod hierarchy;
mod mapping;
mod models;
mod pagination;
mod users;

// Re-exports
pub use client::{Endpoint, GalileoClient};
pub use config::{GalileoConfig, DEFAULT_HOSTNAME, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use connector::GalileoConnector;
pub use error::{GalileoError, GalileoResult};
pub use form::{FormData, PaginationVars};
pub use groups::GroupSyncer;
pub use hierarchy::flatten_group_ids;
pub use mapping::{
    group_resource, membership_entitlement, membership_grants, user_resource, GROUP_MEMBERSHIP,
};
pub use models::{Account, Customer, Group, GroupHierarchy, GroupToAccounts};
pub use pagination::PageCursor;
pub use users::UserSyncer;
