//! # Connector Core
//!
//! The generic identity-governance model and the contract a connector
//! implements to feed it.
//!
//! - [`Resource`], [`Entitlement`], [`Grant`] - what a connector produces
//! - [`ResourceSyncer`] - per resource type listing and provisioning
//! - [`Connector`] - metadata, credential validation, syncer registry
//! - [`ConnectorError`] - shared error taxonomy
//!
//! Orchestration, scheduling and storage belong to the host; this crate only
//! defines the shapes exchanged with it.

pub mod error;
pub mod page;
pub mod resource;
pub mod traits;

pub use error::{ConnectorError, ConnectorResult};
pub use page::{collect_pages, SyncPage};
pub use resource::{
    entitlement_id, AccountType, Email, Entitlement, EntitlementPurpose, Grant, GroupTrait,
    Resource, ResourceId, ResourceKind, ResourceTrait, ResourceTraits, ResourceType, UserStatus,
    UserTrait,
};
pub use traits::{Connector, ConnectorMetadata, ResourceSyncer};
