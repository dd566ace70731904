//! Generic resource model
//!
//! Host-side representation of the objects a connector synchronizes:
//! resources (users and groups), the entitlements they offer, and the grants
//! linking principals to those entitlements.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Kind of resource a connector produces.
///
/// The set is closed so that kind checks (e.g. "only users can be granted
/// membership") are exhaustive matches rather than string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A human account.
    User,
    /// An organizational group.
    Group,
}

impl ResourceKind {
    /// Get the resource type identifier used in ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Group => "group",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResourceKindError(String);

impl fmt::Display for ParseResourceKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resource kind: {}", self.0)
    }
}

impl std::error::Error for ParseResourceKindError {}

impl FromStr for ResourceKind {
    type Err = ParseResourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ResourceKind::User),
            "group" => Ok(ResourceKind::Group),
            _ => Err(ParseResourceKindError(s.to_string())),
        }
    }
}

/// Trait a resource type advertises to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceTrait {
    User,
    Group,
}

/// Descriptor for a resource type handled by a syncer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceType {
    pub kind: ResourceKind,
    pub display_name: String,
    pub traits: Vec<ResourceTrait>,
}

impl ResourceType {
    /// Descriptor for user resources.
    pub fn user() -> Self {
        Self {
            kind: ResourceKind::User,
            display_name: "User".to_string(),
            traits: vec![ResourceTrait::User],
        }
    }

    /// Descriptor for group resources.
    pub fn group() -> Self {
        Self {
            kind: ResourceKind::Group,
            display_name: "Group".to_string(),
            traits: vec![ResourceTrait::Group],
        }
    }

    /// Resource type identifier.
    pub fn id(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Identifier of a resource: its kind plus the upstream id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    pub kind: ResourceKind,
    pub resource: String,
}

impl ResourceId {
    pub fn new(kind: ResourceKind, resource: impl Into<String>) -> Self {
        Self {
            kind,
            resource: resource.into(),
        }
    }

    pub fn user(resource: impl Into<String>) -> Self {
        Self::new(ResourceKind::User, resource)
    }

    pub fn group(resource: impl Into<String>) -> Self {
        Self::new(ResourceKind::Group, resource)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.resource)
    }
}

/// Account status reported for user resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Enabled,
}

/// Account type reported for user resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Human,
}

/// Email address attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
    pub is_primary: bool,
}

/// User-specific resource data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrait {
    pub profile: Map<String, Value>,
    pub emails: Vec<Email>,
    pub status: UserStatus,
    pub account_type: AccountType,
}

impl UserTrait {
    /// The primary email address, if any.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.is_primary)
            .map(|e| e.address.as_str())
    }
}

/// Group-specific resource data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTrait {
    pub profile: Map<String, Value>,
}

/// Trait payload carried by a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "trait", rename_all = "snake_case")]
pub enum ResourceTraits {
    User(UserTrait),
    Group(GroupTrait),
}

/// A resource synchronized to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub display_name: String,
    /// Parent resource, for resources that live inside another one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ResourceId>,
    /// Resource kinds the host should list underneath this resource.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_kinds: Vec<ResourceKind>,
    pub traits: ResourceTraits,
}

impl Resource {
    /// Create a user resource.
    pub fn new_user(display_name: impl Into<String>, id: impl Into<String>, user: UserTrait) -> Self {
        Self {
            id: ResourceId::user(id),
            display_name: display_name.into(),
            parent_id: None,
            child_kinds: Vec::new(),
            traits: ResourceTraits::User(user),
        }
    }

    /// Create a group resource.
    pub fn new_group(
        display_name: impl Into<String>,
        id: impl Into<String>,
        group: GroupTrait,
    ) -> Self {
        Self {
            id: ResourceId::group(id),
            display_name: display_name.into(),
            parent_id: None,
            child_kinds: Vec::new(),
            traits: ResourceTraits::Group(group),
        }
    }

    /// Set the parent resource.
    #[must_use]
    pub fn with_parent(mut self, parent: ResourceId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    /// Declare a child resource kind.
    #[must_use]
    pub fn with_child_kind(mut self, kind: ResourceKind) -> Self {
        if !self.child_kinds.contains(&kind) {
            self.child_kinds.push(kind);
        }
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.id.kind
    }

    /// The profile map of either trait.
    pub fn profile(&self) -> &Map<String, Value> {
        match &self.traits {
            ResourceTraits::User(user) => &user.profile,
            ResourceTraits::Group(group) => &group.profile,
        }
    }
}

/// What holding an entitlement means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementPurpose {
    /// Membership-style assignment.
    Assignment,
}

/// Something that can be granted on a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    /// `{resource kind}:{resource id}:{slug}`.
    pub id: String,
    pub resource_id: ResourceId,
    pub slug: String,
    pub display_name: String,
    pub description: String,
    pub purpose: EntitlementPurpose,
    pub grantable_to: Vec<ResourceKind>,
}

impl Entitlement {
    /// Create an assignment entitlement on `resource`.
    pub fn assignment(resource: &Resource, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: entitlement_id(&resource.id, &slug),
            resource_id: resource.id.clone(),
            display_name: slug.clone(),
            description: String::new(),
            slug,
            purpose: EntitlementPurpose::Assignment,
            grantable_to: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_grantable_to(mut self, kind: ResourceKind) -> Self {
        if !self.grantable_to.contains(&kind) {
            self.grantable_to.push(kind);
        }
        self
    }
}

/// Build the identifier of the entitlement `slug` on `resource`.
pub fn entitlement_id(resource: &ResourceId, slug: &str) -> String {
    format!("{resource}:{slug}")
}

/// A principal holding an entitlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    /// `{entitlement id}:{principal kind}:{principal id}`.
    pub id: String,
    pub entitlement: Entitlement,
    pub principal: ResourceId,
}

impl Grant {
    pub fn new(entitlement: Entitlement, principal: ResourceId) -> Self {
        Self {
            id: format!("{}:{}", entitlement.id, principal),
            entitlement,
            principal,
        }
    }
}
