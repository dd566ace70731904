//! Mapping of Galileo-FT payloads onto the generic resource model.

use connector_core::{
    AccountType, Email, Entitlement, Grant, GroupTrait, Resource, ResourceId, ResourceKind,
    UserStatus, UserTrait,
};
use serde_json::{Map, Value};

use crate::models::{Customer, Group, GroupToAccounts};

/// Slug of the group membership entitlement.
pub const GROUP_MEMBERSHIP: &str = "member";

fn profile<'a>(fields: impl IntoIterator<Item = (&'static str, &'a str)>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

/// Build the user resource for an account and its customer profile.
///
/// Accounts are always reported as enabled humans; the customer email is the
/// primary contact.
pub fn user_resource(account_id: &str, customer: &Customer) -> Resource {
    let user_profile = profile([
        ("first_name", customer.first_name.as_str()),
        ("middle_name", customer.middle_name.as_str()),
        ("last_name", customer.last_name.as_str()),
        ("address_1", customer.address1.as_str()),
        ("address_2", customer.address2.as_str()),
        ("city", customer.city.as_str()),
        ("state", customer.state.as_str()),
        ("postal_code", customer.postal_code.as_str()),
        ("country", customer.country_code.as_str()),
        ("home_phone", customer.home_phone.as_str()),
        ("mobile_phone", customer.mobile_phone.as_str()),
    ]);

    let emails = if customer.email.is_empty() {
        Vec::new()
    } else {
        vec![Email {
            address: customer.email.clone(),
            is_primary: true,
        }]
    };

    let full_name = format!("{} {}", customer.first_name, customer.last_name);
    let display_name = match full_name.trim() {
        "" => account_id.to_string(),
        name => name.to_string(),
    };

    Resource::new_user(
        display_name,
        account_id,
        UserTrait {
            profile: user_profile,
            emails,
            status: UserStatus::Enabled,
            account_type: AccountType::Human,
        },
    )
}

/// Build the group resource for a group record.
///
/// A non-empty parent id becomes the resource's parent link, mirroring the
/// upstream hierarchy. Users are declared as children so the host lists
/// members per group.
pub fn group_resource(group: &Group) -> Resource {
    let group_profile = profile([
        ("group-id", group.id.as_str()),
        ("legal-name", group.legal_name.as_str()),
        ("business", group.business.as_str()),
        ("contact-email", group.contact_email.as_str()),
        ("contact-name", group.contact_name.as_str()),
    ]);

    let display_name = if group.name.trim().is_empty() {
        group.id.as_str()
    } else {
        group.name.as_str()
    };

    let resource = Resource::new_group(
        display_name,
        group.id.as_str(),
        GroupTrait {
            profile: group_profile,
        },
    )
    .with_child_kind(ResourceKind::User);

    if group.is_root() {
        resource
    } else {
        resource.with_parent(ResourceId::group(group.parent_group_id.as_str()))
    }
}

/// The membership entitlement offered by a group resource.
pub fn membership_entitlement(group: &Resource) -> Entitlement {
    Entitlement::assignment(group, GROUP_MEMBERSHIP)
        .with_grantable_to(ResourceKind::User)
        .with_display_name(format!(
            "Group {} {}",
            group.display_name, GROUP_MEMBERSHIP
        ))
        .with_description(format!("Group {} membership", group.display_name))
}

/// One grant per account in the group's membership edge.
pub fn membership_grants(group: &Resource, members: &GroupToAccounts) -> Vec<Grant> {
    let entitlement = membership_entitlement(group);
    members
        .account_ids
        .iter()
        .filter(|id| !id.is_empty())
        .map(|id| Grant::new(entitlement.clone(), ResourceId::user(id.as_str())))
        .collect()
}
