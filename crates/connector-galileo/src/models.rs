//! Galileo-FT API payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "response_data": T }`
#[derive(Debug, Deserialize)]
pub struct BaseResponse<T> {
    #[serde(rename = "response_data")]
    pub data: T,
}

/// `{ "response_data": [T], "page": N, "number_of_pages": N }`
///
/// An empty listing may come back as `"response_data": null`.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(rename = "response_data", default = "Option::default")]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub number_of_pages: u32,
}

/// Status fields present on every response. `status_code` is `0` on
/// success; anything else is an error.
///
/// See <https://docs.galileo-ft.com/pro/reference/api-reference-global-response-statuses>.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "status_code")]
    pub code: Option<u32>,
    #[serde(default)]
    pub status: String,
}

impl ErrorResponse {
    /// Read the status fields from an already parsed body. Absent fields
    /// yield `code: None`.
    pub fn from_value(value: &Value) -> Self {
        Self {
            code: value
                .get("status_code")
                .and_then(Value::as_u64)
                .and_then(|c| u32::try_from(c).ok()),
            status: value
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RelatedAccountsResponse {
    #[serde(rename = "child_accounts", default)]
    pub children: Vec<Account>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountOverviewResponse {
    #[serde(default)]
    pub profile: Option<Customer>,
}

/// A payment account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Payment reference number.
    #[serde(rename = "prn")]
    pub id: String,
    pub active: String,
    pub status: String,
    #[serde(rename = "galileo_account_number")]
    pub account_number: String,
    pub product_id: String,
}

/// Customer profile of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(rename = "address_1")]
    pub address1: String,
    #[serde(rename = "address_2")]
    pub address2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country_code: String,
    pub home_phone: String,
    pub mobile_phone: String,
}

/// An organizational group.
///
/// Root groups have an empty `parent_group_id`. A group has at most one
/// parent and there are at most five levels below a root group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(rename = "group_id")]
    pub id: String,
    pub external_id: String,
    pub parent_group_id: String,

    #[serde(rename = "group_name")]
    pub name: String,
    #[serde(rename = "business_legal_name")]
    pub legal_name: String,
    #[serde(rename = "doing_business_as")]
    pub business: String,

    #[serde(rename = "max_level")]
    pub level: i32,
    #[serde(rename = "primary_contact_email")]
    pub contact_email: String,
    #[serde(rename = "primary_contact_name")]
    pub contact_name: String,
}

impl Group {
    pub fn is_root(&self) -> bool {
        self.parent_group_id.is_empty()
    }
}

/// Node of the nested listing returned by `getGroupHierarchy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupHierarchy {
    #[serde(rename = "group_id")]
    pub id: String,
    #[serde(rename = "group_name")]
    pub name: String,
    pub children: Vec<GroupHierarchy>,
}

/// Membership edge of one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupToAccounts {
    pub group_id: String,
    #[serde(rename = "pmt_ref_no")]
    pub account_ids: Vec<String>,
}
