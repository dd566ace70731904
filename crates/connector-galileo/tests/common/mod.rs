//! Common test utilities for connector-galileo integration tests.

#![allow(dead_code)]

use connector_galileo::{GalileoClient, GalileoConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_LOGIN: &str = "test-login";
pub const API_TRANS_KEY: &str = "test-trans-key";
pub const PROVIDER_ID: &str = "1234";

/// Path of a Galileo-FT endpoint.
pub fn endpoint(name: &str) -> String {
    format!("/intserv/4.0/{name}")
}

/// Config pointed at the mock server.
pub fn create_config(server: &MockServer) -> GalileoConfig {
    GalileoConfig::new(API_LOGIN, API_TRANS_KEY, PROVIDER_ID).with_hostname(server.uri())
}

pub fn create_client(server: &MockServer) -> Arc<GalileoClient> {
    Arc::new(GalileoClient::new(create_config(server)).expect("valid test config"))
}

/// Successful envelope around `data`.
pub fn ok_envelope(data: Value) -> Value {
    json!({
        "status_code": 0,
        "status": "Success",
        "processing_time": 0.05,
        "response_data": data
    })
}

/// Successful paged envelope.
pub fn paged_envelope(data: Value, page: u32, number_of_pages: u32) -> Value {
    json!({
        "status_code": 0,
        "status": "Success",
        "response_data": data,
        "page": page,
        "number_of_pages": number_of_pages
    })
}

pub fn error_envelope(status_code: u32, status: &str) -> Value {
    json!({
        "status_code": status_code,
        "status": status,
        "response_data": null
    })
}

/// Test data factory for group records.
pub fn create_test_group(id: &str, parent: &str, name: &str) -> Value {
    json!({
        "group_id": id,
        "external_id": format!("ext-{id}"),
        "parent_group_id": parent,
        "group_name": name,
        "business_legal_name": format!("{name} LLC"),
        "doing_business_as": name,
        "max_level": 5,
        "primary_contact_email": format!("{id}@example.com"),
        "primary_contact_name": "Pat Contact"
    })
}

/// Test data factory for hierarchy nodes.
pub fn hierarchy_node(id: &str, children: Vec<Value>) -> Value {
    json!({
        "group_id": id,
        "group_name": format!("Group {id}"),
        "children": children
    })
}

/// Test data factory for customer profiles.
pub fn create_test_customer(first: &str, last: &str) -> Value {
    json!({
        "first_name": first,
        "middle_name": "",
        "last_name": last,
        "email": format!("{}@example.com", first.to_lowercase()),
        "address_1": "1 Main St",
        "address_2": "",
        "city": "Salt Lake City",
        "state": "UT",
        "postal_code": "84101",
        "country_code": "US",
        "home_phone": "",
        "mobile_phone": "5550100"
    })
}

pub fn create_test_account(prn: &str) -> Value {
    json!({
        "prn": prn,
        "active": "Y",
        "status": "N",
        "galileo_account_number": format!("9{prn}"),
        "product_id": "100"
    })
}

/// Mock an endpoint answering `body`, optionally matching a form fragment.
pub async fn mock_endpoint(server: &MockServer, name: &str, fragment: Option<&str>, body: Value) {
    let mut mock = Mock::given(method("POST")).and(path(endpoint(name)));
    if let Some(fragment) = fragment {
        mock = mock.and(body_string_contains(fragment));
    }

    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mock a customer lookup for one account.
pub async fn mock_customer(server: &MockServer, account: &str, first: &str, last: &str) {
    mock_endpoint(
        server,
        "getAccountOverview",
        Some(&format!("accountNo={account}")),
        ok_envelope(json!({ "profile": create_test_customer(first, last) })),
    )
    .await;
}

/// Mock the membership edge of one group.
pub async fn mock_members(server: &MockServer, group: &str, accounts: &[&str]) {
    mock_endpoint(
        server,
        "getAccountGroupRelationships",
        Some(&format!("groupId={group}")),
        ok_envelope(json!([{ "group_id": group, "pmt_ref_no": accounts }])),
    )
    .await;
}
