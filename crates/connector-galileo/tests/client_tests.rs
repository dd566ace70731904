//! Wire-level tests for the Galileo-FT client.

mod common;

use common::*;
use connector_galileo::{GalileoClient, GalileoError, PaginationVars};
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_requests_carry_credentials_and_json_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("ping")))
        .and(header("Response-Content-Type", "json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains(format!("apiLogin={API_LOGIN}")))
        .and(body_string_contains(format!("apiTransKey={API_TRANS_KEY}")))
        .and(body_string_contains(format!("providerId={PROVIDER_ID}")))
        .and(body_string_contains("transactionId="))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client.ping(&CancellationToken::new()).await.unwrap();
}

#[tokio::test]
async fn test_transaction_ids_are_unique() {
    let server = MockServer::start().await;
    mock_endpoint(&server, "ping", None, ok_envelope(json!({}))).await;

    let client = create_client(&server);
    let cancel = CancellationToken::new();
    for _ in 0..5 {
        client.ping(&cancel).await.unwrap();
    }

    let requests = server.received_requests().await.unwrap();
    let ids: HashSet<String> = requests
        .iter()
        .filter_map(|r| {
            let body = String::from_utf8_lossy(&r.body).to_string();
            body.split('&')
                .find_map(|pair| pair.strip_prefix("transactionId=").map(str::to_string))
        })
        .collect();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_error_envelope_becomes_api_error() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "ping",
        None,
        error_envelope(401, "Invalid API credentials"),
    )
    .await;

    let client = create_client(&server);
    let err = client.ping(&CancellationToken::new()).await.unwrap_err();
    match err {
        GalileoError::Api {
            endpoint,
            status_code,
            status,
        } => {
            assert_eq!(endpoint, "ping");
            assert_eq!(status_code, 401);
            assert_eq!(status, "Invalid API credentials");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_response_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("ping")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<response><status_code>0</status_code></response>", "text/xml"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client.ping(&CancellationToken::new()).await.unwrap_err();
    assert!(
        matches!(err, GalileoError::UnexpectedContentType { ref content_type, .. } if content_type == "text/xml"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_server_error_without_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("ping")))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client.ping(&CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, GalileoError::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_cancelled_before_send_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({}))))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let client = create_client(&server);
    let err = client.ping(&cancel).await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_cancel_during_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("ping")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!({})))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = tokio::time::timeout(Duration::from_secs(5), client.ping(&cancel))
        .await
        .expect("cancellation should end the request")
        .unwrap_err();
    assert!(matches!(err, GalileoError::Cancelled { endpoint: "ping" }));
}

#[tokio::test]
async fn test_related_accounts() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "getRelatedAccounts",
        Some("accountNo=root-prn"),
        ok_envelope(json!({
            "child_accounts": [create_test_account("a1"), create_test_account("a2")]
        })),
    )
    .await;

    let client = create_client(&server);
    let accounts = client
        .list_related_accounts(&CancellationToken::new(), "root-prn")
        .await
        .unwrap();
    let ids: Vec<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
    assert_eq!(accounts[0].account_number, "9a1");
}

#[tokio::test]
async fn test_customer_without_profile() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "getAccountOverview",
        None,
        ok_envelope(json!({})),
    )
    .await;

    let client = create_client(&server);
    let err = client
        .get_customer(&CancellationToken::new(), "missing")
        .await
        .unwrap_err();
    assert!(matches!(err, GalileoError::CustomerNotFound { ref account_id } if account_id == "missing"));
}

#[tokio::test]
async fn test_root_groups_pagination_fields() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "getRootGroups",
        Some("page=2&recordCnt=25"),
        paged_envelope(json!([create_test_group("r3", "", "Root 3")]), 2, 3),
    )
    .await;

    let client = create_client(&server);
    let (groups, pages) = client
        .list_root_groups(&CancellationToken::new(), PaginationVars::new(2, 25))
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, "r3");
    assert_eq!(pages, 3);
}

#[tokio::test]
async fn test_children_groups_are_flattened_without_parent() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "getGroupHierarchy",
        Some("groupId=root"),
        ok_envelope(json!([hierarchy_node(
            "root",
            vec![
                hierarchy_node("a", vec![hierarchy_node("a1", vec![])]),
                hierarchy_node("b", vec![]),
            ]
        )])),
    )
    .await;

    let client = create_client(&server);
    let ids = client
        .list_children_groups(&CancellationToken::new(), "root")
        .await
        .unwrap();
    assert_eq!(ids, vec!["a", "a1", "b"]);
}

#[tokio::test]
async fn test_groups_info_sends_repeated_ids() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "getGroupsInfo",
        Some("groupIds=g1&groupIds=g2"),
        ok_envelope(json!([
            create_test_group("g1", "root", "One"),
            create_test_group("g2", "g1", "Two")
        ])),
    )
    .await;

    let client = create_client(&server);
    let groups = client
        .get_groups_info(&CancellationToken::new(), &["g1".to_string(), "g2".to_string()])
        .await
        .unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].parent_group_id, "g1");
}

#[tokio::test]
async fn test_membership_with_several_records_is_rejected() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "getAccountGroupRelationships",
        None,
        ok_envelope(json!([
            { "group_id": "g1", "pmt_ref_no": ["a1"] },
            { "group_id": "g1", "pmt_ref_no": ["a2"] }
        ])),
    )
    .await;

    let client = create_client(&server);
    let err = client
        .list_group_members(&CancellationToken::new(), "g1")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GalileoError::UnexpectedMembershipCount { count: 2, .. }
    ));
}

#[tokio::test]
async fn test_membership_without_records_is_empty() {
    let server = MockServer::start().await;
    mock_endpoint(
        &server,
        "getAccountGroupRelationships",
        None,
        ok_envelope(json!([])),
    )
    .await;

    let client = create_client(&server);
    let members = client
        .list_group_members(&CancellationToken::new(), "g1")
        .await
        .unwrap();
    assert_eq!(members.group_id, "g1");
    assert!(members.account_ids.is_empty());
}

#[tokio::test]
async fn test_shared_http_client() {
    let server = MockServer::start().await;
    mock_endpoint(&server, "ping", None, ok_envelope(json!({}))).await;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let client = GalileoClient::with_http_client(create_config(&server), http_client).unwrap();
    client.ping(&CancellationToken::new()).await.unwrap();
}
