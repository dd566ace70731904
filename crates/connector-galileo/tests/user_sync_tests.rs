//! User listing tests.

mod common;

use common::*;
use connector_core::{ConnectorError, ResourceId, ResourceSyncer, ResourceTraits, UserStatus};
use connector_galileo::{user_resource, GalileoClient, UserSyncer};
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_root(server: &MockServer, root: &str) -> Arc<GalileoClient> {
    let config = create_config(server).with_root_account(root);
    Arc::new(GalileoClient::new(config).unwrap())
}

#[tokio::test]
async fn test_top_level_users_from_root_account() {
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
    mock_customer(&server, "a1", "Jane", "Doe").await;
    mock_customer(&server, "a2", "John", "Roe").await;

    let syncer = UserSyncer::new(client_with_root(&server, "root-prn"));
    let page = syncer
        .list(&CancellationToken::new(), None, "")
        .await
        .unwrap();

    assert!(page.next_page_token.is_none());
    let names: Vec<&str> = page.items.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Jane Doe", "John Roe"]);

    let ResourceTraits::User(user) = &page.items[0].traits else {
        panic!("Expected user trait");
    };
    assert_eq!(user.status, UserStatus::Enabled);
    assert_eq!(user.primary_email(), Some("jane@example.com"));
    assert_eq!(user.profile["city"], json!("Salt Lake City"));
    assert_eq!(user.profile["country"], json!("US"));
}

#[tokio::test]
async fn test_top_level_users_without_root_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({}))))
        .expect(0)
        .mount(&server)
        .await;

    let syncer = UserSyncer::new(create_client(&server));
    let page = syncer
        .list(&CancellationToken::new(), None, "")
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn test_users_under_group_are_its_members() {
    let server = MockServer::start().await;
    mock_members(&server, "g1", &["a1"]).await;
    mock_customer(&server, "a1", "Jane", "Doe").await;

    let syncer = UserSyncer::new(create_client(&server));
    let parent = ResourceId::group("g1");
    let page = syncer
        .list(&CancellationToken::new(), Some(&parent), "")
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, ResourceId::user("a1"));
}

#[tokio::test]
async fn test_missing_customer_fails_the_page() {
    let server = MockServer::start().await;
    mock_members(&server, "g1", &["a1"]).await;
    mock_endpoint(&server, "getAccountOverview", None, ok_envelope(json!({}))).await;

    let syncer = UserSyncer::new(create_client(&server));
    let parent = ResourceId::group("g1");
    let err = syncer
        .list(&CancellationToken::new(), Some(&parent), "")
        .await
        .unwrap_err();
    assert!(matches!(err, ConnectorError::OperationFailed { .. }));
}

#[tokio::test]
async fn test_users_have_no_entitlements_or_grants() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({}))))
        .expect(0)
        .mount(&server)
        .await;

    let syncer = UserSyncer::new(create_client(&server));
    let cancel = CancellationToken::new();
    let user = user_resource("a1", &Default::default());

    let entitlements = syncer.entitlements(&cancel, &user, "").await.unwrap();
    assert!(entitlements.items.is_empty());
    assert!(entitlements.next_page_token.is_none());

    let grants = syncer.grants(&cancel, &user, "").await.unwrap();
    assert!(grants.items.is_empty());
}

#[tokio::test]
async fn test_user_list_cancelled() {
    let server = MockServer::start().await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let syncer = UserSyncer::new(create_client(&server));
    let parent = ResourceId::group("g1");
    let err = syncer.list(&cancel, Some(&parent), "").await.unwrap_err();
    assert!(err.is_cancelled());
}
