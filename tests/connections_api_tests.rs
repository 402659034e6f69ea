//! End-to-end tests for the connections client against a mock server.

use polyaxon_api::apis::{
    CreateConnectionRequest, DeleteConnectionRequest, GetConnectionRequest,
    ListConnectionsRequest, UpdateConnectionRequest,
};
use polyaxon_api::models::{Nullable, V1ConnectionKind, V1ConnectionResponse};
use polyaxon_api::{ApiClient, ApiKey, DecodeMode, HostUrl, PolyaxonConfig};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = PolyaxonConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .api_key(ApiKey::new("secret").unwrap())
        .build()
        .unwrap();
    ApiClient::new(config).unwrap()
}

fn owner_uuid(uuid: Option<&str>) -> GetConnectionRequest {
    GetConnectionRequest {
        owner: Some("acme".to_string()),
        uuid: uuid.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_connection_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/orgs/acme/connections"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "conn1"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"uuid": "u1", "name": "conn1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .connections_v1()
        .create_connection(&CreateConnectionRequest {
            owner: Some("acme".to_string()),
            body: Some(V1ConnectionResponse::named("conn1")),
        })
        .await
        .unwrap();

    assert_eq!(created.uuid.as_deref(), Some("u1"));
    assert_eq!(created.name.as_deref(), Some("conn1"));
}

#[tokio::test]
async fn test_list_connections_with_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/acme/connections"))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 42,
            "results": [
                {"uuid": "u1", "name": "conn1", "kind": "s3"},
                {"uuid": "u2", "name": "conn2", "kind": "git"}
            ],
            "next": "cursor123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .connections_v1()
        .list_connections(&ListConnectionsRequest {
            offset: Some(10),
            limit: Some(5),
            ..ListConnectionsRequest::for_owner("acme")
        })
        .await
        .unwrap();

    assert_eq!(page.count, Some(42));
    assert_eq!(page.next_cursor(), Some("cursor123"));
    assert!(page.has_next());
    assert_eq!(page.items().len(), 2);
    assert_eq!(page.items()[0].kind, Some(V1ConnectionKind::S3));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("offset=10&limit=5"));
}

#[tokio::test]
async fn test_delete_connection_with_empty_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/orgs/acme/connections/u1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .connections_v1()
        .delete_connection(&DeleteConnectionRequest {
            owner: Some("acme".to_string()),
            uuid: Some("u1".to_string()),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_connection_missing_uuid_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .connections_v1()
        .get_connection(&owner_uuid(None))
        .await
        .unwrap_err();

    assert!(error.is_missing_parameter());
    assert_eq!(error.missing_parameter(), Some("uuid"));
    assert_eq!(error.operation(), "get_connection");
}

#[tokio::test]
async fn test_authorization_header_uses_token_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/acme/connections/u1"))
        .and(header("Authorization", "token secret"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "u1"})))
        .expect(1)
        .mount(&server)
        .await;

    let connection = client_for(&server)
        .connections_v1()
        .get_connection(&owner_uuid(Some("u1")))
        .await
        .unwrap();
    assert_eq!(connection.uuid.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_reserved_characters_reach_server_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client_for(&server)
        .connections_v1()
        .get_connection(&owner_uuid(Some("a/b?c")))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.path(),
        "/api/v1/orgs/acme/connections/a%2Fb%3Fc"
    );
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_not_found_carries_runtime_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(json!({
                    "error": "not_found",
                    "code": 5,
                    "message": "Connection u9 not found"
                })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .connections_v1()
        .get_connection(&owner_uuid(Some("u9")))
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(error.runtime_error().and_then(|e| e.code), Some(5));
    assert_eq!(
        error.to_string(),
        "get_connection failed: HTTP 404: Connection u9 not found"
    );
}

#[tokio::test]
async fn test_patch_connection_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/orgs/acme/connections/u1"))
        .and(body_json(json!({"description": null, "tags": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "u1",
            "description": null,
            "tags": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patched = client_for(&server)
        .connections_v1()
        .patch_connection(&UpdateConnectionRequest {
            owner: Some("acme".to_string()),
            connection_uuid: Some("u1".to_string()),
            body: Some(V1ConnectionResponse {
                description: Some(Nullable::Null),
                tags: Some(Vec::new()),
                ..V1ConnectionResponse::default()
            }),
        })
        .await
        .unwrap();

    assert_eq!(patched.description, Some(Nullable::Null));
    assert_eq!(patched.tags, Some(Vec::new()));
}

#[tokio::test]
async fn test_lenient_and_strict_decoding_of_drifted_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "u1",
            "live_state": "active",
            "new_server_field": {"nested": true}
        })))
        .mount(&server)
        .await;

    let lenient = client_for(&server)
        .connections_v1()
        .get_connection(&owner_uuid(Some("u1")))
        .await
        .unwrap();
    assert_eq!(lenient.live_state, None);
    assert_eq!(lenient.passthrough.get("live_state"), Some(&json!("active")));

    let strict_client = ApiClient::new(
        PolyaxonConfig::builder()
            .host(HostUrl::new(server.uri()).unwrap())
            .decode_mode(DecodeMode::Strict)
            .build()
            .unwrap(),
    )
    .unwrap();
    let error = strict_client
        .connections_v1()
        .get_connection(&owner_uuid(Some("u1")))
        .await
        .unwrap_err();
    assert!(error.is_decode());
    assert!(error.to_string().contains("live_state"));
}
