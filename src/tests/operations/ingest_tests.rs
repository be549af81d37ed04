use crate::{CastlabsClient, CastlabsError, IngestAsset, IngestKey, IngestKeysRequest};
use std::time::Duration;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn test_client(server: &MockServer) -> CastlabsClient {
    CastlabsClient::builder()
        .credentials("merchant-api", "testpass")
        .auth_base_url(server.uri())
        .ingestion_base_url(server.uri())
        .build()
        .unwrap()
}

async fn mount_cas(server: &MockServer, ticket: &str) {
    let granting_url = format!("{}/cas/v1/tickets/TGT-1", server.uri());
    Mock::given(method("POST"))
        .and(path("/cas/v1/tickets"))
        .respond_with(ResponseTemplate::new(201).insert_header("location", granting_url.as_str()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cas/v1/tickets/TGT-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ticket))
        .mount(server)
        .await;
}

fn sample_request() -> IngestKeysRequest {
    IngestKeysRequest {
        assets: vec![IngestAsset {
            asset_type: None,
            asset_id: "movie-1".to_string(),
            variant_id: None,
            ingest_keys: vec![IngestKey {
                key_id: "a2V5LWlk".to_string(),
                key: Some("a2V5LW1hdGVyaWFs".to_string()),
                iv: None,
                algorithm: Some("AES".to_string()),
                stream_type: None,
            }],
        }],
    }
}

#[tokio::test]
async fn test_ingest_keys_success() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/api/keys/v2/ingest/merchant-1"))
        .and(query_param("ticket", "ST-7"))
        .and(header("Accept", "application/json"))
        .and(body_json(serde_json::json!({
            "assets": [
                {
                    "assetId": "movie-1",
                    "ingestKeys": [
                        {
                            "keyId": "a2V5LWlk",
                            "key": "a2V5LW1hdGVyaWFs",
                            "algorithm": "AES"
                        }
                    ]
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "assets": [
                {
                    "assetId": "movie-1",
                    "keys": [
                        {
                            "keyId": "a2V5LWlk",
                            "systemIds": [
                                "edef8ba9-79d6-4ace-a3c8-27dcd51d21ed",
                                "9a04f079-9840-4286-ab92-e65be0885f95"
                            ]
                        }
                    ]
                }
            ],
            "warnings": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .ingest_keys(&sample_request(), "merchant-1")
        .await
        .unwrap();

    assert_eq!(response.assets.len(), 1);
    let asset = &response.assets[0];
    assert_eq!(asset.asset_id.as_deref(), Some("movie-1"));
    assert_eq!(asset.variant_id, None);
    assert_eq!(asset.keys.len(), 1);
    let key = &asset.keys[0];
    assert_eq!(key.key_id.as_deref(), Some("a2V5LWlk"));
    assert_eq!(key.key_rotation_id, None);
    assert_eq!(key.system_ids.len(), 2);
}

#[tokio::test]
async fn test_ingest_keys_unexpected_status() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/api/keys/v2/ingest/merchant-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client
        .ingest_keys(&sample_request(), "merchant-1")
        .await
        .unwrap_err();

    assert!(error.is_rejection());
    assert_eq!(error.status(), Some(500));
    assert_eq!(
        error.to_string(),
        "Ingest failed: Response code=500, Reason=Internal Server Error, Body=server error"
    );
}

#[tokio::test]
async fn test_ingest_keys_empty_response_body() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/api/keys/v2/ingest/merchant-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client
        .ingest_keys(&sample_request(), "merchant-1")
        .await
        .unwrap_err();

    assert!(error.is_rejection());
    assert_eq!(error.to_string(), "Empty response entity from Castlabs");
}

#[tokio::test]
async fn test_ingest_keys_undecodable_response_body() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/api/keys/v2/ingest/merchant-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client
        .ingest_keys(&sample_request(), "merchant-1")
        .await
        .unwrap_err();

    assert!(error.is_rejection());
    assert_eq!(error.status(), Some(200));
    assert_eq!(error.response_body(), Some("not-json"));
}

#[tokio::test]
async fn test_consecutive_calls_authenticate_separately() {
    let server = MockServer::start().await;
    let granting_url = format!("{}/cas/v1/tickets/TGT-1", server.uri());

    Mock::given(method("POST"))
        .and(path("/cas/v1/tickets"))
        .respond_with(ResponseTemplate::new(201).insert_header("location", granting_url.as_str()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cas/v1/tickets/TGT-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ST-7"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/frontend/api/keys/v2/ingest/merchant-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "assets": [] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .ingest_keys(&sample_request(), "merchant-1")
        .await
        .unwrap();
    client
        .ingest_keys(&sample_request(), "merchant-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_connection_timeout_aborts_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cas/v1/tickets"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = CastlabsClient::builder()
        .credentials("merchant-api", "testpass")
        .auth_base_url(server.uri())
        .ingestion_base_url(server.uri())
        .connection_timeout_seconds(1)
        .build()
        .unwrap();

    let error = client
        .ingest_keys(&sample_request(), "merchant-1")
        .await
        .unwrap_err();

    assert!(matches!(error, CastlabsError::Transport(_)));
    assert!(!error.is_rejection());
}
