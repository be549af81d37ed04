use crate::{
    CastlabsClient, FairplayRequest, SharedSecretRequest, UpdateAuthorizationSettingsRequest,
};
use wiremock::{
    matchers::{body_json, method, path},
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

#[tokio::test]
async fn test_update_authorization_settings_success() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/rest/config/v1/merchant-1/auth/settings"))
        .and(body_json(serde_json::json!({
            "authorizationMode": "CALLBACK",
            "callbackUrl": "https://callbacks.example.com/drm"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = UpdateAuthorizationSettingsRequest {
        authorization_mode: Some("CALLBACK".to_string()),
        callback_url: Some("https://callbacks.example.com/drm".to_string()),
    };
    client
        .update_authorization_settings(&request, "merchant-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_authorization_settings_unexpected_status() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/rest/config/v1/merchant-1/auth/settings"))
        .respond_with(ResponseTemplate::new(403).set_body_string("not allowed"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = UpdateAuthorizationSettingsRequest {
        authorization_mode: Some("UPFRONT".to_string()),
        callback_url: None,
    };
    let error = client
        .update_authorization_settings(&request, "merchant-1")
        .await
        .unwrap_err();

    assert!(error.is_rejection());
    assert_eq!(error.status(), Some(403));
    assert_eq!(
        error.to_string(),
        "Unexpected status code from Castlabs: Response code=403, Reason=Forbidden, Body=not allowed"
    );
}

#[tokio::test]
async fn test_add_shared_secret_success() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/rest/config/v1/merchant-1/upfront/secret/add"))
        .and(body_json(serde_json::json!({ "secret": "upfront-secret" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = SharedSecretRequest {
        secret: "upfront-secret".to_string(),
    };
    client.add_shared_secret(&request, "merchant-1").await.unwrap();
}

#[tokio::test]
async fn test_set_fairplay_configuration_success() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/rest/config/v1/merchant-1/drm/fairplay"))
        .and(body_json(serde_json::json!({
            "certificate": "Y2VydGlmaWNhdGU=",
            "privateKey": "cHJpdmF0ZS1rZXk=",
            "applicationSecretKey": "YXNr",
            "iv": "aXY="
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = FairplayRequest {
        certificate: Some("Y2VydGlmaWNhdGU=".to_string()),
        private_key: Some("cHJpdmF0ZS1rZXk=".to_string()),
        application_secret_key: Some("YXNr".to_string()),
        iv: Some("aXY=".to_string()),
    };
    client
        .set_fairplay_configuration(&request, "merchant-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_fairplay_configuration_unexpected_status() {
    let server = MockServer::start().await;
    mount_cas(&server, "ST-7").await;

    Mock::given(method("POST"))
        .and(path("/frontend/rest/config/v1/merchant-1/drm/fairplay"))
        .respond_with(ResponseTemplate::new(500).set_body_string("certificate rejected"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = FairplayRequest {
        certificate: Some("Y2VydGlmaWNhdGU=".to_string()),
        private_key: None,
        application_secret_key: None,
        iv: None,
    };
    let error = client
        .set_fairplay_configuration(&request, "merchant-1")
        .await
        .unwrap_err();

    assert!(error.is_rejection());
    assert_eq!(
        error.to_string(),
        "Unexpected status code from Castlabs: Response code=500, Reason=Internal Server Error, Body=certificate rejected"
    );
}
