//! Payloads for the merchant configuration endpoints.

use serde::{Deserialize, Serialize};

/// Request payload for updating a merchant's license authorization settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorizationSettingsRequest {
    /// Authorization mode, e.g. `UPFRONT` or `CALLBACK`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_mode: Option<String>,
    /// Endpoint consulted for license authorization decisions in
    /// callback mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// Request payload for registering an upfront-authorization shared secret.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSecretRequest {
    /// The secret used to sign upfront authorization tokens.
    pub secret: String,
}

/// Request payload for configuring FairPlay streaming for a merchant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairplayRequest {
    /// Base64-encoded FairPlay streaming certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// Base64-encoded private key matching the certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Base64-encoded application secret key issued by Apple.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_secret_key: Option<String>,
    /// Base64-encoded initialization vector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
}
