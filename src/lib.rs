mod auth;
mod core;

#[cfg(test)]
mod tests;

pub use crate::core::domain::error::{CastlabsError, CastlabsResult, ValidationError};
pub use crate::core::domain::model::{
    AddSubMerchantAccountRequest, AddSubMerchantAccountResponse, FairplayRequest, IngestAsset,
    IngestAssetsResponse, IngestKey, IngestKeysRequest, IngestedAsset, IngestedKey,
    LinkAccountToSubMerchantRequest, SharedSecretRequest, UpdateAuthorizationSettingsRequest,
    DEFAULT_AUTH_BASE_URL, DEFAULT_INGESTION_BASE_URL,
};
use crate::core::{
    domain::{
        model::CastlabsConnection,
        value_object::{
            normalize_base_url, validate_base_url, validate_password, validate_username,
            CastlabsBaseUrl, CastlabsPassword, CastlabsUsername, ServiceTicket, TicketGrantingUrl,
            TicketedUrl,
        },
    },
    infrastructure::api_client::ApiClient,
};
use std::time::Duration;

/// A client for the Castlabs DRMtoday key-management API
///
/// Every operation authenticates itself through the Castlabs CAS single
/// sign-on service and covers one of:
/// - Encryption key ingestion
/// - Reseller sub-merchant management
/// - Merchant authorization and FairPlay configuration
///
/// # Examples
///
/// ```no_run
/// use castlabs_client::{
///     CastlabsClient, CastlabsResult, IngestAsset, IngestKey, IngestKeysRequest,
/// };
///
/// #[tokio::main]
/// async fn main() -> CastlabsResult<()> {
///     let client = CastlabsClient::builder()
///         .credentials("merchant-api", "password")
///         .connection_timeout_seconds(30)
///         .build()?;
///
///     let request = IngestKeysRequest {
///         assets: vec![IngestAsset {
///             asset_type: None,
///             asset_id: "movie-42".to_string(),
///             variant_id: None,
///             ingest_keys: vec![IngestKey {
///                 key_id: "dGVzdC1rZXktaWQ=".to_string(),
///                 key: Some("dGVzdC1rZXk=".to_string()),
///                 iv: None,
///                 algorithm: Some("AES".to_string()),
///                 stream_type: None,
///             }],
///         }],
///     };
///     let response = client.ingest_keys(&request, "merchant-42").await?;
///     println!("ingested {} assets", response.assets.len());
///     Ok(())
/// }
/// ```
pub struct CastlabsClient {
    api_client: ApiClient,
}

/// Builder for CastlabsClient configuration
#[derive(Debug, Default)]
pub struct CastlabsClientBuilder {
    username: Option<String>,
    password: Option<String>,
    auth_base_url: Option<String>,
    ingestion_base_url: Option<String>,
    connection_timeout_seconds: Option<i64>,
}

impl CastlabsClientBuilder {
    /// Sets the Castlabs account credentials. Required.
    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Overrides the authentication endpoint
    /// ([`DEFAULT_AUTH_BASE_URL`] when not set).
    pub fn auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = Some(url.into());
        self
    }

    /// Overrides the ingestion endpoint
    /// ([`DEFAULT_INGESTION_BASE_URL`] when not set).
    pub fn ingestion_base_url(mut self, url: impl Into<String>) -> Self {
        self.ingestion_base_url = Some(url.into());
        self
    }

    /// Sets the connect and request timeout applied to every outbound
    /// request, including both CAS round trips. Values `<= 0` leave the
    /// transport defaults in place.
    pub fn connection_timeout_seconds(mut self, seconds: i64) -> Self {
        self.connection_timeout_seconds = Some(seconds);
        self
    }

    /// Validates the configuration and constructs the client.
    ///
    /// # Errors
    ///
    /// Returns `CastlabsError::Validation` if the credentials are missing or
    /// blank, or if a configured base URL is not an absolute `http`/`https`
    /// URL.
    pub fn build(self) -> CastlabsResult<CastlabsClient> {
        let connection = self.build_connection()?;

        Ok(CastlabsClient {
            api_client: ApiClient::new(connection)?,
        })
    }

    fn build_connection(self) -> CastlabsResult<CastlabsConnection> {
        let username = self.username.ok_or_else(|| ValidationError::Field {
            field: "username".to_string(),
            message: "Username is required".to_string(),
        })?;
        validate_username(&username)?;

        let password = self.password.ok_or_else(|| ValidationError::Field {
            field: "password".to_string(),
            message: "Password is required".to_string(),
        })?;
        validate_password(&password)?;

        let auth_base_url = self
            .auth_base_url
            .unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.to_string());
        validate_base_url("auth_base_url", &auth_base_url)?;

        let ingestion_base_url = self
            .ingestion_base_url
            .unwrap_or_else(|| DEFAULT_INGESTION_BASE_URL.to_string());
        validate_base_url("ingestion_base_url", &ingestion_base_url)?;

        let connection_timeout = self
            .connection_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(|seconds| Duration::from_secs(seconds as u64));

        Ok(CastlabsConnection::new(
            CastlabsUsername::new_unchecked(username),
            CastlabsPassword::new_unchecked(password),
            CastlabsBaseUrl::new_unchecked(normalize_base_url(&auth_base_url)),
            CastlabsBaseUrl::new_unchecked(normalize_base_url(&ingestion_base_url)),
            connection_timeout,
        ))
    }
}

impl CastlabsClient {
    /// Creates a new builder for CastlabsClient configuration
    pub fn builder() -> CastlabsClientBuilder {
        CastlabsClientBuilder::default()
    }

    /// Ingests encryption keys for one or more assets.
    ///
    /// This method:
    /// - Acquires a fresh ticketed URL for the ingestion endpoint
    /// - Posts the keys as JSON
    /// - Decodes the per-asset ingestion outcome
    ///
    /// # Errors
    ///
    /// Returns `CastlabsError::Rejection` if the service answers with a
    /// status other than 200, with an empty body, or with a payload that
    /// cannot be decoded; `CastlabsError::Transport` for network failures.
    pub async fn ingest_keys(
        &self,
        request: &IngestKeysRequest,
        merchant_id: &str,
    ) -> CastlabsResult<IngestAssetsResponse> {
        let path = format!("frontend/api/keys/v2/ingest/{merchant_id}");
        self.api_client
            .post_json(&path, "Ingest failed", request)
            .await
    }

    /// Creates a sub-merchant account under a reseller account.
    ///
    /// The endpoint reports failures through the payload rather than the
    /// status line, so the response is accepted regardless of status as
    /// long as it carries a sub-merchant UUID.
    ///
    /// # Errors
    ///
    /// Returns `CastlabsError::Rejection`, quoting the raw response body,
    /// if the response is blank or carries no `subMerchantUuid`.
    pub async fn add_sub_merchant_account(
        &self,
        request: &AddSubMerchantAccountRequest,
        merchant_uuid: &str,
    ) -> CastlabsResult<AddSubMerchantAccountResponse> {
        let path = format!("frontend/rest/reselling/v1/reseller/{merchant_uuid}/submerchant/add");
        let (response, raw_body): (AddSubMerchantAccountResponse, String) =
            self.api_client.post_json_any_status(&path, request).await?;

        if response.sub_merchant_uuid.is_none() {
            return Err(CastlabsError::rejection_body(
                "Unexpected response from Castlabs",
                raw_body,
            ));
        }

        Ok(response)
    }

    /// Links an existing API account to a sub-merchant, granting it access
    /// to the sub-merchant's keys.
    ///
    /// # Errors
    ///
    /// Returns `CastlabsError::Rejection` for any status other than 204.
    pub async fn link_account_to_sub_merchant(
        &self,
        request: &LinkAccountToSubMerchantRequest,
        reseller_uuid: &str,
    ) -> CastlabsResult<()> {
        let path =
            format!("frontend/rest/reselling/v1/reseller/{reseller_uuid}/submerchant/linkAccount");
        self.api_client
            .post_expect_no_content(&path, "Unexpected status code from Castlabs", request)
            .await
    }

    /// Updates the license authorization settings of a merchant.
    ///
    /// # Errors
    ///
    /// Returns `CastlabsError::Rejection` for any status other than 200.
    pub async fn update_authorization_settings(
        &self,
        request: &UpdateAuthorizationSettingsRequest,
        merchant_uuid: &str,
    ) -> CastlabsResult<()> {
        let path = format!("frontend/rest/config/v1/{merchant_uuid}/auth/settings");
        self.api_client
            .post_expect_ok(&path, "Unexpected status code from Castlabs", request)
            .await
    }

    /// Registers the shared secret used to sign upfront authorization
    /// tokens.
    ///
    /// # Errors
    ///
    /// Returns `CastlabsError::Rejection` for any status other than 200.
    pub async fn add_shared_secret(
        &self,
        request: &SharedSecretRequest,
        merchant_uuid: &str,
    ) -> CastlabsResult<()> {
        let path = format!("frontend/rest/config/v1/{merchant_uuid}/upfront/secret/add");
        self.api_client
            .post_expect_ok(&path, "Unexpected status code from Castlabs", request)
            .await
    }

    /// Configures FairPlay streaming for a merchant.
    ///
    /// # Errors
    ///
    /// Returns `CastlabsError::Rejection` for any status other than 200.
    pub async fn set_fairplay_configuration(
        &self,
        request: &FairplayRequest,
        merchant_uuid: &str,
    ) -> CastlabsResult<()> {
        let path = format!("frontend/rest/config/v1/{merchant_uuid}/drm/fairplay");
        self.api_client
            .post_expect_ok(&path, "Unexpected status code from Castlabs", request)
            .await
    }
}
