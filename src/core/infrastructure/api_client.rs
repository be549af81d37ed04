//! Internal HTTP client that executes ticket-authenticated Castlabs requests.

use crate::{
    auth::application::service::ticket_service::TicketService, CastlabsConnection, CastlabsError,
    CastlabsResult,
};
use log::{debug, warn};
use reqwest::{header::ACCEPT, Client, StatusCode};

/// Internal HTTP client that sends the business requests of the SDK.
///
/// Every request is a JSON POST against the ingestion API, authenticated by
/// first acquiring a fresh ticketed URL through [`TicketService`]. What counts
/// as an acceptable response differs per endpoint, so each public method
/// applies one response policy on top of the shared send path.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: CastlabsConnection,
}

impl ApiClient {
    /// Creates a new `ApiClient` for the given connection.
    ///
    /// # Errors
    /// Returns `CastlabsError::Transport` if the HTTP client cannot be built.
    pub fn new(connection: CastlabsConnection) -> CastlabsResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = connection.connection_timeout() {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            connection,
        })
    }

    /// Sends a JSON POST and decodes the body of a `200 OK` response.
    ///
    /// # Type Parameters
    /// - `B`: The body type (must implement `Serialize`).
    /// - `T`: The expected response type (must implement `DeserializeOwned`).
    ///
    /// # Errors
    /// Returns `CastlabsError::Rejection` for any other status, for an empty
    /// response body, and for a body that does not decode as `T`.
    pub async fn post_json<B, T>(&self, path: &str, context: &str, body: &B) -> CastlabsResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self.send_ticketed_post(path, body).await?;
        let status = response.status();
        let response_body = response.text().await?;

        if status != StatusCode::OK {
            warn!("Castlabs rejected POST {path}: {status}");
            return Err(CastlabsError::rejection_with_body(
                context,
                status,
                response_body,
            ));
        }
        if response_body.is_empty() {
            return Err(CastlabsError::rejection(
                "Empty response entity from Castlabs",
            ));
        }

        decode(status, &response_body)
    }

    /// Sends a JSON POST and decodes the body regardless of the response
    /// status, returning the decoded value together with the raw body.
    ///
    /// The sub-merchant endpoint reports failures through the payload rather
    /// than the status line, so no status gate is applied here. The caller is
    /// expected to run its own semantic checks on the decoded value.
    ///
    /// # Errors
    /// Returns `CastlabsError::Rejection` for a blank response body (the
    /// actual status is reported) and for a body that does not decode as `T`.
    pub async fn post_json_any_status<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> CastlabsResult<(T, String)>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self.send_ticketed_post(path, body).await?;
        let status = response.status();
        let response_body = response.text().await?;

        if response_body.trim().is_empty() {
            return Err(CastlabsError::rejection_status(
                "Empty response entity from Castlabs",
                status,
            ));
        }

        let decoded = decode(status, &response_body)?;
        Ok((decoded, response_body))
    }

    /// Sends a JSON POST that must be answered with `204 No Content`.
    ///
    /// # Errors
    /// Returns `CastlabsError::Rejection` for any other status, quoting the
    /// response body when one can be read.
    pub async fn post_expect_no_content<B>(
        &self,
        path: &str,
        context: &str,
        body: &B,
    ) -> CastlabsResult<()>
    where
        B: serde::Serialize,
    {
        self.post_expect_status(path, context, body, StatusCode::NO_CONTENT)
            .await
    }

    /// Sends a JSON POST that must be answered with `200 OK`; the response
    /// body is discarded on success.
    ///
    /// # Errors
    /// Returns `CastlabsError::Rejection` for any other status, quoting the
    /// response body when one can be read.
    pub async fn post_expect_ok<B>(&self, path: &str, context: &str, body: &B) -> CastlabsResult<()>
    where
        B: serde::Serialize,
    {
        self.post_expect_status(path, context, body, StatusCode::OK)
            .await
    }

    async fn post_expect_status<B>(
        &self,
        path: &str,
        context: &str,
        body: &B,
        expected: StatusCode,
    ) -> CastlabsResult<()>
    where
        B: serde::Serialize,
    {
        let response = self.send_ticketed_post(path, body).await?;
        let status = response.status();
        if status != expected {
            warn!("Castlabs rejected POST {path}: {status}");
            let response_body = response.text().await.unwrap_or_default();
            return Err(CastlabsError::rejection_with_body(
                context,
                status,
                response_body,
            ));
        }

        Ok(())
    }

    /// Acquires a fresh ticketed URL for `path` and posts `body` to it.
    async fn send_ticketed_post<B>(&self, path: &str, body: &B) -> CastlabsResult<reqwest::Response>
    where
        B: serde::Serialize,
    {
        let target_url = self.connection.ingestion_base_url().join(path);
        let ticketed_url = TicketService::new()
            .execute(&self.connection, &target_url)
            .await?;

        debug!("Posting to {target_url}");
        let response = self
            .http_client
            .post(ticketed_url.as_str())
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }
}

/// Decodes a response body, quoting it in the rejection when it cannot be
/// decoded.
fn decode<T>(status: StatusCode, response_body: &str) -> CastlabsResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(response_body).map_err(|error| {
        CastlabsError::rejection_with_body(
            format!("Failed to decode Castlabs response: {error}"),
            status,
            response_body,
        )
    })
}
