use crate::{
    auth::application::request::login_form::{LoginForm, ServiceTicketForm},
    CastlabsConnection, CastlabsError, CastlabsResult, ServiceTicket, TicketGrantingUrl,
    TicketedUrl,
};

use log::debug;
use reqwest::{
    header::{HeaderMap, ACCEPT, LOCATION},
    Client, StatusCode,
};

/// Acquires a single-use ticketed URL through the CAS handshake.
///
/// Castlabs protects its REST endpoints with a two-step CAS login: the
/// credentials are first traded for a ticket granting URL, which is then
/// traded for a service ticket scoped to one target URL. The ticket is
/// appended to the target as its `ticket` query parameter.
///
/// Tickets are single-use, so every request that needs one goes through
/// the full handshake again.
pub struct TicketService {
    default_headers: HeaderMap,
}

impl TicketService {
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, "*/*".parse().unwrap());

        Self { default_headers }
    }

    /// Runs the CAS handshake and returns `target_url` with a fresh
    /// service ticket appended.
    pub async fn execute(
        &self,
        connection: &CastlabsConnection,
        target_url: &str,
    ) -> CastlabsResult<TicketedUrl> {
        let http_client = self.build_http_client(connection)?;
        let granting_url = self
            .request_ticket_granting_url(&http_client, connection)
            .await?;
        let service_ticket = self
            .request_service_ticket(&http_client, &granting_url, target_url)
            .await?;

        Ok(TicketedUrl::new(target_url, &service_ticket))
    }

    fn build_http_client(&self, connection: &CastlabsConnection) -> CastlabsResult<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = connection.connection_timeout() {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }

        Ok(builder.build()?)
    }

    /// Posts the credentials to the CAS login endpoint and returns the
    /// ticket granting URL announced in the `location` header.
    async fn request_ticket_granting_url(
        &self,
        http_client: &Client,
        connection: &CastlabsConnection,
    ) -> CastlabsResult<TicketGrantingUrl> {
        let url = connection.auth_base_url().join("cas/v1/tickets");
        debug!("Logging into Castlabs at {url}");

        let login_form = LoginForm {
            username: connection.username().as_str(),
            password: connection.password().as_str(),
        };
        let response = http_client
            .post(&url)
            .headers(self.default_headers.clone())
            .form(&login_form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(CastlabsError::rejection_status("Login failed", status));
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if location.trim().is_empty() {
            return Err(CastlabsError::rejection(
                "No location header provided in API response",
            ));
        }

        Ok(TicketGrantingUrl::new(location.to_string()))
    }

    /// Posts the target URL to the ticket granting URL and returns the
    /// service ticket carried in the response body.
    async fn request_service_ticket(
        &self,
        http_client: &Client,
        granting_url: &TicketGrantingUrl,
        target_url: &str,
    ) -> CastlabsResult<ServiceTicket> {
        debug!("Requesting service ticket from {}", granting_url.as_str());

        let ticket_form = ServiceTicketForm {
            service: target_url,
        };
        let response = http_client
            .post(granting_url.as_str())
            .headers(self.default_headers.clone())
            .form(&ticket_form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(CastlabsError::rejection_with_body(
                "Ticket retrieval failed",
                status,
                body,
            ));
        }

        Ok(ServiceTicket::new(body))
    }
}

impl Default for TicketService {
    fn default() -> Self {
        Self::new()
    }
}
