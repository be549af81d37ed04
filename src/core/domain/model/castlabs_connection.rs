use crate::core::domain::value_object::{CastlabsBaseUrl, CastlabsPassword, CastlabsUsername};
use std::time::Duration;

/// Production authentication host, used when the builder is given none.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://auth.drmtoday.com/";

/// Production ingestion host, used when the builder is given none.
pub const DEFAULT_INGESTION_BASE_URL: &str = "https://fe.drmtoday.com/";

/// The immutable connection configuration of a [`crate::CastlabsClient`].
///
/// Every value is fixed at construction time; the client never mutates
/// it, which is what makes concurrent calls on one client instance safe.
#[derive(Debug, Clone)]
pub struct CastlabsConnection {
    username: CastlabsUsername,
    password: CastlabsPassword,
    auth_base_url: CastlabsBaseUrl,
    ingestion_base_url: CastlabsBaseUrl,
    connection_timeout: Option<Duration>,
}

impl CastlabsConnection {
    pub(crate) fn new(
        username: CastlabsUsername,
        password: CastlabsPassword,
        auth_base_url: CastlabsBaseUrl,
        ingestion_base_url: CastlabsBaseUrl,
        connection_timeout: Option<Duration>,
    ) -> Self {
        Self {
            username,
            password,
            auth_base_url,
            ingestion_base_url,
            connection_timeout,
        }
    }

    pub fn username(&self) -> &CastlabsUsername {
        &self.username
    }

    pub fn password(&self) -> &CastlabsPassword {
        &self.password
    }

    pub fn auth_base_url(&self) -> &CastlabsBaseUrl {
        &self.auth_base_url
    }

    pub fn ingestion_base_url(&self) -> &CastlabsBaseUrl {
        &self.ingestion_base_url
    }

    /// The timeout applied to every outbound request, when configured.
    pub fn connection_timeout(&self) -> Option<Duration> {
        self.connection_timeout
    }
}
