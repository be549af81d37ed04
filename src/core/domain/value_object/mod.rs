mod castlabs_base_url;
mod castlabs_password;
mod castlabs_username;
mod service_ticket;
mod ticket_granting_url;
mod ticketed_url;

pub use castlabs_base_url::CastlabsBaseUrl;
pub use castlabs_password::CastlabsPassword;
pub use castlabs_username::CastlabsUsername;
pub use service_ticket::ServiceTicket;
pub use ticket_granting_url::TicketGrantingUrl;
pub use ticketed_url::TicketedUrl;

// Re-export validation and normalization helpers for internal use
pub(crate) use castlabs_base_url::{normalize_base_url, validate_base_url};
pub(crate) use castlabs_password::validate_password;
pub(crate) use castlabs_username::validate_username;
