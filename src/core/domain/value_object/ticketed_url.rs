use crate::core::domain::value_object::service_ticket::ServiceTicket;

/// A target resource URL with its service ticket appended.
///
/// This is the only URL form the Castlabs business endpoints accept. It
/// authorizes a single call to the exact resource it was requested for
/// and cannot be reused for a different resource.
#[derive(Debug, Clone)]
pub struct TicketedUrl(String);

impl TicketedUrl {
    /// Appends the ticket query parameter to the target URL.
    ///
    /// The ticket is concatenated verbatim; CAS tickets are URL-safe
    /// opaque tokens and the service expects them unencoded.
    pub(crate) fn new(target_url: &str, ticket: &ServiceTicket) -> Self {
        Self(format!("{}?ticket={}", target_url, ticket.as_str()))
    }

    /// Returns the ticketed URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
