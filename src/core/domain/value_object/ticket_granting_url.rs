/// The opaque ticket-granting URL returned by a successful CAS login.
///
/// The value comes from the `location` response header and is valid for a
/// single service-ticket exchange. It is never persisted across calls.
#[derive(Debug, Clone)]
pub struct TicketGrantingUrl(String);

impl TicketGrantingUrl {
    /// Wraps the raw header value. The value is kept exactly as the
    /// server sent it; blankness is checked at the protocol layer where
    /// it can be reported as a remote rejection.
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    /// Returns the ticket-granting URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
