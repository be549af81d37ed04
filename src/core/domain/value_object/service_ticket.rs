/// A service ticket issued by the CAS endpoint for exactly one target URL.
///
/// The ticket is the verbatim body of the exchange response, carried
/// without trimming or validation: the server defines its shape.
#[derive(Debug, Clone)]
pub struct ServiceTicket(String);

impl ServiceTicket {
    /// Wraps the raw exchange response body.
    pub(crate) fn new(ticket: String) -> Self {
        Self(ticket)
    }

    /// Returns the ticket as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
