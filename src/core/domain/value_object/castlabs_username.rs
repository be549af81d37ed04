use crate::core::domain::error::ValidationError;

/// A Castlabs account username.
#[derive(Debug, Clone)]
pub struct CastlabsUsername(String);

impl CastlabsUsername {
    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the object and returns the inner string.
    #[allow(unused)]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Validates a username.
///
/// Castlabs account names are opaque (they may be email addresses), so the
/// only requirement is that one was actually supplied.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be blank".to_string(),
        });
    }
    Ok(())
}
