use crate::core::domain::error::ValidationError;
use std::fmt;

/// A Castlabs account password (plaintext, held only for login requests).
#[derive(Clone)]
pub struct CastlabsPassword(String);

impl CastlabsPassword {
    /// Creates a new password without validation.
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(password)
    }

    /// Returns the password as a string slice.
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

// The password must never end up in logs or error chains.
impl fmt::Debug for CastlabsPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CastlabsPassword(***)")
    }
}

/// Validates a password.
///
/// The service account password is an opaque secret; the client only
/// refuses to be built without one.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
