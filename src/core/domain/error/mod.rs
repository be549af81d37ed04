use thiserror::Error;

/// The main error type for Castlabs DRMtoday operations.
///
/// This enum represents all possible errors that can occur while talking
/// to the Castlabs service: remote rejections (the service answered, but
/// with something the client cannot accept), transport failures, and
/// client-side configuration validation failures.
#[derive(Error, Debug)]
pub enum CastlabsError {
    /// The service responded with an unexpected status code, a missing
    /// header, or an unusable payload.
    ///
    /// # Fields
    /// * `context` - What the client was doing when the response was refused
    /// * `status` - HTTP status code, when the rejection is tied to one
    /// * `reason` - Canonical reason phrase for the status, when known
    /// * `body` - Response body, when one could be read
    #[error("{context}{}{}{}",
        .status.map(|s| format!(": Response code={s}")).unwrap_or_default(),
        .reason.as_ref().map(|r| format!(", Reason={r}")).unwrap_or_default(),
        .body.as_ref().map(|b| format!(", Body={b}")).unwrap_or_default())]
    Rejection {
        context: String,
        status: Option<u16>,
        reason: Option<String>,
        body: Option<String>,
    },

    /// The request could not be completed at the transport level
    /// (connectivity failure, timeout, interrupted stream).
    ///
    /// The underlying [`reqwest::Error`] is carried unchanged.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client-side validation of the configuration failed.
    ///
    /// # Fields
    /// * `0` - The underlying validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CastlabsError {
    /// Builds a rejection that is not tied to a status line, such as a
    /// missing response header.
    pub(crate) fn rejection(context: impl Into<String>) -> Self {
        CastlabsError::Rejection {
            context: context.into(),
            status: None,
            reason: None,
            body: None,
        }
    }

    /// Builds a rejection from a response body whose content was
    /// unacceptable, independent of the status line.
    pub(crate) fn rejection_body(context: impl Into<String>, body: impl Into<String>) -> Self {
        CastlabsError::Rejection {
            context: context.into(),
            status: None,
            reason: None,
            body: Some(body.into()),
        }
    }

    /// Builds a rejection from a status line, without reading the body.
    pub(crate) fn rejection_status(context: impl Into<String>, status: reqwest::StatusCode) -> Self {
        CastlabsError::Rejection {
            context: context.into(),
            status: Some(status.as_u16()),
            reason: status.canonical_reason().map(str::to_string),
            body: None,
        }
    }

    /// Builds a rejection from a status line plus the response body that
    /// was captured for diagnostics.
    pub(crate) fn rejection_with_body(
        context: impl Into<String>,
        status: reqwest::StatusCode,
        body: impl Into<String>,
    ) -> Self {
        CastlabsError::Rejection {
            context: context.into(),
            status: Some(status.as_u16()),
            reason: status.canonical_reason().map(str::to_string),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code attached to this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            CastlabsError::Rejection { status, .. } => *status,
            CastlabsError::Transport(source) => source.status().map(|s| s.as_u16()),
            CastlabsError::Validation(_) => None,
        }
    }

    /// Returns the captured response body attached to this error, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            CastlabsError::Rejection { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the remote service answered but the answer was
    /// refused by the client.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, CastlabsError::Rejection { .. })
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a configuration value
/// was refused, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a CastlabsError
pub type CastlabsResult<T> = Result<T, CastlabsError>;
