use crate::core::domain::error::ValidationError;

/// A validated Castlabs endpoint base URL.
///
/// The stored value always ends with exactly one `/`, so relative API
/// paths can be appended by plain concatenation. Both the authentication
/// host and the ingestion host are represented by this type.
#[derive(Debug, Clone)]
pub struct CastlabsBaseUrl(String);

impl CastlabsBaseUrl {
    /// Creates a new base URL without validation.
    ///
    /// The caller is responsible for passing an already normalized value.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a relative path (no leading `/`) to the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

/// Validates that a string is an absolute `http`/`https` URL.
pub(crate) fn validate_base_url(field: &str, url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::Field {
            field: field.to_string(),
            message: "URL cannot be blank".to_string(),
        });
    }
    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL '{}': {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ValidationError::ConstraintViolation(format!(
            "Unsupported URL scheme '{}': must be http or https",
            scheme
        ))),
    }
}

/// Appends a trailing `/` if the URL lacks one.
pub(crate) fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
