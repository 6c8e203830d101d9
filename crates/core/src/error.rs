/// Outcome of a failed call to the joke provider.
///
/// These stay inside the shell's provider layer; the joke service collapses
/// them into [`ServiceError`] before anything reaches a caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The call could not complete: timeout, refused connection, DNS failure
    /// or a 5xx status from the provider.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// The provider rejected the requested category (404 or 400).
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// The response did not have the expected shape or status.
    #[error("Provider protocol error: {0}")]
    Protocol(String),
}

/// Errors visible to callers of the joke service.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Infrastructure fault. Callers may retry.
    #[error("Unable to {operation}: joke provider is unavailable")]
    ServiceUnavailable { operation: String, reason: String },

    /// The caller asked for a category the provider does not know.
    #[error("Unknown joke category '{0}'")]
    UnknownCategory(String),
}

impl ServiceError {
    /// Whether retrying the same request later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable { .. })
    }
}

/// Collapse a provider fault into the service-level taxonomy.
///
/// `operation` is a short human description ("fetch a random joke") and
/// `category` is the category the call was made for, if any.
pub fn map_provider_error(
    err: ProviderError,
    operation: &str,
    category: Option<&str>,
) -> ServiceError {
    match (err, category) {
        (ProviderError::InvalidCategory(_), Some(category)) => {
            ServiceError::UnknownCategory(category.to_string())
        }
        (ProviderError::InvalidCategory(reason), None)
        | (ProviderError::Unavailable(reason), _)
        | (ProviderError::Protocol(reason), _) => ServiceError::ServiceUnavailable {
            operation: operation.to_string(),
            reason,
        },
    }
}
