//! Error types for the library.
//!
//! - [`FetchError`] - Loading the repository listing (network, HTTP, JSON)
//! - [`StorageError`] - localStorage access for the theme preference
//!
//! The page shows a single "network error" message for every [`FetchError`];
//! the variants exist so the console log can name the cause.

use thiserror::Error;

/// Network/fetch-related errors for the listing request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Transport failure (DNS, CORS, offline)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body could not be parsed as a listing
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

/// Preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed iframe).
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to write to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::HttpError(403).to_string(), "HTTP error: 403");
        assert_eq!(
            FetchError::NetworkError("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
