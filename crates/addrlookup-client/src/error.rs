use thiserror::Error;

/// Errors returned by the address lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The underlying `reqwest::Client` could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base address is not a usable URL.
    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The request never produced an HTTP status (connect failure, timeout,
    /// body read failure). Lookups report this as an unavailable service.
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// A 2xx response body did not match the expected JSON array of objects.
    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
