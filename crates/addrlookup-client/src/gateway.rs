//! The HTTP seam between request construction and result interpretation.

use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client, Url};

use crate::error::LookupError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one `GET` for a path relative to the service base address.
///
/// Implementations return `Ok` for any response that carried a status
/// (including 4xx/5xx) and [`LookupError::Transport`] when none arrived.
pub trait HttpGateway: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<GatewayResponse, LookupError>> + Send;
}

/// [`HttpGateway`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: Client,
    base_url: Url,
}

impl ReqwestGateway {
    /// Builds a gateway for `base_url`.
    ///
    /// The base is normalised to end in exactly one `/` so relative paths
    /// resolve beneath it rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] if `base_url` does not parse as
    /// an absolute URL, or [`LookupError::Http`] if the `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LookupError> {
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| LookupError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(LookupError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a relative request path against the base address.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] if the joined URL is invalid.
    pub fn resolve(&self, path: &str) -> Result<Url, LookupError> {
        self.base_url
            .join(path)
            .map_err(|e| LookupError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join '{path}': {e}"),
            })
    }
}

impl HttpGateway for ReqwestGateway {
    async fn get(&self, path: &str) -> Result<GatewayResponse, LookupError> {
        let url = self.resolve(path)?;
        let transport = |e: reqwest::Error| LookupError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;

        Ok(GatewayResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str) -> ReqwestGateway {
        ReqwestGateway::new(base_url, 30, 10, "addrlookup-test/0.1")
            .expect("gateway construction should not fail")
    }

    #[test]
    fn base_url_gets_single_trailing_slash() {
        assert_eq!(
            gateway("https://addresses.example.org/api/2").base_url().as_str(),
            "https://addresses.example.org/api/2/"
        );
        assert_eq!(
            gateway("https://addresses.example.org/api/2//").base_url().as_str(),
            "https://addresses.example.org/api/2/"
        );
    }

    #[test]
    fn resolve_keeps_versioned_prefix_and_encoding() {
        let url = gateway("https://addresses.example.org/api/2")
            .resolve("Lookup/BySomething/?Query=Abbey%20Road&Scope=Local&classifications[]=Residential")
            .expect("path should join");
        assert_eq!(
            url.as_str(),
            "https://addresses.example.org/api/2/Lookup/BySomething/?Query=Abbey%20Road&Scope=Local&classifications[]=Residential"
        );
    }

    #[test]
    fn rejects_relative_base_url() {
        let err = ReqwestGateway::new("not a url", 30, 10, "ua").unwrap_err();
        assert!(matches!(err, LookupError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn success_range_is_2xx() {
        let response = |status| GatewayResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
