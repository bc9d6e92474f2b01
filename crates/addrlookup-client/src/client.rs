//! Lookup facade over an [`HttpGateway`].
//!
//! Two ways to read a result. [`AddressLookupClient::execute`] returns a
//! [`LookupOutcome`] that keeps "no results", "service rejected the request"
//! and "service unreachable" apart. The `by_*` lookups and
//! [`AddressLookupClient::lookup`] collapse the latter two into an empty
//! `Vec`, so callers that only want addresses never see a transport error.
//! A 2xx body that is not a JSON array of objects is always a
//! [`LookupError::Decode`].

use addrlookup_core::{AppConfig, SearchScope, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

use crate::error::LookupError;
use crate::gateway::{GatewayResponse, HttpGateway, ReqwestGateway};
use crate::request::{
    build_by_free_text, build_by_post_code, build_by_uprn, build_by_uprn_extended, build_by_usrn,
    LookupRequest,
};
use crate::types::AddressRecord;

/// How a single lookup ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// 2xx with a decodable body; may be empty.
    Found(Vec<AddressRecord>),
    /// The service answered with a non-2xx status.
    Rejected { status: u16 },
    /// No HTTP status was received.
    Unavailable { reason: String },
}

impl LookupOutcome {
    /// Addresses on success, an empty `Vec` otherwise.
    #[must_use]
    pub fn into_records(self) -> Vec<AddressRecord> {
        match self {
            LookupOutcome::Found(records) => records,
            LookupOutcome::Rejected { .. } | LookupOutcome::Unavailable { .. } => Vec::new(),
        }
    }
}

/// Client for the address search service.
///
/// Stateless apart from its gateway; `&self` lookups may run concurrently.
/// Use [`AddressLookupClient::from_config`] in applications,
/// [`AddressLookupClient::with_base_url`] against a mock server, or
/// [`AddressLookupClient::with_gateway`] to substitute the transport.
#[derive(Debug, Clone)]
pub struct AddressLookupClient<G = ReqwestGateway> {
    gateway: G,
}

impl AddressLookupClient<ReqwestGateway> {
    /// Creates a client for `base_url` with default connect timeout and
    /// user agent.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] for an unusable base address,
    /// or [`LookupError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, LookupError> {
        let gateway = ReqwestGateway::new(
            base_url,
            timeout_secs,
            DEFAULT_CONNECT_TIMEOUT_SECS,
            DEFAULT_USER_AGENT,
        )?;
        Ok(Self::with_gateway(gateway))
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`AddressLookupClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        let gateway = ReqwestGateway::new(
            &config.service_url,
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::with_gateway(gateway))
    }
}

impl<G: HttpGateway> AddressLookupClient<G> {
    pub fn with_gateway(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Runs `request` and reports the outcome without collapsing failures.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body is not a JSON array of
    /// address objects.
    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupOutcome, LookupError> {
        self.execute_path(&request.path()).await
    }

    /// Like [`AddressLookupClient::execute`] for a prebuilt relative path.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body is not a JSON array of
    /// address objects.
    pub async fn execute_path(&self, path: &str) -> Result<LookupOutcome, LookupError> {
        tracing::info!(path, "searching for addresses");
        let response = self.gateway.get(path).await;
        interpret(path, response)
    }

    /// Runs `request`; non-2xx and transport failures yield an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body is not a JSON array of
    /// address objects.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<Vec<AddressRecord>, LookupError> {
        self.lookup_path(&request.path()).await
    }

    /// Like [`AddressLookupClient::lookup`] for a prebuilt relative path.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body is not a JSON array of
    /// address objects.
    pub async fn lookup_path(&self, path: &str) -> Result<Vec<AddressRecord>, LookupError> {
        let outcome = self.execute_path(path).await?;
        match &outcome {
            LookupOutcome::Found(records) => {
                tracing::debug!(path, count = records.len(), "address lookup succeeded");
            }
            LookupOutcome::Rejected { status } => {
                tracing::warn!(path, status, "address service rejected lookup; returning no results");
            }
            LookupOutcome::Unavailable { reason } => {
                tracing::warn!(path, reason = %reason, "address service unavailable; returning no results");
            }
        }
        Ok(outcome.into_records())
    }

    /// Addresses in a postcode.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body cannot be decoded.
    pub async fn by_post_code<S: AsRef<str> + Sync>(
        &self,
        post_code: &str,
        include_historical: bool,
        scope: SearchScope,
        classifications: &[S],
        postally_addressable: bool,
    ) -> Result<Vec<AddressRecord>, LookupError> {
        let path = build_by_post_code(
            post_code,
            include_historical,
            scope,
            classifications,
            postally_addressable,
        );
        self.lookup_path(&path).await
    }

    /// Addresses for a UPRN (simple endpoint, no filters).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body cannot be decoded.
    pub async fn by_uprn(&self, uprn: u64) -> Result<Vec<AddressRecord>, LookupError> {
        self.lookup_path(&build_by_uprn(uprn)).await
    }

    /// Addresses for a UPRN with scope and history selection.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body cannot be decoded.
    pub async fn by_uprn_extended(
        &self,
        uprn: u64,
        include_historical: bool,
        scope: SearchScope,
    ) -> Result<Vec<AddressRecord>, LookupError> {
        self.lookup_path(&build_by_uprn_extended(uprn, include_historical, scope))
            .await
    }

    /// Addresses on a street.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body cannot be decoded.
    pub async fn by_usrn<S: AsRef<str> + Sync>(
        &self,
        usrn: u64,
        include_historical: bool,
        scope: SearchScope,
        classifications: &[S],
        postally_addressable: bool,
    ) -> Result<Vec<AddressRecord>, LookupError> {
        let path = build_by_usrn(
            usrn,
            include_historical,
            scope,
            classifications,
            postally_addressable,
        );
        self.lookup_path(&path).await
    }

    /// Addresses matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Decode`] when a 2xx body cannot be decoded.
    pub async fn by_free_text<S: AsRef<str> + Sync>(
        &self,
        query: &str,
        include_historical: bool,
        scope: SearchScope,
        classifications: &[S],
        postally_addressable: bool,
    ) -> Result<Vec<AddressRecord>, LookupError> {
        let path = build_by_free_text(
            query,
            include_historical,
            scope,
            classifications,
            postally_addressable,
        );
        self.lookup_path(&path).await
    }
}

/// Maps a gateway result onto a [`LookupOutcome`].
///
/// An empty or `null` 2xx body counts as no results.
fn interpret(
    path: &str,
    response: Result<GatewayResponse, LookupError>,
) -> Result<LookupOutcome, LookupError> {
    let response = match response {
        Ok(response) => response,
        Err(LookupError::Transport { reason, .. }) => {
            return Ok(LookupOutcome::Unavailable { reason });
        }
        Err(other) => return Err(other),
    };

    if !response.is_success() {
        return Ok(LookupOutcome::Rejected {
            status: response.status,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(LookupOutcome::Found(Vec::new()));
    }

    let records: Option<Vec<AddressRecord>> =
        serde_json::from_str(&response.body).map_err(|e| LookupError::Decode {
            context: path.to_string(),
            source: e,
        })?;

    Ok(LookupOutcome::Found(records.unwrap_or_default()))
}
