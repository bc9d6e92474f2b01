use crate::SearchScope;

/// Settings shared by the lookup client and the CLI.
///
/// The service URL is the only required value; everything else has a
/// default (see [`crate::build_app_config`]).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub service_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub default_scope: SearchScope,
}
