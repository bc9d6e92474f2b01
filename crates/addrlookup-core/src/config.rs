use crate::app_config::AppConfig;
use crate::{ConfigError, SearchScope};

/// Environment variable holding the base address of the search service.
pub const SERVICE_URL_VAR: &str = "ADDRLOOKUP_SERVICE_URL";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "addrlookup/0.1 (address-lookup)";

/// Load configuration from `.env` and the process environment.
///
/// A `service_url` given here (the CLI's `--service-url`) takes precedence
/// over `ADDRLOOKUP_SERVICE_URL`.
///
/// # Errors
///
/// Returns `ConfigError` if the service URL is missing or a value is invalid.
pub fn load_app_config(service_url: Option<&str>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| match service_url {
        Some(url) if key == SERVICE_URL_VAR => Ok(url.to_string()),
        _ => std::env::var(key),
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] when `ADDRLOOKUP_SERVICE_URL` is
/// absent or blank, and [`ConfigError::InvalidEnvVar`] when a value cannot be
/// parsed or a timeout is zero.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // A zero timeout makes reqwest fail every request immediately.
    let parse_secs = |var: &str, default: u64| -> Result<u64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        match raw.parse::<u64>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            Ok(secs) => Ok(secs),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let service_url = require(SERVICE_URL_VAR)?;
    let log_level = or_default("ADDRLOOKUP_LOG_LEVEL", "info");

    let request_timeout_secs =
        parse_secs("ADDRLOOKUP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    let connect_timeout_secs =
        parse_secs("ADDRLOOKUP_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;
    let user_agent = or_default("ADDRLOOKUP_USER_AGENT", DEFAULT_USER_AGENT);

    let default_scope = or_default("ADDRLOOKUP_DEFAULT_SCOPE", "local")
        .parse::<SearchScope>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "ADDRLOOKUP_DEFAULT_SCOPE".to_string(),
            reason: e.to_string(),
        })?;

    Ok(AppConfig {
        log_level,
        service_url,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        default_scope,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert(SERVICE_URL_VAR, "https://addresses.example.org/api/2/");
        m
    }

    #[test]
    fn build_app_config_fails_without_service_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == SERVICE_URL_VAR),
            "expected MissingEnvVar(ADDRLOOKUP_SERVICE_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_treats_blank_service_url_as_missing() {
        let mut map = HashMap::new();
        map.insert(SERVICE_URL_VAR, "   ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn build_app_config_applies_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.service_url, "https://addresses.example.org/api/2/");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(cfg.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.default_scope, SearchScope::Local);
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = full_env();
        map.insert("ADDRLOOKUP_LOG_LEVEL", "debug");
        map.insert("ADDRLOOKUP_REQUEST_TIMEOUT_SECS", "5");
        map.insert("ADDRLOOKUP_CONNECT_TIMEOUT_SECS", "2");
        map.insert("ADDRLOOKUP_USER_AGENT", "custom-agent/2.0");
        map.insert("ADDRLOOKUP_DEFAULT_SCOPE", "National");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.connect_timeout_secs, 2);
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
        assert_eq!(cfg.default_scope, SearchScope::National);
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map = full_env();
        map.insert("ADDRLOOKUP_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADDRLOOKUP_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(ADDRLOOKUP_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_default_scope() {
        let mut map = full_env();
        map.insert("ADDRLOOKUP_DEFAULT_SCOPE", "galactic");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADDRLOOKUP_DEFAULT_SCOPE"),
            "expected InvalidEnvVar(ADDRLOOKUP_DEFAULT_SCOPE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_timeouts() {
        for var in [
            "ADDRLOOKUP_REQUEST_TIMEOUT_SECS",
            "ADDRLOOKUP_CONNECT_TIMEOUT_SECS",
        ] {
            let mut map = full_env();
            map.insert(var, "0");
            let result = build_app_config(lookup_from_map(&map));
            assert!(
                matches!(result, Err(ConfigError::InvalidEnvVar { var: ref v, .. }) if v == var),
                "expected InvalidEnvVar({var}), got: {result:?}"
            );
        }
    }

    #[test]
    fn load_app_config_prefers_explicit_service_url() {
        let cfg = load_app_config(Some("http://localhost:9999/api/2")).expect("config should load");
        assert_eq!(cfg.service_url, "http://localhost:9999/api/2");
    }
}
