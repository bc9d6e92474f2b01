use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Which index the remote service searches.
///
/// `Local` covers the authority's own gazetteer; `National` widens the
/// search to the national address base. The variant name is what goes on
/// the wire as the `Scope` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchScope {
    #[default]
    Local,
    National,
}

impl SearchScope {
    /// The enumeration name as sent to the service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::Local => "Local",
            SearchScope::National => "National",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(SearchScope::Local),
            "national" => Ok(SearchScope::National),
            _ => Err(CoreError::InvalidScope(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(SearchScope::Local.to_string(), "Local");
        assert_eq!(SearchScope::National.to_string(), "National");
    }

    #[test]
    fn default_is_local() {
        assert_eq!(SearchScope::default(), SearchScope::Local);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("local".parse::<SearchScope>().unwrap(), SearchScope::Local);
        assert_eq!(
            " National ".parse::<SearchScope>().unwrap(),
            SearchScope::National
        );
        assert_eq!(
            "NATIONAL".parse::<SearchScope>().unwrap(),
            SearchScope::National
        );
    }

    #[test]
    fn rejects_unknown_scope() {
        let err = "regional".parse::<SearchScope>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidScope(ref s) if s == "regional"));
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&SearchScope::National).unwrap();
        assert_eq!(json, "\"National\"");
    }
}
