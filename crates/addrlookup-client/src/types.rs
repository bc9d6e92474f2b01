//! Address records returned by the search service.
//!
//! The service's JSON contract is owned by the service, so a record is kept
//! as the raw JSON object rather than a fixed struct. Accessors cover the
//! fields callers routinely need.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One address object from a lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressRecord(Map<String, Value>);

impl AddressRecord {
    /// Returns the value of `field`, matched exactly.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The property's UPRN, accepting either a JSON number or a numeric
    /// string under any casing of the `Uprn` key.
    #[must_use]
    pub fn uprn(&self) -> Option<u64> {
        let value = self
            .0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("uprn"))
            .map(|(_, value)| value)?;

        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for AddressRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> AddressRecord {
        serde_json::from_value(value).expect("fixture should be an object")
    }

    #[test]
    fn uprn_reads_numeric_field() {
        let r = record(json!({ "Uprn": 100_062_000_001_u64, "Postcode": "GU1 4AA" }));
        assert_eq!(r.uprn(), Some(100_062_000_001));
    }

    #[test]
    fn uprn_reads_string_field_with_any_casing() {
        let r = record(json!({ "UPRN": " 12345 " }));
        assert_eq!(r.uprn(), Some(12345));
    }

    #[test]
    fn uprn_is_none_when_missing_or_malformed() {
        assert_eq!(record(json!({ "Postcode": "GU1 4AA" })).uprn(), None);
        assert_eq!(record(json!({ "Uprn": "n/a" })).uprn(), None);
        assert_eq!(record(json!({ "Uprn": null })).uprn(), None);
    }

    #[test]
    fn get_is_exact_match() {
        let r = record(json!({ "Postcode": "GU1 4AA" }));
        assert_eq!(r.get("Postcode"), Some(&json!("GU1 4AA")));
        assert_eq!(r.get("postcode"), None);
    }

    #[test]
    fn non_object_does_not_decode() {
        let result = serde_json::from_value::<AddressRecord>(json!("just a string"));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_back_to_the_same_object() {
        let original = json!({ "Uprn": 1, "Street": "Abbey Road" });
        let r = record(original.clone());
        assert_eq!(serde_json::to_value(&r).unwrap(), original);
    }
}
