//! Lenient deserializers for authored dossier data

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Sequence-of-strings field that never fails on shape
///
/// Absent or `null` stays `None`. An array keeps its string items and drops
/// everything else. Any other value (a bare string, a number, an object) is
/// coerced to an empty sequence.
pub(crate) mod lenient_strings {
    use super::*;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.map(coerce))
    }

    pub(crate) fn coerce(value: Value) -> Vec<String> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    other => {
                        tracing::warn!(item = %other, "dropping non-string sequence item");
                        None
                    }
                })
                .collect(),
            other => {
                tracing::warn!(value = %other, "expected a sequence, coercing to empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::lenient_strings::coerce;
    use serde_json::json;

    #[test]
    fn keeps_string_items_in_order() {
        assert_eq!(coerce(json!(["Vol", "Sonar"])), vec!["Vol", "Sonar"]);
    }

    #[test]
    fn drops_non_string_items() {
        assert_eq!(coerce(json!(["Vol", 3, null, "Sonar"])), vec!["Vol", "Sonar"]);
    }

    #[test]
    fn non_sequences_become_empty() {
        assert!(coerce(json!("Télépathie")).is_empty());
        assert!(coerce(json!(42)).is_empty());
        assert!(coerce(json!({"a": "b"})).is_empty());
    }
}
