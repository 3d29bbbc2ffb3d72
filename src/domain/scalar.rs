//! Deserialization of free-text fields from any YAML scalar.
//!
//! Authors write `value: true` or `version: 1.0` without quoting. These are
//! stored in their string form, the same as values given to the builders.

use serde::{Deserialize, Deserializer, de};
use serde_yaml::Value;

fn scalar_string<E: de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(E::custom("expected a scalar value"))
        }
    }
}

/// Deserialize a required scalar as a string.
///
/// # Errors
///
/// Returns an error if the value is null, a sequence, or a mapping.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_string(Value::deserialize(deserializer)?)?
        .ok_or_else(|| de::Error::custom("expected a scalar value, found null"))
}

/// Deserialize an optional scalar as a string.
///
/// # Errors
///
/// Returns an error if the value is a sequence or a mapping.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)?.map_or(Ok(None), scalar_string)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use test_case::test_case;

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "super::optional_string")]
        value: Option<String>,
    }

    #[test_case("value: true", Some("true"); "boolean")]
    #[test_case("value: 60", Some("60"); "integer")]
    #[test_case("value: -3", Some("-3"); "negative integer")]
    #[test_case("value: 2.5", Some("2.5"); "float")]
    #[test_case("value: 1.0", Some("1.0"); "float with zero fraction")]
    #[test_case("value: REI60", Some("REI60"); "plain string")]
    #[test_case("value: '60'", Some("60"); "quoted string")]
    #[test_case("value: ~", None; "null")]
    #[test_case("{}", None; "missing")]
    fn scalars_become_strings(yaml: &str, expected: Option<&str>) {
        let field: Field = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(field.value.as_deref(), expected);
    }

    #[test_case("value: [1, 2]"; "sequence")]
    #[test_case("value: {a: 1}"; "mapping")]
    fn collections_are_rejected(yaml: &str) {
        let error = serde_yaml::from_str::<Field>(yaml).unwrap_err();
        assert!(error.to_string().contains("expected a scalar value"));
    }
}
