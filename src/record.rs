//! Scheme records as they appear in the dataset.
//!
//! Every field is optional. Missing or `null` fields fall back to empty
//! sequences (or `None` for scalars) so that a sparse record never fails to
//! load. Sequence entries are kept as raw JSON values; [`as_text`] turns them
//! into the text used for matching and grouping.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Label used when a record has no usable grouping key.
pub const UNKNOWN: &str = "Unknown";

/// One government scheme from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemeRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub scheme_name: Option<Value>,
    /// Geographic applicability, in dataset order.
    #[serde(default, deserialize_with = "sequence")]
    pub states: Vec<Value>,
    /// Administering ministries, in dataset order.
    #[serde(default, deserialize_with = "sequence")]
    pub ministry: Vec<Value>,
    /// Pre-computed grouping key.
    #[serde(default, deserialize_with = "nullable")]
    pub classified_state: Option<Value>,
}

impl SchemeRecord {
    /// Scheme name as text, or [`UNKNOWN`] when absent.
    pub fn name(&self) -> String {
        self.scheme_name
            .as_ref()
            .map(as_text)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Grouping key from `classified_state`, or [`UNKNOWN`] when absent.
    pub fn classified_state(&self) -> String {
        self.classified_state
            .as_ref()
            .map(as_text)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Whether `states` lists the exact text `needle`. Case-sensitive.
    pub fn lists_state(&self, needle: &str) -> bool {
        self.states.iter().any(|s| s.as_str() == Some(needle))
    }

    /// First ministry entry as text, if any.
    pub fn primary_ministry(&self) -> Option<String> {
        self.ministry.first().map(as_text)
    }
}

/// Text form of a JSON value: strings verbatim, everything else as compact
/// JSON.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a value counts as present for prefix matching.
///
/// `null`, `false`, zero, `""`, `[]` and `{}` are all blank.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// First `width` characters of `text`. No ellipsis is added.
pub fn truncate_chars(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        v => Some(v),
    })
}

// A bare value is read as a one-element list, or as an empty one when blank.
fn sequence<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        v if is_truthy(&v) => vec![v],
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: Value) -> SchemeRecord {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let r = parse(json!({}));
        assert!(r.states.is_empty());
        assert!(r.ministry.is_empty());
        assert_eq!(r.name(), "Unknown");
        assert_eq!(r.classified_state(), "Unknown");
    }

    #[test]
    fn null_fields_behave_like_missing() {
        let r = parse(json!({
            "scheme_name": null,
            "states": null,
            "ministry": null,
            "classified_state": null
        }));
        assert_eq!(r, SchemeRecord::default());
    }

    #[test]
    fn bare_string_is_one_element_list() {
        let r = parse(json!({ "ministry": "Ministry of Finance" }));
        assert_eq!(r.ministry, vec![json!("Ministry of Finance")]);
    }

    #[test]
    fn blank_bare_value_is_empty_list() {
        for blank in [json!(""), json!(0), json!(false), json!({})] {
            let r = parse(json!({ "ministry": blank.clone(), "states": blank }));
            assert!(r.ministry.is_empty());
            assert!(r.states.is_empty());
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let r = parse(json!({ "scheme_id": 12, "benefits": "cash", "states": ["Goa"] }));
        assert!(r.lists_state("Goa"));
    }

    #[test]
    fn state_match_is_exact_and_case_sensitive() {
        let r = parse(json!({ "states": ["All India", "Kerala"] }));
        assert!(r.lists_state("All India"));
        let r = parse(json!({ "states": ["all india"] }));
        assert!(!r.lists_state("All India"));
        let r = parse(json!({ "states": ["All India (except Goa)"] }));
        assert!(!r.lists_state("All India"));
    }

    #[test]
    fn text_coercion() {
        assert_eq!(as_text(&json!("Ministry")), "Ministry");
        assert_eq!(as_text(&json!(42)), "42");
        assert_eq!(as_text(&json!(true)), "true");
        assert_eq!(as_text(&json!(["a"])), "[\"a\"]");
        let r = parse(json!({ "classified_state": 7 }));
        assert_eq!(r.classified_state(), "7");
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([0])));
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 50), "ab");
        assert_eq!(truncate_chars("प्रधानमंत्री", 2), "प्");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn primary_ministry_is_first_entry() {
        let r = parse(json!({ "ministry": ["Ministry of Health", "Other"] }));
        assert_eq!(r.primary_ministry().as_deref(), Some("Ministry of Health"));
        assert_eq!(parse(json!({})).primary_ministry(), None);
    }
}
