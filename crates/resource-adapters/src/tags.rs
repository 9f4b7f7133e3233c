//! Shared rendering helpers for adapters.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use resource_types::FieldValue;

/// Flatten free-form tags into `key:value` pairs joined with ", ".
///
/// Keys are emitted in sorted order so the output is deterministic.
pub fn flatten_tags(tags: &BTreeMap<String, String>) -> FieldValue {
    FieldValue::list(tags.iter().map(|(k, v)| format!("{}:{}", k, v)))
}

/// RFC 3339 timestamp, or the empty string when absent.
pub fn format_time(time: Option<&DateTime<Utc>>) -> FieldValue {
    FieldValue::opt(time.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_flatten_tags_sorted_and_lowercased() {
        let tags = BTreeMap::from([
            ("team".to_string(), "Core".to_string()),
            ("env".to_string(), "PROD".to_string()),
        ]);
        assert_eq!(flatten_tags(&tags).as_text(), Some("env:prod, team:core"));
    }

    #[test]
    fn test_flatten_empty_tags() {
        assert_eq!(flatten_tags(&BTreeMap::new()), FieldValue::empty());
    }

    #[test]
    fn test_format_time() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            format_time(Some(&time)).as_text(),
            Some("2024-03-01t12:30:00z")
        );
        assert_eq!(format_time(None), FieldValue::empty());
    }
}
