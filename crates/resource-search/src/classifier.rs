//! Query specificity classification.
//!
//! Identifier-like patterns (OCIDs, hostnames, CIDRs, `key:value` tags) are
//! tried as exact and substring matches before anything fuzzy. Short plain
//! words go straight to the general tier.

use std::fmt;

use resource_types::SearchSettings;

/// Characters whose presence marks a pattern as identifier-like.
pub const SPECIFIC_CHARS: [char; 8] = ['.', ':', '-', '_', '/', '[', ']', '@'];

/// Which rule made a pattern specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecificityRule {
    /// Pattern length reached the threshold
    Length,
    /// Pattern has exactly the configured number of dots
    DotCount,
    /// Pattern contains one of [`SPECIFIC_CHARS`]
    Punctuation,
}

impl SpecificityRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecificityRule::Length => "length",
            SpecificityRule::DotCount => "dot_count",
            SpecificityRule::Punctuation => "punctuation",
        }
    }
}

/// Result of classifying a normalized pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specificity {
    Specific(SpecificityRule),
    General,
}

impl Specificity {
    pub fn is_specific(&self) -> bool {
        matches!(self, Specificity::Specific(_))
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specificity::Specific(rule) => write!(f, "specific({})", rule.as_str()),
            Specificity::General => f.write_str("general"),
        }
    }
}

/// Trim and lower-case a raw pattern.
pub fn normalize_pattern(pattern: &str) -> String {
    pattern.trim().to_lowercase()
}

/// Classify with the default thresholds (15 characters, three dots).
pub fn classify_specificity(pattern: &str) -> Specificity {
    let settings = SearchSettings::default();
    classify(pattern, settings.specific_min_len, settings.specific_dot_count)
}

/// Classify a normalized pattern.
///
/// Length is counted in characters, not bytes.
pub fn classify(pattern: &str, min_len: usize, dot_count: usize) -> Specificity {
    if pattern.chars().count() >= min_len {
        return Specificity::Specific(SpecificityRule::Length);
    }
    if pattern.matches('.').count() == dot_count {
        return Specificity::Specific(SpecificityRule::DotCount);
    }
    if pattern.contains(SPECIFIC_CHARS) {
        return Specificity::Specific(SpecificityRule::Punctuation);
    }
    Specificity::General
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ocid_is_specific() {
        assert!(classify_specificity("ocid1.instance.oc1..aaaa").is_specific());
    }

    #[test]
    fn test_plain_word_is_general() {
        assert_eq!(classify_specificity("web"), Specificity::General);
    }

    #[test]
    fn test_length_rule() {
        assert_eq!(
            classify_specificity("abcdefghijklmnop"),
            Specificity::Specific(SpecificityRule::Length)
        );
        assert_eq!(classify_specificity("abcdefghijklmn"), Specificity::General);
        assert_eq!(
            classify_specificity("abcdefghijklmno"),
            Specificity::Specific(SpecificityRule::Length)
        );
    }

    #[test]
    fn test_punctuation_rule() {
        for pattern in ["key:value", "a.b", "prod-web", "my_db", "10.0.0.0/16", "[x]", "a@b"] {
            assert!(classify_specificity(pattern).is_specific(), "{}", pattern);
        }
        assert_eq!(
            classify_specificity("key:value"),
            Specificity::Specific(SpecificityRule::Punctuation)
        );
    }

    #[test]
    fn test_dot_count_rule() {
        assert_eq!(
            classify_specificity("10.0.1.5"),
            Specificity::Specific(SpecificityRule::DotCount)
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 14 characters, 28 bytes
        assert_eq!(classify_specificity("дддддддддддддд"), Specificity::General);
    }

    #[test]
    fn test_custom_thresholds() {
        assert!(classify("web", 3, 3).is_specific());
        assert_eq!(classify("a.b", 15, 1), Specificity::Specific(SpecificityRule::DotCount));
    }

    #[test]
    fn test_normalize_pattern() {
        assert_eq!(normalize_pattern("  Prod-WEB \t"), "prod-web");
        assert_eq!(normalize_pattern("   "), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Specificity::General.to_string(), "general");
        assert_eq!(
            Specificity::Specific(SpecificityRule::Length).to_string(),
            "specific(length)"
        );
    }

    proptest! {
        #[test]
        fn prop_short_alphanumeric_is_general(pattern in "[a-z0-9 ]{0,14}") {
            prop_assert_eq!(classify_specificity(&pattern), Specificity::General);
        }

        #[test]
        fn prop_long_patterns_are_specific(pattern in "[a-z]{15,40}") {
            prop_assert_eq!(
                classify_specificity(&pattern),
                Specificity::Specific(SpecificityRule::Length)
            );
        }

        #[test]
        fn prop_any_marker_char_is_specific(
            prefix in "[a-z]{0,5}",
            marker in prop::sample::select(SPECIFIC_CHARS.to_vec()),
            suffix in "[a-z]{0,5}",
        ) {
            let pattern = format!("{}{}{}", prefix, marker, suffix);
            prop_assert!(classify_specificity(&pattern).is_specific());
        }
    }
}
