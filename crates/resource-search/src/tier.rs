//! Search tiers and their fallback order.

use std::fmt;

use resource_types::TierCaps;

use crate::classifier::Specificity;

/// One stage of the tiered matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTier {
    /// Whole-value term match on the exact variant
    Exact,
    /// `*pattern*` wildcard on the exact variant
    Substring,
    /// Weighted union of fuzzy, prefix, token and wildcard clauses
    General,
}

impl SearchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchTier::Exact => "exact",
            SearchTier::Substring => "substring",
            SearchTier::General => "general",
        }
    }

    /// Maximum hits this tier returns.
    pub fn cap(&self, caps: &TierCaps) -> usize {
        match self {
            SearchTier::Exact => caps.exact,
            SearchTier::Substring => caps.substring,
            SearchTier::General => caps.general,
        }
    }

    /// Tier to fall back to when this one finds nothing.
    pub fn next(&self) -> Option<SearchTier> {
        match self {
            SearchTier::Exact => Some(SearchTier::Substring),
            SearchTier::Substring => Some(SearchTier::General),
            SearchTier::General => None,
        }
    }

    /// First tier to run for a pattern of the given specificity.
    pub fn entry(specificity: Specificity) -> SearchTier {
        if specificity.is_specific() {
            SearchTier::Exact
        } else {
            SearchTier::General
        }
    }

    /// Full fallback chain, in execution order.
    pub fn chain(specificity: Specificity) -> Vec<SearchTier> {
        std::iter::successors(Some(Self::entry(specificity)), SearchTier::next).collect()
    }
}

impl fmt::Display for SearchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
