//! Pipeline E2E tests for resource search.
//!
//! Drives provider JSON through the instance adapter, the transient index
//! and the tiered query engine, checking which tier answers and which
//! positions come back.

use pretty_assertions::assert_eq;

use e2e_tests::{fixture_instances, sorted, SearchHarness};
use resource_search::{fuzzy_search, SearchTier, Specificity, SpecificityRule};

// ===== Index Construction =====

/// Every record lands in the index exactly once under its own position.
#[test]
fn test_index_covers_every_record() {
    let harness = SearchHarness::new(fixture_instances());

    assert_eq!(harness.index.num_docs(), harness.records.len() as u64);
    assert_eq!(harness.index.record_count(), 5);
    assert_eq!(
        sorted(harness.index.positions().unwrap()),
        (0..harness.records.len()).collect::<Vec<_>>()
    );
}

// ===== Exact Tier =====

/// A full display name resolves in the exact tier, excluding its 1-edit sibling.
#[test]
fn test_exact_name_beats_near_neighbour() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("prod-web-01");

    assert_eq!(outcome.tier, Some(SearchTier::Exact));
    assert_eq!(outcome.positions, vec![0]);
}

/// Exact matching ignores case and surrounding whitespace.
#[test]
fn test_exact_name_mixed_case() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("  batch-WORKER ");

    assert_eq!(outcome.tier, Some(SearchTier::Exact));
    assert_eq!(outcome.positions, vec![3]);
}

/// An IPv4 address has exactly three dots and never matches a longer address.
#[test]
fn test_private_ip_exact() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("10.0.1.10");

    assert_eq!(
        outcome.specificity,
        Some(Specificity::Specific(SpecificityRule::DotCount))
    );
    assert_eq!(outcome.tier, Some(SearchTier::Exact));
    assert_eq!(outcome.positions, vec![0]);
}

/// OCIDs are long enough to be specific on length alone.
#[test]
fn test_ocid_exact() {
    let harness = SearchHarness::new(fixture_instances());
    let matches = harness.matches("ocid1.instance.oc1.iad.anuwcljrstagingdb01");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].display_name.as_deref(), Some("staging-db-01"));
}

// ===== Substring Tier =====

/// The canonical prod-web scenario: two hosts via substring, order free.
#[test]
fn test_prod_web_substring() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("prod-web");

    assert_eq!(
        outcome.specificity,
        Some(Specificity::Specific(SpecificityRule::Punctuation))
    );
    assert_eq!(outcome.tier, Some(SearchTier::Substring));
    assert_eq!(sorted(outcome.positions), vec![0, 1]);
}

/// A partial address prefix falls through exact to substring.
#[test]
fn test_partial_ip_substring() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("10.0.1");

    assert_eq!(outcome.tier, Some(SearchTier::Substring));
    assert_eq!(sorted(outcome.positions), vec![0, 1]);
}

/// A `key:value` tag pair matches inside the flattened tag list.
#[test]
fn test_tag_pair_substring() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("env:staging");

    assert_eq!(outcome.tier, Some(SearchTier::Substring));
    assert_eq!(outcome.positions, vec![2]);
}

// ===== General Tier =====

/// Plain words skip the exact and substring tiers entirely.
#[test]
fn test_plain_word_general() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("bastion");

    assert_eq!(outcome.specificity, Some(Specificity::General));
    assert_eq!(outcome.tier, Some(SearchTier::General));
    assert_eq!(outcome.positions, vec![4]);
}

/// Swapped letters cost two edits and still match.
#[test]
fn test_misspelled_name_general() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("bastoin");

    assert_eq!(outcome.tier, Some(SearchTier::General));
    assert_eq!(outcome.positions, vec![4]);
}

/// A word shared by several records returns all of them.
#[test]
fn test_shared_token_general() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("phoenix");

    assert_eq!(outcome.tier, Some(SearchTier::General));
    assert_eq!(sorted(outcome.positions), vec![3, 4]);
}

/// Nothing within two edits yields an empty result with no tier.
#[test]
fn test_no_match_anywhere() {
    let harness = SearchHarness::new(fixture_instances());
    let outcome = harness.search("zzzzqqq");

    assert!(outcome.is_empty());
    assert_eq!(outcome.tier, None);
    assert_eq!(outcome.specificity, Some(Specificity::General));
}

// ===== Convenience Entry Point =====

/// The one-call entry point agrees with the harness.
#[test]
fn test_fuzzy_search_entry_point() {
    let instances = fixture_instances();

    assert_eq!(fuzzy_search(&instances, "prod-web-02").unwrap(), vec![1]);
    assert!(fuzzy_search(&instances, "   ").unwrap().is_empty());
}

/// Every returned position indexes into the caller's slice.
#[test]
fn test_positions_in_range() {
    let harness = SearchHarness::new(fixture_instances());
    for pattern in ["prod", "us-ashburn-1", "running", "flex", "10.0"] {
        let outcome = harness.search(pattern);
        assert!(
            outcome.positions.iter().all(|&p| p < harness.records.len()),
            "Out-of-range position for pattern {}",
            pattern
        );
    }
}
