//! # resource-search
//!
//! Transient full-text fuzzy search over cloud resource records using Tantivy.
//!
//! Callers hand over an already-fetched slice of records whose kind
//! implements [`Indexable`]. The engine builds a RAM-only index for that
//! call, resolves a free-text pattern through ordered tiers, and returns
//! positions into the same slice.
//!
//! ## Tiers
//! - Exact: whole-value match on `F.raw`
//! - Substring: `*pattern*` on `F.raw`
//! - General: fuzzy + prefix on `F`, token match on `F.ng`, wildcard on
//!   `F.raw`, and an extra token match on boosted fields
//!
//! Identifier-like patterns start at the exact tier; short plain words go
//! straight to the general tier. The first tier with hits wins.
//!
//! ## Resources
//! Memory is O(records x fields); every text value is stored three times.
//! The index is dropped when the call returns.
//!
//! ```rust,ignore
//! use resource_adapters::Instance;
//! use resource_search::fuzzy_search;
//!
//! let instances: Vec<Instance> = fetch_instances()?;
//! for position in fuzzy_search(&instances, "prod-web")? {
//!     println!("{:?}", instances[position].display_name);
//! }
//! ```
//!
//! [`Indexable`]: resource_types::Indexable

pub mod classifier;
pub mod document;
pub mod error;
pub mod index;
pub mod indexer;
pub mod schema;
pub mod searcher;
pub mod tier;

pub use classifier::{
    classify, classify_specificity, normalize_pattern, Specificity, SpecificityRule,
};
pub use document::fields_to_doc;
pub use error::SearchError;
pub use index::SearchIndex;
pub use indexer::{BuiltIndex, ResourceIndexer};
pub use schema::{build_resource_schema, FieldHandles, FieldVariant, SearchSchema, KEY_FIELD};
pub use searcher::{wildcard_regex, FuzzySearcher, SearchOutcome};
pub use tier::SearchTier;

use resource_types::Indexable;

/// Search `records` for `pattern` with the default heuristics.
///
/// Returns positions into `records`, best match first.
pub fn fuzzy_search<T: Indexable>(records: &[T], pattern: &str) -> Result<Vec<usize>, SearchError> {
    FuzzySearcher::with_defaults().search_records(records, pattern)
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use resource_adapters::{Image, Instance, Subnet};

    fn instance(id: &str, name: &str, ip: &str) -> Instance {
        Instance {
            id: id.to_string(),
            display_name: Some(name.to_string()),
            private_ip: Some(ip.to_string()),
            lifecycle_state: Some("RUNNING".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ocid_exact_match() {
        let instances = vec![
            instance("ocid1.instance.oc1.iad.AAAA", "web-01", "10.0.1.10"),
            instance("ocid1.instance.oc1.iad.AAAB", "web-02", "10.0.1.11"),
        ];

        let positions = fuzzy_search(&instances, "OCID1.INSTANCE.OC1.IAD.AAAB").unwrap();
        assert_eq!(positions, vec![1]);
    }

    #[test]
    fn test_private_ip_exact_match() {
        let instances = vec![
            instance("ocid1.instance.oc1..a", "web-01", "10.0.1.10"),
            instance("ocid1.instance.oc1..b", "web-02", "10.0.1.100"),
        ];

        // Three dots: the exact tier wins and the longer address is excluded
        let positions = fuzzy_search(&instances, "10.0.1.10").unwrap();
        assert_eq!(positions, vec![0]);
    }

    #[test]
    fn test_cidr_substring() {
        let subnets = vec![
            Subnet {
                id: "ocid1.subnet.oc1..a".into(),
                display_name: Some("public".into()),
                cidr_block: Some("10.0.0.0/24".into()),
                ..Default::default()
            },
            Subnet {
                id: "ocid1.subnet.oc1..b".into(),
                display_name: Some("private".into()),
                cidr_block: Some("10.0.2.0/24".into()),
                ..Default::default()
            },
        ];

        let positions = fuzzy_search(&subnets, "10.0.2").unwrap();
        assert_eq!(positions, vec![1]);
    }

    #[test]
    fn test_fuzzy_image_name() {
        let images = vec![
            Image {
                id: "ocid1.image.oc1..a".into(),
                display_name: Some("Canonical-Ubuntu-22.04".into()),
                operating_system: Some("Canonical Ubuntu".into()),
                ..Default::default()
            },
            Image {
                id: "ocid1.image.oc1..b".into(),
                display_name: Some("Oracle-Linux-8.9".into()),
                operating_system: Some("Oracle Linux".into()),
                ..Default::default()
            },
        ];

        // Two edits away from "ubuntu"
        let positions = fuzzy_search(&images, "ubnutu").unwrap();
        assert_eq!(positions, vec![0]);
    }

    #[test]
    fn test_tag_key_value() {
        let mut tagged = instance("ocid1.instance.oc1..a", "batch", "10.0.3.5");
        tagged
            .freeform_tags
            .insert("env".to_string(), "prod".to_string());
        let instances = vec![instance("ocid1.instance.oc1..b", "web", "10.0.3.6"), tagged];

        let positions = fuzzy_search(&instances, "env:prod").unwrap();
        assert_eq!(positions, vec![1]);
    }
}
