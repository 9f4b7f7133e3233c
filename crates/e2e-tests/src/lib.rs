//! End-to-end test infrastructure for resource search.
//!
//! Provides a shared [`SearchHarness`] plus fixture builders covering the
//! full records -> adapter -> index -> tiered query -> positions pipeline.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use tracing::info_span;
use tracing_subscriber::EnvFilter;

use resource_adapters::Instance;
use resource_search::{BuiltIndex, FuzzySearcher, SearchOutcome};
use resource_types::{Indexable, SearchSettings};

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Records of one kind with their built index.
pub struct SearchHarness<T: Indexable> {
    pub records: Vec<T>,
    pub searcher: FuzzySearcher,
    pub index: BuiltIndex,
}

impl<T: Indexable> SearchHarness<T> {
    /// Build a harness with default settings.
    pub fn new(records: Vec<T>) -> Self {
        Self::with_settings(records, SearchSettings::default())
    }

    /// Build a harness with custom settings.
    pub fn with_settings(records: Vec<T>, settings: SearchSettings) -> Self {
        init_test_logging();

        let span = info_span!("e2e_search", kind = std::any::type_name::<T>());
        let searcher = FuzzySearcher::new(settings, span).expect("Invalid settings");
        let index = searcher
            .build_index(&records)
            .expect("Failed to build index");

        Self {
            records,
            searcher,
            index,
        }
    }

    /// Run a search with the kind's declared fields.
    pub fn search(&self, pattern: &str) -> SearchOutcome {
        self.searcher
            .search(
                &self.index,
                pattern,
                T::searchable_fields(),
                T::boosted_fields(),
            )
            .expect("Search failed")
    }

    /// Re-project hit positions into the record slice.
    pub fn matches(&self, pattern: &str) -> Vec<&T> {
        self.search(pattern)
            .positions
            .into_iter()
            .map(|p| &self.records[p])
            .collect()
    }
}

/// Deserialize a JSON array fixture.
pub fn load_fixture<T: DeserializeOwned>(json: &str) -> Vec<T> {
    serde_json::from_str(json).expect("Invalid fixture JSON")
}

/// Instance list as returned by the provider's list API.
pub const INSTANCES_JSON: &str = r#"[
    {
        "id": "ocid1.instance.oc1.iad.anuwcljrprodweb01",
        "display-name": "prod-web-01",
        "shape": "VM.Standard.E4.Flex",
        "region": "us-ashburn-1",
        "availability-domain": "Uocm:US-ASHBURN-AD-1",
        "lifecycle-state": "RUNNING",
        "private-ip": "10.0.1.10",
        "time-created": "2024-02-01T09:00:00Z",
        "freeform-tags": {"env": "prod", "app": "web"}
    },
    {
        "id": "ocid1.instance.oc1.iad.anuwcljrprodweb02",
        "display-name": "prod-web-02",
        "shape": "VM.Standard.E4.Flex",
        "region": "us-ashburn-1",
        "availability-domain": "Uocm:US-ASHBURN-AD-2",
        "lifecycle-state": "RUNNING",
        "private-ip": "10.0.1.11",
        "freeform-tags": {"env": "prod", "app": "web"}
    },
    {
        "id": "ocid1.instance.oc1.iad.anuwcljrstagingdb01",
        "display-name": "staging-db-01",
        "shape": "VM.Standard.E5.Flex",
        "region": "us-ashburn-1",
        "lifecycle-state": "STOPPED",
        "private-ip": "10.0.2.20",
        "freeform-tags": {"env": "staging", "app": "db"}
    },
    {
        "id": "ocid1.instance.oc1.phx.anyhqljrbatchworker",
        "display-name": "Batch-Worker",
        "shape": "BM.Standard3.64",
        "region": "us-phoenix-1",
        "lifecycle-state": "RUNNING",
        "private-ip": "10.1.0.5"
    },
    {
        "id": "ocid1.instance.oc1.phx.anyhqljrbastion",
        "display-name": "bastion",
        "shape": "VM.Standard.A1.Flex",
        "region": "us-phoenix-1",
        "lifecycle-state": "RUNNING"
    }
]"#;

/// The [`INSTANCES_JSON`] fixture.
pub fn fixture_instances() -> Vec<Instance> {
    load_fixture(INSTANCES_JSON)
}

const SHAPES: [&str; 4] = [
    "VM.Standard.E4.Flex",
    "VM.Standard.E5.Flex",
    "VM.Standard.A1.Flex",
    "BM.Standard3.64",
];

const REGIONS: [&str; 3] = ["us-ashburn-1", "us-phoenix-1", "eu-frankfurt-1"];

/// Generate `count` instances named `{prefix}-{i}`.
///
/// Shapes, regions and addresses are drawn from a seeded RNG so runs are
/// reproducible.
pub fn generate_instances(prefix: &str, count: usize, seed: u64) -> Vec<Instance> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid base time");

    (0..count)
        .map(|i| Instance {
            id: format!("ocid1.instance.oc1..gen{}{:06}", prefix, i),
            display_name: Some(format!("{}-{}", prefix, i)),
            shape: Some(SHAPES[rng.random_range(0..SHAPES.len())].to_string()),
            region: Some(REGIONS[rng.random_range(0..REGIONS.len())].to_string()),
            lifecycle_state: Some("RUNNING".to_string()),
            private_ip: Some(format!(
                "172.{}.{}.{}",
                rng.random_range(16..32),
                rng.random_range(0..256),
                rng.random_range(1..255)
            )),
            time_created: Some(base + chrono::Duration::minutes(i as i64)),
            freeform_tags: BTreeMap::from([("batch".to_string(), prefix.to_string())]),
            ..Default::default()
        })
        .collect()
}

/// Positions sorted ascending, for order-insensitive comparison.
///
/// Order is not guaranteed among equal scores.
pub fn sorted(mut positions: Vec<usize>) -> Vec<usize> {
    positions.sort_unstable();
    positions
}
