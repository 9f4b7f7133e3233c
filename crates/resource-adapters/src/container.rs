//! Container engine clusters.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resource_types::{FieldValue, Fields, Indexable};

use crate::tags::{flatten_tags, format_time};

/// A Kubernetes cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cluster {
    pub id: String,
    pub name: Option<String>,
    pub kubernetes_version: Option<String>,
    pub lifecycle_state: Option<String>,
    pub vcn_id: Option<String>,
    pub endpoint: Option<String>,
    pub cluster_type: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for Cluster {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert(
            "version".into(),
            FieldValue::opt(self.kubernetes_version.as_deref()),
        );
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert("vcn_id".into(), FieldValue::opt(self.vcn_id.as_deref()));
        fields.insert("endpoint".into(), FieldValue::opt(self.endpoint.as_deref()));
        fields.insert("type".into(), FieldValue::opt(self.cluster_type.as_deref()));
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "id", "version", "state", "vcn_id", "endpoint", "type", "tags"]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "id"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_adapter_contract;

    #[test]
    fn test_cluster_from_json() {
        let cluster: Cluster = serde_json::from_str(
            r#"{
                "id": "ocid1.cluster.oc1.iad.CCCC",
                "name": "OKE-Prod",
                "kubernetes-version": "v1.29.1",
                "lifecycle-state": "ACTIVE",
                "cluster-type": "ENHANCED_CLUSTER"
            }"#,
        )
        .unwrap();

        let fields = cluster.to_indexable();
        assert_eq!(fields["name"].as_text(), Some("oke-prod"));
        assert_eq!(fields["version"].as_text(), Some("v1.29.1"));
        assert_eq!(fields["type"].as_text(), Some("enhanced_cluster"));
        assert_eq!(fields["endpoint"], FieldValue::empty());
        assert_adapter_contract(&cluster);
    }
}
