//! Autonomous databases.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resource_types::{FieldValue, Fields, Indexable};

use crate::tags::{flatten_tags, format_time};

/// An autonomous database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AutonomousDatabase {
    pub id: String,
    pub db_name: Option<String>,
    pub display_name: Option<String>,
    pub db_workload: Option<String>,
    pub db_version: Option<String>,
    pub lifecycle_state: Option<String>,
    pub cpu_core_count: Option<i64>,
    pub data_storage_size_in_tbs: Option<f64>,
    pub is_free_tier: Option<bool>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for AutonomousDatabase {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.display_name.as_deref()));
        fields.insert("db_name".into(), FieldValue::opt(self.db_name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert(
            "workload".into(),
            FieldValue::opt(self.db_workload.as_deref()),
        );
        fields.insert("version".into(), FieldValue::opt(self.db_version.as_deref()));
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert(
            "cpu_cores".into(),
            self.cpu_core_count.map(FieldValue::from).unwrap_or_default(),
        );
        fields.insert(
            "storage_tbs".into(),
            self.data_storage_size_in_tbs
                .map(FieldValue::from)
                .unwrap_or_default(),
        );
        fields.insert(
            "free_tier".into(),
            self.is_free_tier.map(FieldValue::from).unwrap_or_default(),
        );
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &[
            "name", "db_name", "id", "workload", "version", "state", "cpu_cores", "tags",
        ]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "db_name", "id"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_adapter_contract;

    #[test]
    fn test_database_from_json() {
        let db: AutonomousDatabase = serde_json::from_str(
            r#"{
                "id": "ocid1.autonomousdatabase.oc1.iad.DDDD",
                "db-name": "SALESDB",
                "display-name": "Sales-ATP",
                "db-workload": "OLTP",
                "cpu-core-count": 2,
                "data-storage-size-in-tbs": 1.5,
                "is-free-tier": false
            }"#,
        )
        .unwrap();

        let fields = db.to_indexable();
        assert_eq!(fields["db_name"].as_text(), Some("salesdb"));
        assert_eq!(fields["workload"].as_text(), Some("oltp"));
        assert_eq!(fields["cpu_cores"], FieldValue::Integer(2));
        assert_eq!(fields["storage_tbs"], FieldValue::Float(1.5));
        assert_eq!(fields["free_tier"], FieldValue::Bool(false));
        assert_adapter_contract(&db);
    }
}
