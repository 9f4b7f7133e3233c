//! Identity resources: policies and compartments.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resource_types::{FieldValue, Fields, Indexable};

use crate::tags::{flatten_tags, format_time};

/// An IAM policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Policy {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub statements: Vec<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for Policy {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert(
            "description".into(),
            FieldValue::opt(self.description.as_deref()),
        );
        fields.insert("statements".into(), FieldValue::list(&self.statements));
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert(
            "compartment_id".into(),
            FieldValue::opt(self.compartment_id.as_deref()),
        );
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "id", "description", "statements", "state", "tags"]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "id"]
    }
}

/// A compartment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Compartment {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub lifecycle_state: Option<String>,
    /// Parent compartment
    pub compartment_id: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for Compartment {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert(
            "description".into(),
            FieldValue::opt(self.description.as_deref()),
        );
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert(
            "parent_id".into(),
            FieldValue::opt(self.compartment_id.as_deref()),
        );
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "id", "description", "state", "parent_id", "tags"]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "id"]
    }
}
