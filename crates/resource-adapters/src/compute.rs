//! Compute resources: images and instances.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resource_types::{FieldValue, Fields, Indexable};

use crate::tags::{flatten_tags, format_time};

/// A compute image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Image {
    pub id: String,
    pub display_name: Option<String>,
    pub operating_system: Option<String>,
    pub operating_system_version: Option<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub size_in_mbs: Option<i64>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for Image {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.display_name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert(
            "os".into(),
            FieldValue::opt(self.operating_system.as_deref()),
        );
        fields.insert(
            "os_version".into(),
            FieldValue::opt(self.operating_system_version.as_deref()),
        );
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert(
            "compartment_id".into(),
            FieldValue::opt(self.compartment_id.as_deref()),
        );
        fields.insert(
            "size_mb".into(),
            self.size_in_mbs.map(FieldValue::from).unwrap_or_default(),
        );
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "id", "os", "os_version", "state", "size_mb", "tags"]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "id"]
    }
}

/// A compute instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Instance {
    pub id: String,
    pub display_name: Option<String>,
    pub shape: Option<String>,
    pub region: Option<String>,
    pub availability_domain: Option<String>,
    pub fault_domain: Option<String>,
    pub lifecycle_state: Option<String>,
    pub image_id: Option<String>,
    pub private_ip: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for Instance {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.display_name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert("shape".into(), FieldValue::opt(self.shape.as_deref()));
        fields.insert("region".into(), FieldValue::opt(self.region.as_deref()));
        fields.insert(
            "availability_domain".into(),
            FieldValue::opt(self.availability_domain.as_deref()),
        );
        fields.insert(
            "fault_domain".into(),
            FieldValue::opt(self.fault_domain.as_deref()),
        );
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert("image_id".into(), FieldValue::opt(self.image_id.as_deref()));
        fields.insert(
            "private_ip".into(),
            FieldValue::opt(self.private_ip.as_deref()),
        );
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &[
            "name",
            "id",
            "shape",
            "region",
            "availability_domain",
            "state",
            "private_ip",
            "tags",
        ]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "id", "private_ip"]
    }
}
