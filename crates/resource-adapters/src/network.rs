//! Networking resources: subnets and virtual cloud networks.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resource_types::{FieldValue, Fields, Indexable};

use crate::tags::{flatten_tags, format_time};

/// A subnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Subnet {
    pub id: String,
    pub display_name: Option<String>,
    pub cidr_block: Option<String>,
    pub dns_label: Option<String>,
    pub vcn_id: Option<String>,
    pub lifecycle_state: Option<String>,
    pub prohibit_public_ip_on_vnic: Option<bool>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for Subnet {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.display_name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert("cidr".into(), FieldValue::opt(self.cidr_block.as_deref()));
        fields.insert("dns_label".into(), FieldValue::opt(self.dns_label.as_deref()));
        fields.insert("vcn_id".into(), FieldValue::opt(self.vcn_id.as_deref()));
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert(
            "private".into(),
            self.prohibit_public_ip_on_vnic
                .map(FieldValue::from)
                .unwrap_or_default(),
        );
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "id", "cidr", "dns_label", "vcn_id", "state", "tags"]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "id", "cidr"]
    }
}

/// A virtual cloud network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Vcn {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub cidr_blocks: Vec<String>,
    pub dns_label: Option<String>,
    pub lifecycle_state: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

impl Indexable for Vcn {
    fn to_indexable(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::opt(self.display_name.as_deref()));
        fields.insert("id".into(), FieldValue::text(&self.id));
        fields.insert("cidrs".into(), FieldValue::list(&self.cidr_blocks));
        fields.insert("dns_label".into(), FieldValue::opt(self.dns_label.as_deref()));
        fields.insert(
            "state".into(),
            FieldValue::opt(self.lifecycle_state.as_deref()),
        );
        fields.insert("created".into(), format_time(self.time_created.as_ref()));
        fields.insert("tags".into(), flatten_tags(&self.freeform_tags));
        fields
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "id", "cidrs", "dns_label", "state", "tags"]
    }

    fn boosted_fields() -> &'static [&'static str] {
        &["name", "id"]
    }
}
