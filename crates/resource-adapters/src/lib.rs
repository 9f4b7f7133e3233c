//! # resource-adapters
//!
//! Indexable adapters for the cloud resource kinds the search engine serves.
//!
//! Each kind is a plain serde record (as returned by the provider's list
//! APIs, kebab-case keys) plus an [`Indexable`] impl that flattens it into
//! lower-cased fields. Absent provider values become empty strings.
//!
//! ## Kinds
//!
//! - [`compute`]: [`Image`], [`Instance`]
//! - [`container`]: [`Cluster`]
//! - [`database`]: [`AutonomousDatabase`]
//! - [`identity`]: [`Policy`], [`Compartment`]
//! - [`network`]: [`Subnet`], [`Vcn`]
//!
//! [`ResourceKind`] enumerates them for callers that dispatch by name.
//!
//! [`Indexable`]: resource_types::Indexable

pub mod compute;
pub mod container;
pub mod database;
pub mod identity;
pub mod kind;
pub mod network;
pub mod tags;

pub use compute::{Image, Instance};
pub use container::Cluster;
pub use database::AutonomousDatabase;
pub use identity::{Compartment, Policy};
pub use kind::ResourceKind;
pub use network::{Subnet, Vcn};
pub use tags::{flatten_tags, format_time};

#[cfg(test)]
pub(crate) mod test_support {
    use resource_types::{check_field_declaration, Indexable};

    /// Assert the adapter contract holds for one record.
    pub fn assert_adapter_contract<T: Indexable>(record: &T) {
        check_field_declaration::<T>().unwrap();

        let fields = record.to_indexable();
        for field in T::searchable_fields() {
            assert!(fields.contains_key(*field), "missing field {}", field);
        }
        for (name, value) in &fields {
            if let Some(text) = value.as_text() {
                assert_eq!(text, text.to_lowercase(), "field {} not lower-cased", name);
            }
        }
    }
}
