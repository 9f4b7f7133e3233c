//! # resource-types
//!
//! Shared types for the resource search engine.
//!
//! This crate defines the contract between resource kinds and the engine:
//! - [`FieldValue`]: scalar values produced by adapters
//! - [`Indexable`]: the per-kind adapter trait
//! - [`SearchSettings`]: tier caps, boosts and classifier thresholds
//!
//! ## Usage
//!
//! ```rust
//! use resource_types::{FieldValue, Fields, Indexable};
//!
//! struct Bucket {
//!     name: String,
//! }
//!
//! impl Indexable for Bucket {
//!     fn to_indexable(&self) -> Fields {
//!         Fields::from([("name".to_string(), FieldValue::text(&self.name))])
//!     }
//!
//!     fn searchable_fields() -> &'static [&'static str] {
//!         &["name"]
//!     }
//!
//!     fn boosted_fields() -> &'static [&'static str] {
//!         &["name"]
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod indexable;
pub mod value;

pub use config::{BoostSettings, SearchSettings, TierCaps};
pub use error::ResourceError;
pub use indexable::{check_field_declaration, validate_declaration, Indexable};
pub use value::{FieldValue, Fields};
