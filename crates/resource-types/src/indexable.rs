//! The adapter contract consumed by the search engine.
//!
//! Every resource kind implements [`Indexable`] to flatten one record into
//! lower-cased scalar fields and to declare which of those fields are
//! searched and which are boosted.

use std::collections::HashSet;

use crate::error::ResourceError;
use crate::value::Fields;

/// Trait implemented once per resource kind.
///
/// # Contract
///
/// - `to_indexable` is pure and deterministic. Text values are lower-cased
///   and absent values are rendered as the empty string, never omitted.
/// - `searchable_fields` is fixed per kind and every name in it must be a
///   key of every `to_indexable` map.
/// - `boosted_fields` is a subset of `searchable_fields`. Boosting raises
///   relevance only; it never filters.
pub trait Indexable {
    /// Flatten the record into a field map.
    fn to_indexable(&self) -> Fields;

    /// Every field the engine may query, in declaration order.
    fn searchable_fields() -> &'static [&'static str];

    /// Identity-like fields whose matches should outrank others.
    fn boosted_fields() -> &'static [&'static str];
}

/// Validate the field declaration of an [`Indexable`] kind.
pub fn check_field_declaration<T: Indexable>() -> Result<(), ResourceError> {
    validate_declaration(T::searchable_fields(), T::boosted_fields())
}

/// Validate a searchable/boosted pair.
///
/// Rejects empty names, duplicates and boosted fields that are not
/// searchable.
pub fn validate_declaration<S: AsRef<str>>(
    searchable: &[S],
    boosted: &[S],
) -> Result<(), ResourceError> {
    let mut seen = HashSet::new();
    for field in searchable {
        let field = field.as_ref();
        if field.is_empty() {
            return Err(ResourceError::InvalidDeclaration(
                "empty searchable field name".into(),
            ));
        }
        if !seen.insert(field) {
            return Err(ResourceError::InvalidDeclaration(format!(
                "duplicate searchable field: {}",
                field
            )));
        }
    }

    for field in boosted {
        let field = field.as_ref();
        if !seen.contains(field) {
            return Err(ResourceError::InvalidDeclaration(format!(
                "boosted field '{}' is not searchable",
                field
            )));
        }
    }

    Ok(())
}
