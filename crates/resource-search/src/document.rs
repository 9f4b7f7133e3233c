//! Document mapping from adapter field maps to Tantivy documents.

use tantivy::TantivyDocument;

use resource_types::{FieldValue, Fields};

use crate::schema::SearchSchema;

/// Convert one record's field map into a Tantivy document keyed by `position`.
///
/// Non-empty text goes into all three variants. Numbers and booleans are
/// indexed as text on the analyzed variant only. Empty text and fields the
/// adapter did not emit are skipped; keys outside the schema are ignored.
pub fn fields_to_doc(schema: &SearchSchema, fields: &Fields, position: usize) -> TantivyDocument {
    let mut doc = TantivyDocument::default();
    doc.add_text(schema.key, position.to_string());

    for handles in schema.fields() {
        match fields.get(&handles.name) {
            Some(FieldValue::Text(text)) if !text.is_empty() => {
                doc.add_text(handles.analyzed, text);
                doc.add_text(handles.exact, text);
                doc.add_text(handles.substring, text);
            }
            Some(FieldValue::Text(_)) | None => {}
            Some(other) => {
                doc.add_text(handles.analyzed, other.to_string());
            }
        }
    }

    doc
}
