//! Tantivy index management.
//!
//! Every search builds a fresh RAM-only index; nothing is persisted.

use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy};
use tracing::debug;

use resource_types::SearchSettings;

use crate::error::SearchError;
use crate::schema::{register_analyzers, SearchSchema};

/// Wrapper for a RAM-only Tantivy index with schema access.
pub struct SearchIndex {
    index: Index,
    schema: SearchSchema,
    writer_memory_bytes: usize,
}

impl SearchIndex {
    /// Create an empty in-memory index for the given schema.
    pub fn create_in_ram(schema: SearchSchema, settings: &SearchSettings) -> Self {
        let index = Index::create_in_ram(schema.schema().clone());
        register_analyzers(&index);

        debug!(
            fields = schema.fields().len(),
            "Created in-memory search index"
        );

        Self {
            index,
            schema,
            writer_memory_bytes: settings.writer_memory_bytes(),
        }
    }

    /// Get the search schema
    pub fn schema(&self) -> &SearchSchema {
        &self.schema
    }

    /// Get the underlying Tantivy index
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Create a single-threaded IndexWriter with the configured memory budget
    pub fn writer(&self) -> Result<IndexWriter, SearchError> {
        let writer = self
            .index
            .writer_with_num_threads(1, self.writer_memory_bytes)?;
        debug!(
            memory_bytes = self.writer_memory_bytes,
            "Created index writer"
        );
        Ok(writer)
    }

    /// Create an IndexReader that only sees what was committed before it.
    pub fn reader(&self) -> Result<IndexReader, SearchError> {
        let reader = self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        debug!("Created index reader");
        Ok(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::build_resource_schema;

    fn test_index() -> SearchIndex {
        let schema = build_resource_schema(&["name"]).unwrap();
        SearchIndex::create_in_ram(schema, &SearchSettings::default())
    }

    #[test]
    fn test_create_writer_and_reader() {
        let index = test_index();
        let _writer = index.writer().unwrap();
        let _reader = index.reader().unwrap();
    }

    #[test]
    fn test_simple_tokenizer_registered() {
        let index = test_index();
        assert!(index.index().tokenizers().get("simple").is_some());
    }

    #[test]
    fn test_empty_index_has_no_docs() {
        let index = test_index();
        let reader = index.reader().unwrap();
        assert_eq!(reader.searcher().num_docs(), 0);
    }
}
