//! Index builder: writes one document per record and freezes the result.
//!
//! The index is write-once. Documents are keyed by their position in the
//! input slice and are not visible until [`ResourceIndexer::finish`] commits
//! and hands back a [`BuiltIndex`].

use std::borrow::Borrow;

use tantivy::schema::Value;
use tantivy::{DocAddress, IndexReader, IndexWriter, Searcher, TantivyDocument};
use tracing::{debug, info};

use resource_types::Fields;

use crate::document::fields_to_doc;
use crate::error::SearchError;
use crate::index::SearchIndex;
use crate::schema::SearchSchema;

/// Writes record documents into a fresh [`SearchIndex`].
pub struct ResourceIndexer {
    index: SearchIndex,
    writer: IndexWriter,
    count: usize,
}

impl ResourceIndexer {
    /// Create an indexer that takes ownership of an empty index.
    pub fn new(index: SearchIndex) -> Result<Self, SearchError> {
        let writer = index.writer()?;
        Ok(Self {
            index,
            writer,
            count: 0,
        })
    }

    /// Index the next record. Its key is the number of records indexed so far.
    pub fn index_fields(&mut self, fields: &Fields) -> Result<usize, SearchError> {
        let position = self.count;
        self.index_all(std::iter::once(fields))?;
        Ok(position)
    }

    /// Index a batch of records in order.
    ///
    /// Stops at the first failure; records before it stay written and the
    /// error carries the failing position.
    pub fn index_all<I>(&mut self, records: I) -> Result<usize, SearchError>
    where
        I: IntoIterator,
        I::Item: Borrow<Fields>,
    {
        let schema = self.index.schema();
        let writer = &self.writer;
        add_in_order(records, &mut self.count, |position, fields| {
            writer.add_document(fields_to_doc(schema, fields, position))?;
            debug!(position, "Indexed record");
            Ok(())
        })
    }

    /// Commit and return the searchable index.
    pub fn finish(mut self) -> Result<BuiltIndex, SearchError> {
        let opstamp = self.writer.commit()?;
        info!(opstamp, records = self.count, "Committed search index");

        let reader = self.index.reader()?;
        Ok(BuiltIndex {
            index: self.index,
            reader,
            record_count: self.count,
        })
    }
}

/// Feed records to `add` under consecutive positions starting at `*count`.
///
/// `*count` advances only on success, so after an error it equals the
/// failing position. Returns how many records were added.
fn add_in_order<I, F>(records: I, count: &mut usize, mut add: F) -> Result<usize, SearchError>
where
    I: IntoIterator,
    I::Item: Borrow<Fields>,
    F: FnMut(usize, &Fields) -> tantivy::Result<()>,
{
    let start = *count;
    for fields in records {
        let position = *count;
        add(position, fields.borrow()).map_err(|source| SearchError::Index { position, source })?;
        *count += 1;
    }
    Ok(*count - start)
}

/// A committed, read-only index over one record slice.
pub struct BuiltIndex {
    index: SearchIndex,
    reader: IndexReader,
    record_count: usize,
}

impl BuiltIndex {
    pub fn schema(&self) -> &SearchSchema {
        self.index.schema()
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn searcher(&self) -> Searcher {
        self.reader.searcher()
    }

    /// Number of records the index was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Get the number of indexed documents.
    pub fn num_docs(&self) -> u64 {
        self.searcher().num_docs()
    }

    /// Resolve a hit back to its record position.
    pub fn position_of(&self, searcher: &Searcher, address: DocAddress) -> Result<usize, SearchError> {
        let doc: TantivyDocument = searcher.doc(address)?;
        let key = doc
            .get_first(self.schema().key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| SearchError::InvalidKey(format!("missing key at {:?}", address)))?;

        let position: usize = key
            .parse()
            .map_err(|_| SearchError::InvalidKey(key.to_string()))?;
        if position >= self.record_count {
            return Err(SearchError::InvalidKey(key.to_string()));
        }
        Ok(position)
    }

    /// Every stored key, parsed back into positions, in index order.
    pub fn positions(&self) -> Result<Vec<usize>, SearchError> {
        let searcher = self.searcher();
        let mut positions = Vec::with_capacity(self.record_count);
        for (segment_ord, segment) in searcher.segment_readers().iter().enumerate() {
            for doc_id in segment.doc_ids_alive() {
                let address = DocAddress::new(segment_ord as u32, doc_id);
                positions.push(self.position_of(&searcher, address)?);
            }
        }
        Ok(positions)
    }
}
