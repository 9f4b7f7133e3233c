//! Tantivy schema definition for resource search.
//!
//! Every logical field `F` is provisioned three ways:
//! - `F`: analyzed text for fuzzy and prefix matching
//! - `F.raw`: the untokenized value for exact and wildcard matching
//! - `F.ng`: simple-analyzed text for token (substring-like) matching
//!
//! A reserved `_key` field stores the record's position in the input slice.

use tantivy::schema::{
    is_valid_field_name, Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED,
    STRING, TEXT,
};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, TextAnalyzer};
use tantivy::Index;

use resource_types::validate_declaration;

use crate::SearchError;

/// Name of the stored key field.
pub const KEY_FIELD: &str = "_key";

/// Tokenizer name for the substring variant.
pub const SIMPLE_TOKENIZER: &str = "simple";

/// The three physical variants of a logical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldVariant {
    /// Standard analyzed text
    Analyzed,
    /// Whole value, no tokenization
    Exact,
    /// Unicode word tokens, lower-cased, no stemming
    Substring,
}

impl FieldVariant {
    pub const ALL: [FieldVariant; 3] = [
        FieldVariant::Analyzed,
        FieldVariant::Exact,
        FieldVariant::Substring,
    ];

    /// Suffix appended to the logical name to form the physical field name.
    pub fn suffix(&self) -> &'static str {
        match self {
            FieldVariant::Analyzed => "",
            FieldVariant::Exact => ".raw",
            FieldVariant::Substring => ".ng",
        }
    }

    /// Name of the tokenizer the variant is indexed with.
    pub fn tokenizer(&self) -> &'static str {
        match self {
            FieldVariant::Analyzed => "default",
            FieldVariant::Exact => "raw",
            FieldVariant::Substring => SIMPLE_TOKENIZER,
        }
    }

    pub fn physical_name(&self, logical: &str) -> String {
        format!("{}{}", logical, self.suffix())
    }

    fn text_options(&self) -> TextOptions {
        match self {
            FieldVariant::Analyzed => TEXT,
            FieldVariant::Exact => STRING,
            FieldVariant::Substring => TextOptions::default().set_indexing_options(
                TextFieldIndexing::default()
                    .set_tokenizer(SIMPLE_TOKENIZER)
                    .set_index_option(IndexRecordOption::WithFreqsAndPositions),
            ),
        }
    }
}

/// Field handles for one logical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHandles {
    pub name: String,
    pub analyzed: Field,
    pub exact: Field,
    pub substring: Field,
}

impl FieldHandles {
    pub fn get(&self, variant: FieldVariant) -> Field {
        match variant {
            FieldVariant::Analyzed => self.analyzed,
            FieldVariant::Exact => self.exact,
            FieldVariant::Substring => self.substring,
        }
    }
}

/// Schema field handles for efficient access
#[derive(Debug, Clone)]
pub struct SearchSchema {
    schema: Schema,
    /// Decimal record position (STRING | STORED)
    pub key: Field,
    fields: Vec<FieldHandles>,
}

impl SearchSchema {
    /// Get the underlying Tantivy schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Logical fields in declaration order.
    pub fn fields(&self) -> &[FieldHandles] {
        &self.fields
    }

    /// Handles for a logical field.
    pub fn handles(&self, name: &str) -> Result<&FieldHandles, SearchError> {
        self.fields
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| SearchError::UnknownField(name.to_string()))
    }

    /// Resolve one physical field.
    pub fn field(&self, name: &str, variant: FieldVariant) -> Result<Field, SearchError> {
        self.handles(name).map(|h| h.get(variant))
    }
}

/// Build the search schema for a list of logical field names.
///
/// Fails on empty or duplicate names, the reserved key name, names with a
/// leading `-`, and names ending in a variant suffix.
pub fn build_resource_schema<S: AsRef<str>>(field_names: &[S]) -> Result<SearchSchema, SearchError> {
    validate_declaration(field_names, &[])?;

    let mut schema_builder = Schema::builder();
    let key = schema_builder.add_text_field(KEY_FIELD, STRING | STORED);

    let mut fields = Vec::with_capacity(field_names.len());
    for name in field_names {
        let name = name.as_ref();
        if name == KEY_FIELD {
            return Err(SearchError::Schema(format!(
                "field name '{}' is reserved",
                KEY_FIELD
            )));
        }
        if !is_valid_field_name(name) {
            return Err(SearchError::Schema(format!(
                "field name '{}' is not a valid index field name",
                name
            )));
        }
        if name.ends_with(FieldVariant::Exact.suffix())
            || name.ends_with(FieldVariant::Substring.suffix())
        {
            return Err(SearchError::Schema(format!(
                "field name '{}' collides with a variant suffix",
                name
            )));
        }

        let [analyzed, exact, substring] = FieldVariant::ALL.map(|variant| {
            schema_builder.add_text_field(&variant.physical_name(name), variant.text_options())
        });

        fields.push(FieldHandles {
            name: name.to_string(),
            analyzed,
            exact,
            substring,
        });
    }

    Ok(SearchSchema {
        schema: schema_builder.build(),
        key,
        fields,
    })
}

/// Register the analyzers the schema refers to that tantivy does not ship.
pub fn register_analyzers(index: &Index) {
    let simple = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .build();
    index.tokenizers().register(SIMPLE_TOKENIZER, simple);
}
