//! Tiered fuzzy search over a built resource index.
//!
//! Specific patterns run exact -> substring -> general and stop at the
//! first tier with hits. General patterns run the general tier only.
//! Hits come back as positions into the record slice the index was built
//! from, ordered by score. Order among equal scores is not guaranteed.

use std::collections::HashSet;

use tantivy::collector::TopDocs;
use tantivy::query::{
    BooleanQuery, BoostQuery, FuzzyTermQuery, Occur, Query, RegexQuery, TermQuery,
};
use tantivy::schema::{Field, IndexRecordOption};
use tantivy::tokenizer::{Token, TokenStream};
use tantivy::Term;
use tracing::{debug, info, info_span, Span};

use resource_types::{check_field_declaration, Fields, Indexable, SearchSettings};

use crate::classifier::{classify, normalize_pattern, Specificity};
use crate::error::SearchError;
use crate::index::SearchIndex;
use crate::indexer::{BuiltIndex, ResourceIndexer};
use crate::schema::{build_resource_schema, FieldVariant, SearchSchema};
use crate::tier::SearchTier;

/// Result of one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Distinct record positions, best first
    pub positions: Vec<usize>,
    /// Tier that produced the hits (None when nothing matched)
    pub tier: Option<SearchTier>,
    /// Classification of the normalized pattern (None for an empty pattern)
    pub specificity: Option<Specificity>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Builds transient indices and runs tiered queries against them.
///
/// All logging happens inside the span handed to [`FuzzySearcher::new`].
pub struct FuzzySearcher {
    settings: SearchSettings,
    span: Span,
}

impl FuzzySearcher {
    /// Create a searcher with explicit settings and logging span.
    pub fn new(settings: SearchSettings, span: Span) -> Result<Self, SearchError> {
        settings.validate()?;
        Ok(Self { settings, span })
    }

    /// Create a searcher with the built-in heuristics.
    pub fn with_defaults() -> Self {
        Self {
            settings: SearchSettings::default(),
            span: info_span!("fuzzy_search"),
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Build an index over a record slice using the kind's declared fields.
    pub fn build_index<T: Indexable>(&self, records: &[T]) -> Result<BuiltIndex, SearchError> {
        let _entered = self.span.enter();
        check_field_declaration::<T>()?;
        self.build_from_fields(
            T::searchable_fields(),
            records.iter().map(Indexable::to_indexable),
        )
    }

    /// Build an index from pre-flattened field maps.
    ///
    /// Any failed insertion aborts the build; no partial index is returned.
    pub fn build_from_fields<S, I>(
        &self,
        field_names: &[S],
        records: I,
    ) -> Result<BuiltIndex, SearchError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = Fields>,
    {
        let _entered = self.span.enter();
        let schema = build_resource_schema(field_names)?;
        let index = SearchIndex::create_in_ram(schema, &self.settings);

        let mut indexer = ResourceIndexer::new(index)?;
        let count = indexer.index_all(records)?;
        debug!(records = count, "Indexed records");

        indexer.finish()
    }

    /// Run the tiered search.
    ///
    /// An empty or whitespace-only pattern returns no results without
    /// touching the index.
    pub fn search<S, B>(
        &self,
        built: &BuiltIndex,
        pattern: &str,
        searchable: &[S],
        boosted: &[B],
    ) -> Result<SearchOutcome, SearchError>
    where
        S: AsRef<str>,
        B: AsRef<str>,
    {
        let _entered = self.span.enter();

        let pattern = normalize_pattern(pattern);
        if pattern.is_empty() {
            debug!("Empty pattern, no results");
            return Ok(SearchOutcome::default());
        }

        check_query_fields(built.schema(), searchable)?;
        check_query_fields(built.schema(), boosted)?;

        let specificity = classify(
            &pattern,
            self.settings.specific_min_len,
            self.settings.specific_dot_count,
        );
        debug!(pattern = %pattern, %specificity, "Classified pattern");

        for tier in SearchTier::chain(specificity) {
            let query = self.tier_query(built, tier, &pattern, searchable, boosted)?;
            let positions = self.collect(built, query.as_ref(), tier.cap(&self.settings.caps))?;

            if !positions.is_empty() {
                info!(
                    pattern = %pattern,
                    tier = %tier,
                    hits = positions.len(),
                    "Resource search complete"
                );
                return Ok(SearchOutcome {
                    positions,
                    tier: Some(tier),
                    specificity: Some(specificity),
                });
            }
            debug!(tier = %tier, "Tier produced no hits");
        }

        info!(pattern = %pattern, hits = 0, "Resource search complete");
        Ok(SearchOutcome {
            positions: Vec::new(),
            tier: None,
            specificity: Some(specificity),
        })
    }

    /// Build an index over `records` and search it in one call.
    pub fn search_records<T: Indexable>(
        &self,
        records: &[T],
        pattern: &str,
    ) -> Result<Vec<usize>, SearchError> {
        if normalize_pattern(pattern).is_empty() {
            return Ok(Vec::new());
        }

        let built = self.build_index(records)?;
        let outcome = self.search(&built, pattern, T::searchable_fields(), T::boosted_fields())?;
        Ok(outcome.positions)
    }

    fn tier_query<S, B>(
        &self,
        built: &BuiltIndex,
        tier: SearchTier,
        pattern: &str,
        searchable: &[S],
        boosted: &[B],
    ) -> Result<Box<dyn Query>, SearchError>
    where
        S: AsRef<str>,
        B: AsRef<str>,
    {
        let schema = built.schema();
        let boosts = &self.settings.boosts;
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();

        match tier {
            SearchTier::Exact => {
                for name in searchable {
                    let field = schema.field(name.as_ref(), FieldVariant::Exact)?;
                    let term = Term::from_field_text(field, pattern);
                    clauses.push((
                        Occur::Should,
                        Box::new(TermQuery::new(term, IndexRecordOption::Basic)),
                    ));
                }
            }
            SearchTier::Substring => {
                for name in searchable {
                    let field = schema.field(name.as_ref(), FieldVariant::Exact)?;
                    clauses.push(should(wildcard_query(field, pattern)?, boosts.substring));
                }
            }
            SearchTier::General => {
                for name in searchable {
                    let handles = schema.handles(name.as_ref())?;
                    let term = Term::from_field_text(handles.analyzed, pattern);

                    clauses.push(should(
                        Box::new(FuzzyTermQuery::new(
                            term.clone(),
                            self.settings.fuzzy_distance,
                            false,
                        )),
                        boosts.fuzzy,
                    ));
                    clauses.push(should(
                        Box::new(FuzzyTermQuery::new_prefix(term, 0, false)),
                        boosts.prefix,
                    ));
                    if let Some(query) = token_match_query(built, handles.substring, pattern)? {
                        clauses.push(should(query, boosts.ngram));
                    }
                    clauses.push(should(wildcard_query(handles.exact, pattern)?, boosts.wildcard));
                }

                for name in boosted {
                    let field = schema.field(name.as_ref(), FieldVariant::Substring)?;
                    if let Some(query) = token_match_query(built, field, pattern)? {
                        clauses.push(should(query, boosts.boosted_field));
                    }
                }
            }
        }

        debug!(tier = %tier, clauses = clauses.len(), "Built tier query");
        Ok(Box::new(BooleanQuery::new(clauses)))
    }

    fn collect(
        &self,
        built: &BuiltIndex,
        query: &dyn Query,
        cap: usize,
    ) -> Result<Vec<usize>, SearchError> {
        let searcher = built.searcher();
        let top_docs = searcher.search(query, &TopDocs::with_limit(cap))?;

        let mut seen = HashSet::with_capacity(top_docs.len());
        let mut positions = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let position = built.position_of(&searcher, address)?;
            if seen.insert(position) {
                positions.push(position);
            }
        }
        Ok(positions)
    }
}

impl Default for FuzzySearcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn should(query: Box<dyn Query>, boost: f32) -> (Occur, Box<dyn Query>) {
    (Occur::Should, Box::new(BoostQuery::new(query, boost)))
}

/// Translate a `*pattern*` wildcard into an anchored term regex.
///
/// `*` and `?` inside the pattern keep their wildcard meaning; every other
/// character matches literally. The regex must cover the whole term, so `.`
/// is made to match line breaks as well.
pub fn wildcard_regex(pattern: &str) -> String {
    let mut out = String::from("(?s).*");
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    out.push_str(".*");
    out
}

fn wildcard_query(field: Field, pattern: &str) -> Result<Box<dyn Query>, SearchError> {
    let query = RegexQuery::from_pattern(&wildcard_regex(pattern), field)?;
    Ok(Box::new(query))
}

/// OR of the pattern's tokens as produced by the field's own analyzer.
fn token_match_query(
    built: &BuiltIndex,
    field: Field,
    pattern: &str,
) -> Result<Option<Box<dyn Query>>, SearchError> {
    let mut analyzer = built.index().index().tokenizer_for_field(field)?;
    let mut terms = Vec::new();
    analyzer
        .token_stream(pattern)
        .process(&mut |token: &Token| terms.push(Term::from_field_text(field, &token.text)));

    if terms.is_empty() {
        return Ok(None);
    }
    Ok(Some(Box::new(BooleanQuery::new_multiterms_query(terms))))
}

/// Check that every queried field exists in the schema.
fn check_query_fields<S: AsRef<str>>(
    schema: &SearchSchema,
    fields: &[S],
) -> Result<(), SearchError> {
    for name in fields {
        schema.handles(name.as_ref())?;
    }
    Ok(())
}
