use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{build_positional, BiwordIndex, DocSet, PositionalIndex, TermIndex};
use crate::normalizer::NormalizationMode;
use crate::query::{boolean, phonetic, phrase, proximity, PhraseMatches, Query, QueryOutcome};

/// A corpus together with every index built over it.
///
/// Built once and never mutated afterwards; queries only borrow it. To pick up
/// a changed corpus, build a new engine and swap it in whole.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: Corpus,
    terms: TermIndex,
    positional: PositionalIndex,
    biwords: BiwordIndex,
}

impl SearchEngine {
    /// Mode of the term index behind boolean queries.
    pub const BOOLEAN_MODE: NormalizationMode = NormalizationMode::General;
    /// Mode of the positional and biword indexes.
    pub const POSITIONAL_MODE: NormalizationMode = NormalizationMode::VerbPreferring;

    pub fn build(corpus: Corpus) -> Self {
        let terms = TermIndex::build(&corpus, Self::BOOLEAN_MODE);
        let (positional, biwords) = build_positional(&corpus, Self::POSITIONAL_MODE);
        Self { corpus, terms, positional, biwords }
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }
    pub fn term_index(&self) -> &TermIndex { &self.terms }
    pub fn positional_index(&self) -> &PositionalIndex { &self.positional }
    pub fn biword_index(&self) -> &BiwordIndex { &self.biwords }

    pub fn boolean(&self, query: &str) -> Result<DocSet> { boolean::evaluate(query, &self.terms) }

    pub fn phonetic(&self, name: &str) -> Result<DocSet> {
        phonetic::phonetic_match(name, &self.positional)
    }

    pub fn phonetic_boolean(&self, query: &str) -> Result<DocSet> {
        phonetic::phonetic_boolean(query, &self.positional)
    }

    pub fn proximity(&self, first: &str, second: &str, max_distance: u32) -> DocSet {
        proximity::proximity(first, second, max_distance, &self.positional)
    }

    pub fn phrase(&self, phrase: &str) -> Result<PhraseMatches> {
        phrase::phrase_search(phrase, &self.biwords, &self.positional, &self.corpus)
    }

    pub fn execute(&self, query: &Query) -> Result<QueryOutcome> {
        let outcome = match query {
            Query::Boolean { query } => QueryOutcome::Documents(self.boolean(query)?),
            Query::Proximity { first, second, max_distance } => {
                QueryOutcome::Documents(self.proximity(first, second, *max_distance))
            }
            Query::Phonetic { name } => QueryOutcome::Documents(self.phonetic(name)?),
            Query::PhoneticBoolean { query } => QueryOutcome::Documents(self.phonetic_boolean(query)?),
            Query::Phrase { phrase } => QueryOutcome::Phrase(self.phrase(phrase)?),
        };
        tracing::debug!(kind = query.kind(), hits = outcome.len(), "query evaluated");
        Ok(outcome)
    }
}
