pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod lemmatizer;
pub mod normalizer;
pub mod query;
pub mod soundex;

pub use corpus::{Corpus, DocId, Document};
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use index::{BiwordIndex, DocSet, PositionalIndex, TermIndex};
pub use normalizer::NormalizationMode;
pub use query::{PhraseMatches, Query, QueryOutcome};
