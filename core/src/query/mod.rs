//! Query evaluators. Every evaluator only reads the indexes it is given.

pub mod boolean;
pub mod phonetic;
pub mod phrase;
pub mod proximity;

use crate::corpus::DocId;
use crate::index::DocSet;
use serde::{Deserialize, Serialize};

pub use phrase::PhraseMatches;

/// One parsed user query. Each variant maps to exactly one evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    Boolean { query: String },
    Proximity { first: String, second: String, max_distance: u32 },
    Phonetic { name: String },
    PhoneticBoolean { query: String },
    Phrase { phrase: String },
}

impl Query {
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Boolean { .. } => "boolean",
            Query::Proximity { .. } => "proximity",
            Query::Phonetic { .. } => "phonetic",
            Query::PhoneticBoolean { .. } => "phonetic_boolean",
            Query::Phrase { .. } => "phrase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Documents(DocSet),
    /// Phrase matches carry the display name of each document.
    Phrase(PhraseMatches),
}

impl QueryOutcome {
    pub fn doc_ids(&self) -> Vec<DocId> {
        match self {
            QueryOutcome::Documents(docs) => docs.iter().copied().collect(),
            QueryOutcome::Phrase(matches) => matches.keys().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            QueryOutcome::Documents(docs) => docs.len(),
            QueryOutcome::Phrase(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Binary set operator shared by the boolean and phonetic-boolean grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// Case-insensitive keyword match (`AND`, `or`, `Not`, ...).
    pub fn parse_any_case(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "NOT" => Some(Operator::Not),
            _ => None,
        }
    }

    /// Lower-case keywords only; `AND` is an ordinary term here.
    pub fn parse_lowercase(token: &str) -> Option<Self> {
        match token {
            "and" => Some(Operator::And),
            "or" => Some(Operator::Or),
            "not" => Some(Operator::Not),
            _ => None,
        }
    }

    pub fn apply(self, mut left: DocSet, right: &DocSet) -> DocSet {
        match self {
            Operator::And => left.intersection(right).copied().collect(),
            Operator::Or => {
                left.extend(right.iter().copied());
                left
            }
            Operator::Not => left.difference(right).copied().collect(),
        }
    }
}
