//! Exact phrase search: biword intersection, then verification against the
//! document's token stream.

use crate::corpus::{Corpus, DocId};
use crate::error::{Result, SearchError};
use crate::index::{biwords, BiwordIndex, DocSet, PositionalIndex};
use crate::normalizer::normalize;
use std::collections::BTreeMap;

/// Matching document -> display name.
pub type PhraseMatches = BTreeMap<DocId, String>;

/// Documents that contain every phrase biword somewhere.
fn candidates(phrase_biwords: &[String], index: &BiwordIndex) -> DocSet {
    let mut docs = DocSet::new();
    for (i, biword) in phrase_biwords.iter().enumerate() {
        let Some(found) = index.docs(biword) else {
            return DocSet::new();
        };
        docs = if i == 0 { found.clone() } else { docs.intersection(found).copied().collect() };
        if docs.is_empty() {
            break;
        }
    }
    docs
}

/// Whether `needle` occurs in `haystack` as one unbroken, in-order run.
fn contains_run(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

/// Biword-set membership only proves each adjacent pair appears somewhere,
/// so every candidate is re-checked against its own biword sequence.
pub fn phrase_search(
    phrase: &str,
    biword_index: &BiwordIndex,
    positional: &PositionalIndex,
    corpus: &Corpus,
) -> Result<PhraseMatches> {
    let tokens = normalize(phrase, positional.mode());
    if tokens.len() < 2 {
        tracing::warn!(phrase, tokens = tokens.len(), "phrase is too short for biword search");
        return Err(SearchError::PhraseTooShort { tokens: tokens.len() });
    }
    let phrase_biwords = biwords(&tokens);

    let mut matches = PhraseMatches::new();
    for doc_id in candidates(&phrase_biwords, biword_index) {
        let Some(doc_tokens) = positional.tokens(doc_id) else {
            continue;
        };
        if !contains_run(&biwords(doc_tokens), &phrase_biwords) {
            continue;
        }
        if let Some(name) = corpus.name(doc_id) {
            matches.insert(doc_id, name.to_string());
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;
    use crate::index::build_positional;
    use crate::normalizer::NormalizationMode;

    fn strings(words: &[&str]) -> Vec<String> { words.iter().map(|w| w.to_string()).collect() }

    #[test]
    fn run_must_be_contiguous() {
        let hay = strings(&["a b", "b c", "c x", "x b", "b c", "c d"]);
        assert!(contains_run(&hay, &strings(&["b c", "c d"])));
        assert!(!contains_run(&hay, &strings(&["a b", "b c", "c d"])));
        assert!(!contains_run(&hay, &[]));
    }

    #[test]
    fn split_phrase_is_rejected_after_verification() {
        // Both biwords of "red green blue" exist in doc 1, but never as one run.
        let corpus = Corpus::from_documents(vec![
            Document::new("split.txt", "red green apples and green blue skies"),
            Document::new("whole.txt", "a red green blue flag"),
        ]);
        let (positional, biword_index) = build_positional(&corpus, NormalizationMode::VerbPreferring);

        let found = phrase_search("red green blue", &biword_index, &positional, &corpus).unwrap();
        assert_eq!(found, PhraseMatches::from([(2, "whole.txt".to_string())]));
    }

    #[test]
    fn short_phrases_are_reported() {
        let corpus = Corpus::from_documents(vec![Document::new("a.txt", "red green")]);
        let (positional, biword_index) = build_positional(&corpus, NormalizationMode::VerbPreferring);
        assert_eq!(
            phrase_search("the red", &biword_index, &positional, &corpus),
            Err(SearchError::PhraseTooShort { tokens: 1 })
        );
    }
}
