use crate::corpus::{Corpus, DocId};
use crate::normalizer::{normalize, NormalizationMode};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// 0-based offset into a document's normalized token stream.
pub type Position = u32;
pub type DocSet = BTreeSet<DocId>;
/// Positions of one term, per document. Positions are strictly increasing.
pub type PostingList = BTreeMap<DocId, Vec<Position>>;

pub const BIWORD_SEPARATOR: char = ' ';

pub fn make_biword(first: &str, second: &str) -> String {
    let mut biword = String::with_capacity(first.len() + second.len() + 1);
    biword.push_str(first);
    biword.push(BIWORD_SEPARATOR);
    biword.push_str(second);
    biword
}

/// Biwords of consecutive tokens, in order. Empty for fewer than 2 tokens.
pub fn biwords<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| make_biword(pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}

/// term -> documents, without positions. Backs boolean queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermIndex {
    mode: NormalizationMode,
    postings: HashMap<String, DocSet>,
    docs: DocSet,
}

impl TermIndex {
    pub fn build(corpus: &Corpus, mode: NormalizationMode) -> Self {
        let mut postings: HashMap<String, DocSet> = HashMap::new();
        for (doc_id, doc) in corpus.iter() {
            for term in normalize(&doc.content, mode) {
                postings.entry(term).or_default().insert(doc_id);
            }
        }
        let index = Self { mode, postings, docs: corpus.ids().collect() };
        tracing::info!(num_docs = index.docs.len(), num_terms = index.postings.len(), ?mode, "built term index");
        index
    }

    pub fn mode(&self) -> NormalizationMode { self.mode }

    /// Documents containing an already normalized term.
    pub fn docs(&self, term: &str) -> Option<&DocSet> { self.postings.get(term) }

    /// Every document of the collection, including ones with no indexed terms.
    pub fn all_docs(&self) -> &DocSet { &self.docs }

    pub fn num_terms(&self) -> usize { self.postings.len() }
}

/// term -> document -> positions, plus each document's token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalIndex {
    mode: NormalizationMode,
    postings: HashMap<String, PostingList>,
    doc_tokens: BTreeMap<DocId, Vec<String>>,
}

impl PositionalIndex {
    pub fn mode(&self) -> NormalizationMode { self.mode }

    pub fn postings(&self, term: &str) -> Option<&PostingList> { self.postings.get(term) }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.postings.iter().map(|(term, list)| (term.as_str(), list))
    }

    /// The normalized token stream a document was indexed from.
    pub fn tokens(&self, doc_id: DocId) -> Option<&[String]> {
        self.doc_tokens.get(&doc_id).map(Vec::as_slice)
    }
}

/// biword -> documents containing that adjacent pair at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiwordIndex {
    entries: HashMap<String, DocSet>,
}

impl BiwordIndex {
    pub fn docs(&self, biword: &str) -> Option<&DocSet> { self.entries.get(biword) }
}

/// Build the positional and biword indexes in one pass over the corpus.
pub fn build_positional(corpus: &Corpus, mode: NormalizationMode) -> (PositionalIndex, BiwordIndex) {
    let mut postings: HashMap<String, PostingList> = HashMap::new();
    let mut entries: HashMap<String, DocSet> = HashMap::new();
    let mut doc_tokens = BTreeMap::new();

    for (doc_id, doc) in corpus.iter() {
        let tokens = normalize(&doc.content, mode);
        for (pos, term) in tokens.iter().enumerate() {
            postings
                .entry(term.clone())
                .or_default()
                .entry(doc_id)
                .or_default()
                .push(pos as Position);
        }
        for biword in biwords(&tokens) {
            entries.entry(biword).or_default().insert(doc_id);
        }
        doc_tokens.insert(doc_id, tokens);
    }

    tracing::info!(
        num_docs = doc_tokens.len(),
        num_terms = postings.len(),
        num_biwords = entries.len(),
        ?mode,
        "built positional index"
    );
    (PositionalIndex { mode, postings, doc_tokens }, BiwordIndex { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;

    fn corpus() -> Corpus {
        Corpus::from_documents(vec![
            Document::new("one.txt", "The quick brown fox jumps over the lazy fox."),
            Document::new("two.txt", "A brown dog; 42 foxes!"),
            Document::new("empty.txt", "the and of"),
        ])
    }

    #[test]
    fn positions_follow_the_filtered_stream() {
        let (index, _) = build_positional(&corpus(), NormalizationMode::VerbPreferring);
        assert_eq!(index.tokens(1).unwrap(), ["quick", "brown", "fox", "jump", "lazi", "fox"]);
        assert_eq!(index.postings("fox").unwrap()[&1], vec![2, 5]);
        assert_eq!(index.postings("brown").unwrap()[&2], vec![0]);
        assert!(index.postings("the").is_none());
    }

    #[test]
    fn biwords_are_adjacent_pairs_only() {
        let (_, biwords) = build_positional(&corpus(), NormalizationMode::VerbPreferring);
        assert_eq!(biwords.docs("brown fox"), Some(&DocSet::from([1])));
        assert_eq!(biwords.docs("brown dog"), Some(&DocSet::from([2])));
        assert!(biwords.docs("quick fox").is_none());
    }

    #[test]
    fn all_docs_counts_documents_not_terms() {
        let terms = TermIndex::build(&corpus(), NormalizationMode::General);
        assert_eq!(terms.all_docs(), &DocSet::from([1, 2, 3]));
        assert!(terms.num_terms() > terms.all_docs().len());
        assert_eq!(terms.docs("fox"), Some(&DocSet::from([1, 2])));
    }

    #[test]
    fn make_biword_joins_with_separator() {
        assert_eq!(make_biword("brown", "fox"), "brown fox");
        assert!(biwords(&["solo"]).is_empty());
    }
}
