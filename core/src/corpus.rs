use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type DocId = u32;

/// First identifier handed out by [`Corpus::from_documents`].
pub const FIRST_DOC_ID: DocId = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name, usually the source file name.
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }
}

/// The loaded document collection. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    docs: BTreeMap<DocId, Document>,
}

impl Corpus {
    /// Assign dense IDs starting at [`FIRST_DOC_ID`] in iteration order.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let docs = (FIRST_DOC_ID..).zip(documents).collect();
        Self { docs }
    }

    pub fn get(&self, doc_id: DocId) -> Option<&Document> { self.docs.get(&doc_id) }

    pub fn name(&self, doc_id: DocId) -> Option<&str> {
        self.docs.get(&doc_id).map(|d| d.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &Document)> {
        self.docs.iter().map(|(id, doc)| (*id, doc))
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ { self.docs.keys().copied() }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_from_one() {
        let corpus = Corpus::from_documents(vec![
            Document::new("a.txt", "alpha"),
            Document::new("b.txt", "beta"),
            Document::new("c.txt", "gamma"),
        ]);
        assert_eq!(corpus.ids().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(corpus.name(2), Some("b.txt"));
        assert_eq!(corpus.get(4), None);
    }
}
