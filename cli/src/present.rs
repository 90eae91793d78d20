use crate::links::LinkTable;
use search_core::{Corpus, DocId, QueryOutcome};

pub const DEFAULT_PREVIEW_LINES: usize = 2;
const SEPARATOR_WIDTH: usize = 50;

/// Renders matching documents as a name, a short preview and a link.
pub struct Presenter<'a> {
    corpus: &'a Corpus,
    links: &'a LinkTable,
    preview_lines: usize,
}

impl<'a> Presenter<'a> {
    pub fn new(corpus: &'a Corpus, links: &'a LinkTable, preview_lines: usize) -> Self {
        Self { corpus, links, preview_lines }
    }

    pub fn render_document(&self, doc_id: DocId) -> String {
        let Some(doc) = self.corpus.get(doc_id) else {
            return format!("  Document ID: {doc_id} (unknown)\n");
        };
        let preview = doc.content.lines().take(self.preview_lines).collect::<Vec<_>>().join("\n");
        let link = self.links.link(doc_id).unwrap_or_else(|| "Link not available".to_string());

        format!(
            "  Document ID: {doc_id}\n  Document Name: {name}\n  Content Preview:\n{preview}\n  Link to Document: {link}\n{separator}\n",
            name = doc.name,
            separator = "-".repeat(SEPARATOR_WIDTH),
        )
    }

    pub fn render(&self, outcome: &QueryOutcome) -> String {
        if outcome.is_empty() {
            return "  No results found.\n".to_string();
        }
        let mut out = format!("Matching documents: {}\n", outcome.len());
        for doc_id in outcome.doc_ids() {
            out.push_str(&self.render_document(doc_id));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::{DocSet, Document};
    use std::collections::BTreeMap;

    #[test]
    fn preview_keeps_the_first_lines() {
        let corpus = Corpus::from_documents(vec![Document::new("mail.txt", "Subject: hi\nFrom: bank\nBody line")]);
        let links = LinkTable::new(BTreeMap::from([(1, "f1".to_string())]), "link:{id}");
        let presenter = Presenter::new(&corpus, &links, 2);

        let out = presenter.render_document(1);
        assert!(out.contains("Document Name: mail.txt"));
        assert!(out.contains("Subject: hi\nFrom: bank\n"));
        assert!(!out.contains("Body line"));
        assert!(out.contains("Link to Document: link:f1"));
    }

    #[test]
    fn empty_outcome_and_missing_link() {
        let corpus = Corpus::from_documents(vec![Document::new("a.txt", "alpha")]);
        let links = LinkTable::default();
        let presenter = Presenter::new(&corpus, &links, DEFAULT_PREVIEW_LINES);

        assert_eq!(presenter.render(&QueryOutcome::Documents(DocSet::new())), "  No results found.\n");
        let out = presenter.render(&QueryOutcome::Documents(DocSet::from([1])));
        assert!(out.contains("Link not available"));
    }

    #[test]
    fn document_block_layout() {
        let corpus = Corpus::from_documents(vec![Document::new("a.txt", "alpha\nbeta\ngamma")]);
        let links = LinkTable::new(BTreeMap::from([(1, "f1".to_string())]), "link:{id}");
        let presenter = Presenter::new(&corpus, &links, 1);

        let expected = format!(
            "  Document ID: 1\n  Document Name: a.txt\n  Content Preview:\nalpha\n  Link to Document: link:f1\n{}\n",
            "-".repeat(50)
        );
        assert_eq!(presenter.render_document(1), expected);
        assert_eq!(presenter.render_document(9), "  Document ID: 9 (unknown)\n");
    }
}
