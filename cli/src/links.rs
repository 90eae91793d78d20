use anyhow::{Context, Result};
use search_core::DocId;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_LINK_TEMPLATE: &str = "https://drive.google.com/file/d/{id}/view?usp=sharing";

/// External file IDs per document, turned into links through a template
/// containing `{id}`.
#[derive(Debug, Clone)]
pub struct LinkTable {
    file_ids: BTreeMap<DocId, String>,
    template: String,
}

impl Default for LinkTable {
    fn default() -> Self { Self::new(BTreeMap::new(), DEFAULT_LINK_TEMPLATE) }
}

impl LinkTable {
    pub fn new(file_ids: BTreeMap<DocId, String>, template: impl Into<String>) -> Self {
        Self { file_ids, template: template.into() }
    }

    /// Read a JSON object such as `{"1": "17gtGk9i...", "2": "1Bi7UM3y..."}`.
    pub fn load(path: &Path, template: impl Into<String>) -> Result<Self> {
        let f = File::open(path).with_context(|| format!("opening link table {}", path.display()))?;
        let file_ids: BTreeMap<DocId, String> = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parsing link table {}", path.display()))?;
        tracing::info!(entries = file_ids.len(), path = %path.display(), "loaded link table");
        Ok(Self::new(file_ids, template))
    }

    pub fn link(&self, doc_id: DocId) -> Option<String> {
        self.file_ids.get(&doc_id).map(|id| self.template.replace("{id}", id))
    }

    pub fn len(&self) -> usize { self.file_ids.len() }

    pub fn is_empty(&self) -> bool { self.file_ids.is_empty() }
}
