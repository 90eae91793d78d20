use anyhow::{bail, Context, Result};
use search_core::{Corpus, Document};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Load every non-empty `.txt` file under `dir`, in file-name order.
///
/// IDs are assigned densely from 1 after empty files are skipped.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    if !dir.is_dir() {
        bail!("corpus directory {} does not exist", dir.display());
    }

    let mut docs = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let content = text.trim();
        if content.is_empty() {
            tracing::debug!(path = %path.display(), "skipping empty document");
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        docs.push(Document::new(name, content));
    }

    if docs.is_empty() {
        bail!("no documents found under {}", dir.display());
    }
    tracing::info!(num_docs = docs.len(), dir = %dir.display(), "loaded corpus");
    Ok(Corpus::from_documents(docs))
}
