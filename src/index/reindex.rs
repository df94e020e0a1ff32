use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::info;

use super::documents::{IndexedDocument, SearchableDocument};
use crate::utils::ReindexProgress;

/// Summary of a reindex run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReindexStats {
    /// Documents processed
    pub documents: usize,
    /// Documents whose stored keywords differed from the regenerated ones
    pub changed: usize,
    /// Total keywords across all documents after regeneration
    pub keywords: usize,
}

/// Regenerate the keyword array of every document, replacing whatever was
/// stored before. Document order is preserved.
pub fn reindex_documents<D: SearchableDocument>(
    mut documents: Vec<IndexedDocument<D>>,
    parallel: bool,
    progress: &ReindexProgress,
) -> (Vec<IndexedDocument<D>>, ReindexStats) {
    let start = Instant::now();
    let changed = AtomicUsize::new(0);

    let refresh = |doc: &mut IndexedDocument<D>| {
        if doc.refresh() {
            changed.fetch_add(1, Ordering::Relaxed);
        }
        progress.inc();
    };

    if parallel {
        documents.par_iter_mut().for_each(refresh);
    } else {
        documents.iter_mut().for_each(refresh);
    }

    let stats = ReindexStats {
        documents: documents.len(),
        changed: changed.into_inner(),
        keywords: documents.iter().map(|d| d.search_keywords().len()).sum(),
    };

    progress.finish(format!("{} documents, {} changed", stats.documents, stats.changed));
    info!(
        documents = stats.documents,
        changed = stats.changed,
        keywords = stats.keywords,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "reindex complete"
    );

    (documents, stats)
}

/// Read a JSON array of documents. Missing `searchKeywords` are treated as
/// empty.
pub fn read_documents<D: SearchableDocument>(path: &Path) -> Result<Vec<IndexedDocument<D>>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let documents = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse documents in {}", path.display()))?;
    Ok(documents)
}

/// Write documents as a pretty-printed JSON array
pub fn write_documents<D: SearchableDocument, W: Write>(
    mut writer: W,
    documents: &[IndexedDocument<D>],
) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, documents).context("Failed to serialize documents")?;
    writeln!(writer)?;
    Ok(())
}
