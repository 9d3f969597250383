//! Scan pipeline: walk → extract → detect → classify
//!
//! Extraction fans out over the walked files with rayon and joins before
//! classification. `par_iter().filter_map().collect()` keeps walker order, so
//! output is deterministic regardless of scheduling.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::classify::classify;
use crate::config::ScanConfig;
use crate::detect::detect_project;
use crate::error::{ExportMapError, Result};
use crate::extract::{extract_file, SymbolMatcher};
use crate::schema::{ClassificationContext, FileRecord};
use crate::walk::collect_files;

/// Validate and canonicalize a scan root
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(ExportMapError::PathNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(ExportMapError::NotADirectory {
            path: path.display().to_string(),
        });
    }
    Ok(path.canonicalize()?)
}

/// Walk `root` and extract every file in parallel
///
/// `root` must already be resolved. Fails with `NoFilesFound` when the walk
/// yields nothing; files that cannot be read are dropped silently.
pub fn extract_records(
    root: &Path,
    config: &ScanConfig,
    matcher: &dyn SymbolMatcher,
) -> Result<Vec<FileRecord>> {
    let files = collect_files(root, config);
    if files.is_empty() {
        return Err(ExportMapError::NoFilesFound {
            path: root.display().to_string(),
        });
    }
    tracing::info!("Extracting exports from {} files", files.len());

    let records: Vec<FileRecord> = files
        .par_iter()
        .filter_map(|path| extract_file(matcher, path))
        .collect();

    let skipped = files.len() - records.len();
    if skipped > 0 {
        tracing::debug!("Skipped {} unreadable files", skipped);
    }
    Ok(records)
}

/// Run the full pipeline on an already-extracted record list
pub fn classify_records(root: &Path, records: Vec<FileRecord>) -> ClassificationContext {
    let project_type = detect_project(root);
    tracing::info!("Project type: {}", project_type.label());

    let ctx = classify(root, records, project_type);
    tracing::info!(
        "Classified {} files into {} sections",
        ctx.sections.file_count(),
        ctx.sections.len()
    );
    ctx
}

/// Scan `path` end to end and return the classification context
pub fn scan(
    path: &Path,
    config: &ScanConfig,
    matcher: &dyn SymbolMatcher,
) -> Result<ClassificationContext> {
    let root = resolve_root(path)?;
    tracing::info!("Scanning {} with {} matcher", root.display(), matcher.name());
    let records = extract_records(&root, config, matcher)?;
    Ok(classify_records(&root, records))
}
