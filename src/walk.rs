//! Source file discovery
//!
//! Walks a project root with the `ignore` crate and returns the absolute
//! paths of files to extract, sorted for deterministic output. Applies the
//! scan configuration's ignore entries (exact names or globs, checked against
//! every path component), the extension allow-list, and always drops test,
//! spec and `.d.ts` declaration files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;

use crate::config::ScanConfig;

/// Compiled ignore entries
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    names: HashSet<String>,
    globs: Vec<Pattern>,
}

impl IgnoreMatcher {
    pub fn new(entries: &[String]) -> Self {
        let mut matcher = Self::default();
        for entry in entries {
            let is_glob = entry.contains(['*', '?', '[']);
            if is_glob {
                match Pattern::new(entry) {
                    Ok(pattern) => {
                        matcher.globs.push(pattern);
                        continue;
                    }
                    Err(e) => {
                        tracing::warn!("Invalid ignore pattern {:?}: {}", entry, e);
                    }
                }
            }
            matcher.names.insert(entry.clone());
        }
        matcher
    }

    /// True when a file or directory named `name` should be skipped
    pub fn is_ignored(&self, name: &str) -> bool {
        self.names.contains(name) || self.globs.iter().any(|g| g.matches(name))
    }
}

/// Test and spec files by naming convention
///
/// Matches `*.test.*`, `*.spec.*` and anything under `__tests__/`.
pub fn is_test_file(path: &Path) -> bool {
    let in_tests_dir = path
        .components()
        .any(|c| c.as_os_str() == "__tests__");
    if in_tests_dir {
        return true;
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_lowercase();
    file_name.contains(".test.") || file_name.contains(".spec.")
}

/// TypeScript declaration files carry no runtime exports
pub fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.to_lowercase().ends_with(".d.ts"))
}

/// Collect the files under `root` that should be extracted
pub fn collect_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let matcher = IgnoreMatcher::new(&config.ignore);

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .require_git(false)
        .follow_links(false)
        // Files inside a directory at depth N sit at walk depth N + 1
        .max_depth(Some(config.max_depth.saturating_add(1)))
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            entry.depth() == 0
                || !matcher.is_ignored(&entry.file_name().to_string_lossy())
        });

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Walk error under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let allowed = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| config.allows_extension(ext))
            .unwrap_or(false);
        if !allowed || is_test_file(path) || is_declaration_file(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    tracing::debug!("Collected {} files under {}", files.len(), root.display());
    files
}
