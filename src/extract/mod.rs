//! Export extraction
//!
//! Turns raw JavaScript/TypeScript source text into an [`Exports`] record
//! without building an AST. Matching lives behind the [`SymbolMatcher`] trait;
//! the shipped implementation is [`RegexMatcher`], which recognizes ES module
//! exports, CommonJS exports and `mongoose.model(...)` registrations.
//!
//! Extraction never fails. Text that matches nothing yields an empty record.

mod commonjs;
mod esm;
mod mask;

use std::fs;
use std::path::Path;

use crate::schema::{Exports, FileRecord};

/// Pluggable export matcher
///
/// Implementations must be pure: the same source text always produces the
/// same [`Exports`].
pub trait SymbolMatcher: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Extract exported symbols from source text
    fn match_exports(&self, source: &str) -> Exports;
}

/// Pattern-based matcher for ES module and CommonJS exports
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexMatcher;

impl RegexMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolMatcher for RegexMatcher {
    fn name(&self) -> &str {
        "regex"
    }

    fn match_exports(&self, source: &str) -> Exports {
        let text = mask::mask_comments(source);

        let mut hits = Vec::new();
        esm::collect(&text, &mut hits);
        commonjs::collect(&text, &mut hits);

        // Single left-to-right order regardless of which pattern found the hit
        hits.sort_by_key(|h| h.offset);

        let mut collector = Collector::default();
        for hit in hits {
            collector.add(hit);
        }
        collector.finish()
    }
}

/// Extract exports from source text with the default matcher
pub fn extract_exports(source: &str) -> Exports {
    RegexMatcher.match_exports(source)
}

/// Read `path` and extract its exports
///
/// Returns `None` when the file cannot be read as UTF-8 text. The caller
/// treats that as a skipped file, not an error.
pub fn extract_file(matcher: &dyn SymbolMatcher, path: &Path) -> Option<FileRecord> {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", path.display(), e);
            return None;
        }
    };

    if source.contains('\0') {
        tracing::debug!("Skipping {}: binary content", path.display());
        return None;
    }

    Some(FileRecord::new(path, matcher.match_exports(&source)))
}

// ============================================================================
// Hits and collection
// ============================================================================

/// What a single pattern match contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HitKind {
    Function,
    Constant,
    Type,
    Interface,
    Class,
    /// ES module default export
    Default,
    /// `module.exports = name`, used only when no ES default exists
    CommonJsDefault,
}

#[derive(Debug, Clone)]
pub(crate) struct Hit {
    pub offset: usize,
    pub kind: HitKind,
    pub name: String,
}

impl Hit {
    pub fn new(offset: usize, kind: HitKind, name: &str) -> Self {
        Self {
            offset,
            kind,
            name: name.to_string(),
        }
    }
}

/// Builds an [`Exports`] from hits in source order
#[derive(Default)]
struct Collector {
    exports: Exports,
    commonjs_default: Option<String>,
}

impl Collector {
    fn add(&mut self, hit: Hit) {
        let e = &mut self.exports;
        match hit.kind {
            HitKind::Function => {
                if !e.constants.contains(&hit.name) {
                    push_unique(&mut e.functions, hit.name);
                }
            }
            HitKind::Constant => {
                if !e.functions.contains(&hit.name) {
                    push_unique(&mut e.constants, hit.name);
                }
            }
            HitKind::Type => push_unique(&mut e.types, hit.name),
            HitKind::Interface => push_unique(&mut e.interfaces, hit.name),
            HitKind::Class => push_unique(&mut e.classes, hit.name),
            HitKind::Default => {
                if e.default_export.is_none() {
                    e.default_export = Some(hit.name);
                }
            }
            HitKind::CommonJsDefault => {
                if self.commonjs_default.is_none() {
                    self.commonjs_default = Some(hit.name);
                }
            }
        }
    }

    fn finish(mut self) -> Exports {
        if self.exports.default_export.is_none() {
            self.exports.default_export = self.commonjs_default;
        }
        self.exports
    }
}

fn push_unique(list: &mut Vec<String>, name: String) {
    if !list.contains(&name) {
        list.push(name);
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// True when `name` is a plain identifier
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Literals and keywords that can follow `export default` but are not names
pub(crate) fn is_reserved(name: &str) -> bool {
    matches!(
        name,
        "null"
            | "undefined"
            | "true"
            | "false"
            | "this"
            | "function"
            | "class"
            | "async"
            | "new"
            | "await"
            | "typeof"
            | "void"
    )
}
