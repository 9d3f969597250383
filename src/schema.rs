//! Data model shared by the extractor, classifier and renderers
//!
//! Everything here is plain data. A [`ClassificationContext`] is built fresh
//! for every run and handed to the renderers by reference.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::routes::RouteTree;

// ============================================================================
// Exports
// ============================================================================

/// The exported symbols of one source file, bucketed by kind
///
/// Each list is ordered by first appearance in the source and holds no
/// duplicates. A name never appears in both `functions` and `constants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exports {
    pub functions: Vec<String>,
    pub constants: Vec<String>,
    pub types: Vec<String>,
    pub interfaces: Vec<String>,
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_export: Option<String>,
}

impl Exports {
    /// True when no symbol of any kind was found
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.constants.is_empty()
            && self.types.is_empty()
            && self.interfaces.is_empty()
            && self.classes.is_empty()
            && self.default_export.is_none()
    }

    /// Total number of named symbols, default export included
    pub fn symbol_count(&self) -> usize {
        self.functions.len()
            + self.constants.len()
            + self.types.len()
            + self.interfaces.len()
            + self.classes.len()
            + usize::from(self.default_export.is_some())
    }

    /// All symbols paired with their kind, in bucket order
    pub fn iter_kinds(&self) -> impl Iterator<Item = (SymbolKind, &str)> + '_ {
        [
            (SymbolKind::Function, &self.functions),
            (SymbolKind::Constant, &self.constants),
            (SymbolKind::Type, &self.types),
            (SymbolKind::Interface, &self.interfaces),
            (SymbolKind::Class, &self.classes),
        ]
        .into_iter()
        .flat_map(|(kind, names)| names.iter().map(move |n| (kind, n.as_str())))
    }
}

/// Kind of an exported symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Constant,
    Type,
    Interface,
    Class,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Constant => "constant",
            Self::Type => "type",
            Self::Interface => "interface",
            Self::Class => "class",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FileRecord
// ============================================================================

/// One scanned source file and its exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Absolute path, unique per run
    pub path: PathBuf,
    /// Base file name
    pub name: String,
    #[serde(flatten)]
    pub exports: Exports,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, exports: Exports) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            exports,
        }
    }

    /// Path components relative to `root`, or `None` when the file is not under it
    pub fn relative_parts(&self, root: &Path) -> Option<Vec<String>> {
        let rel = self.path.strip_prefix(root).ok()?;
        Some(
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect(),
        )
    }
}

// ============================================================================
// ProjectType
// ============================================================================

/// Framework category of the scanned project, decided once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Nextjs,
    React,
    Express,
    Nestjs,
    Vue,
    Sveltekit,
    Node,
    Vanilla,
}

impl ProjectType {
    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nextjs => "nextjs",
            Self::React => "react",
            Self::Express => "express",
            Self::Nestjs => "nestjs",
            Self::Vue => "vue",
            Self::Sveltekit => "sveltekit",
            Self::Node => "node",
            Self::Vanilla => "vanilla",
        }
    }

    /// Human-readable label used in report headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nextjs => "Next.js",
            Self::React => "React",
            Self::Express => "Express/Fastify",
            Self::Nestjs => "NestJS",
            Self::Vue => "Vue/Nuxt",
            Self::Sveltekit => "SvelteKit",
            Self::Node => "Node.js",
            Self::Vanilla => "JavaScript/TypeScript",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Sections
// ============================================================================

/// A named bucket of files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub files: Vec<FileRecord>,
}

/// Sections in first-insertion order with O(1) lookup by name
#[derive(Debug, Clone, Default)]
pub struct Sections {
    entries: Vec<Section>,
    index: HashMap<String, usize>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `file` to the section `name`, creating the section on first use
    pub fn push(&mut self, name: &str, file: FileRecord) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].files.push(file),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(Section {
                    name: name.to_string(),
                    files: vec![file],
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[FileRecord]> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].files.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of files across all sections
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|s| s.files.len()).sum()
    }

    /// Sections whose name contains `pattern`, case-insensitively
    pub fn matching(&self, pattern: &str) -> Vec<&Section> {
        let pattern = pattern.to_lowercase();
        self.entries
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&pattern))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for section in &self.entries {
            map.serialize_entry(&section.name, &section.files)?;
        }
        map.end()
    }
}

// ============================================================================
// ClassificationContext
// ============================================================================

/// Everything a renderer needs: project type, sections and optional routes
#[derive(Debug, Clone)]
pub struct ClassificationContext {
    pub project_type: ProjectType,
    pub sections: Sections,
    pub routes: Option<RouteTree>,
}

impl ClassificationContext {
    /// Routes flattened to their indented text form (empty when none)
    pub fn route_lines(&self) -> Vec<String> {
        self.routes
            .as_ref()
            .map(RouteTree::to_lines)
            .unwrap_or_default()
    }
}

/// Wire shape of the JSON section export
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextExport<'a> {
    pub project_type: ProjectType,
    pub routes: Vec<String>,
    pub sections: &'a Sections,
}

impl<'a> From<&'a ClassificationContext> for ContextExport<'a> {
    fn from(ctx: &'a ClassificationContext) -> Self {
        Self {
            project_type: ctx.project_type,
            routes: ctx.route_lines(),
            sections: &ctx.sections,
        }
    }
}
