//! Section classification
//!
//! Groups file records into named sections using folder-name tables chosen
//! by project type. One [`Strategy`] covers every project type:
//!
//! | Strategy      | Project types                          | Routes |
//! |---------------|----------------------------------------|--------|
//! | `NextLike`    | nextjs                                 | yes    |
//! | `ExpressLike` | express, nestjs                        | no     |
//! | `Vanilla`     | react, vue, sveltekit, node, vanilla   | no     |
//!
//! Every file lands in exactly one section, and files keep their input order
//! within a section.

use std::path::Path;

use crate::routes::synthesize_routes;
use crate::schema::{ClassificationContext, FileRecord, ProjectType, Sections};

/// Section name for files directly under the scan root
pub const ROOT_SECTION: &str = "_root";

/// Ordered Next.js folder table, first matching section wins
const NEXT_SECTIONS: &[(&str, &[&str])] = &[
    ("Features", &["features", "modules", "domains"]),
    ("Components", &["components"]),
    ("Hooks", &["hooks"]),
    ("Lib", &["lib", "utils", "helpers", "services"]),
    ("API", &["api"]),
];

/// Ordered Express-family folder table, matched case-insensitively
const EXPRESS_SECTIONS: &[(&str, &[&str])] = &[
    ("Routes", &["routes", "routers", "api"]),
    ("Controllers", &["controllers", "handlers"]),
    ("Services", &["services"]),
    ("Models", &["models", "entities", "schemas"]),
    ("Middleware", &["middleware", "middlewares"]),
    ("Utils", &["utils", "helpers", "lib"]),
    ("Config", &["config", "configs"]),
];

/// Classification strategy, selected once from the detected project type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    NextLike,
    ExpressLike,
    Vanilla,
}

impl Strategy {
    pub fn for_project(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::Nextjs => Self::NextLike,
            ProjectType::Express | ProjectType::Nestjs => Self::ExpressLike,
            ProjectType::React
            | ProjectType::Vue
            | ProjectType::Sveltekit
            | ProjectType::Node
            | ProjectType::Vanilla => Self::Vanilla,
        }
    }

    /// Whether this strategy attaches a synthesized route tree
    pub fn wants_routes(&self) -> bool {
        matches!(self, Self::NextLike)
    }

    /// Section key for a file given its path components relative to the root
    pub fn section_for(&self, parts: &[String]) -> String {
        match self {
            Self::NextLike => next_section(parts),
            Self::ExpressLike => express_section(parts),
            Self::Vanilla => top_level_folder(parts).to_string(),
        }
    }
}

/// Classify `files` for a project of `project_type` rooted at `root`
///
/// Empty input produces an empty section map. Files that are not under
/// `root` (including when `root` cannot be resolved at all) fall back to the
/// vanilla grouping and land in [`ROOT_SECTION`].
pub fn classify(
    root: &Path,
    files: Vec<FileRecord>,
    project_type: ProjectType,
) -> ClassificationContext {
    let strategy = Strategy::for_project(project_type);
    let mut sections = Sections::new();

    for file in files {
        let key = match file.relative_parts(root) {
            Some(parts) => strategy.section_for(&parts),
            None => {
                tracing::debug!(
                    "{} is outside {}, grouping under {}",
                    file.path.display(),
                    root.display(),
                    ROOT_SECTION
                );
                ROOT_SECTION.to_string()
            }
        };
        sections.push(&key, file);
    }

    let routes = strategy.wants_routes().then(|| synthesize_routes(root));

    ClassificationContext {
        project_type,
        sections,
        routes,
    }
}

/// `Section/subfolder` when a folder sits beneath the match, else `Section`;
/// unmatched files go to `Other/<top-level>`
fn next_section(parts: &[String]) -> String {
    let folders = ancestors(parts);
    for (section, names) in NEXT_SECTIONS {
        if let Some(index) = folders.iter().position(|p| names.contains(&p.as_str())) {
            let beneath = &parts[index + 1..];
            return if beneath.len() > 1 {
                format!("{}/{}", section, beneath[0])
            } else {
                section.to_string()
            };
        }
    }
    format!("Other/{}", top_level_folder(parts))
}

/// Any path segment, case-insensitive; unmatched files go to their top-level folder
fn express_section(parts: &[String]) -> String {
    let lowered: Vec<String> = parts.iter().map(|p| p.to_lowercase()).collect();
    EXPRESS_SECTIONS
        .iter()
        .find(|(_, names)| lowered.iter().any(|p| names.contains(&p.as_str())))
        .map(|(section, _)| section.to_string())
        .unwrap_or_else(|| top_level_folder(parts).to_string())
}

/// Folder components only (the file name is dropped)
fn ancestors(parts: &[String]) -> &[String] {
    match parts.split_last() {
        Some((_, folders)) => folders,
        None => parts,
    }
}

fn top_level_folder(parts: &[String]) -> &str {
    if parts.len() > 1 {
        &parts[0]
    } else {
        ROOT_SECTION
    }
}
