//! Project-type detection
//!
//! Classifies a project root into a [`ProjectType`] from its `package.json`
//! dependencies and framework marker files. Detection never fails: a missing
//! or malformed manifest is treated as "no manifest".

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::schema::ProjectType;

/// Next.js config file variants, any one marks a Next.js project
const NEXT_CONFIG_FILES: [&str; 4] = [
    "next.config.js",
    "next.config.mjs",
    "next.config.cjs",
    "next.config.ts",
];

/// Server frameworks grouped under the Express-like strategy
const SERVER_FRAMEWORKS: [&str; 4] = ["express", "fastify", "koa", "hono"];

/// The parts of `package.json` detection cares about
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "dependency_table")]
    pub dependencies: HashMap<String, Value>,
    #[serde(default, deserialize_with = "dependency_table")]
    pub dev_dependencies: HashMap<String, Value>,
}

/// A dependency table that is null or not an object reads as empty
fn dependency_table<'de, D>(deserializer: D) -> Result<HashMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map.into_iter().collect(),
        _ => HashMap::new(),
    })
}

impl Manifest {
    /// Read `<root>/package.json`
    ///
    /// Returns `None` when the file is missing, unreadable or not a JSON
    /// object.
    pub fn read(root: &Path) -> Option<Self> {
        let path = root.join("package.json");
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("No manifest at {}: {}", path.display(), e);
                return None;
            }
        };
        Self::parse(&content).or_else(|| {
            tracing::debug!("Ignoring malformed manifest at {}", path.display());
            None
        })
    }

    /// Parse manifest text, `None` on malformed JSON or a non-object root
    ///
    /// Fields other than the dependency tables are never inspected, so a
    /// manifest with an odd `name` or `version` still classifies.
    pub fn parse(content: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(content).ok()? {
            root @ Value::Object(_) => Self::deserialize(root).ok(),
            _ => None,
        }
    }

    /// True when `package` is a regular or development dependency
    pub fn has_dependency(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    fn has_any(&self, packages: &[&str]) -> bool {
        packages.iter().any(|p| self.has_dependency(p))
    }
}

/// Detect the project type of `root`
///
/// Rules are evaluated in priority order and the first match wins:
/// Next.js (config file or `next` dependency), NestJS, SvelteKit, Vue/Nuxt,
/// Express-family servers, React, any other manifest (`node`), and finally
/// `vanilla` when there is no usable manifest.
pub fn detect_project(root: &Path) -> ProjectType {
    let manifest = Manifest::read(root);
    let has_next_config = NEXT_CONFIG_FILES
        .iter()
        .any(|config| root.join(config).is_file());

    let project_type = classify_manifest(manifest.as_ref(), has_next_config);
    tracing::debug!(
        "Detected project type {} for {}",
        project_type,
        root.display()
    );
    project_type
}

/// Apply the detection rules to an already-read manifest
pub fn classify_manifest(manifest: Option<&Manifest>, has_next_config: bool) -> ProjectType {
    let Some(pkg) = manifest else {
        return if has_next_config {
            ProjectType::Nextjs
        } else {
            ProjectType::Vanilla
        };
    };

    if has_next_config || pkg.has_dependency("next") {
        ProjectType::Nextjs
    } else if pkg.has_dependency("@nestjs/core") {
        ProjectType::Nestjs
    } else if pkg.has_dependency("@sveltejs/kit") {
        ProjectType::Sveltekit
    } else if pkg.has_any(&["vue", "nuxt"]) {
        ProjectType::Vue
    } else if pkg.has_any(&SERVER_FRAMEWORKS) {
        ProjectType::Express
    } else if pkg.has_dependency("react") {
        ProjectType::React
    } else {
        ProjectType::Node
    }
}
