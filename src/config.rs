//! Scan configuration
//!
//! The walker and pipeline take an explicit [`ScanConfig`] value; there is no
//! process-wide state. Configuration is resolved in this order:
//!
//! 1. `--config <FILE>` (errors if missing or malformed)
//! 2. `<project>/.exportmap.toml`
//! 3. `$XDG_CONFIG_HOME/export-map/config.toml` (platform config dir)
//! 4. Built-in defaults
//!
//! Command-line flags are layered on top with [`ScanConfig::apply`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExportMapError, Result};

/// Per-project config file name
pub const PROJECT_CONFIG_FILE: &str = ".exportmap.toml";

/// Default source extensions
const DEFAULT_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".js", ".jsx"];

/// Default ignore entries: exact names or glob patterns
const DEFAULT_IGNORE: [&str; 11] = [
    "node_modules",
    ".git",
    ".directory",
    "dist",
    "build",
    ".next",
    "*.test.*",
    "*.spec.*",
    "__tests__",
    "*.d.ts",
    ".DS_Store",
];

/// Settings for a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Allowed file extensions, stored with a leading dot and lowercased
    pub extensions: Vec<String>,
    /// Names or glob patterns skipped anywhere in the tree
    pub ignore: Vec<String>,
    /// Maximum directory depth below the root
    pub max_depth: usize,
    /// Honor `.gitignore` files while walking
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore: DEFAULT_IGNORE.iter().map(|e| e.to_string()).collect(),
            max_depth: 10,
            respect_gitignore: true,
        }
    }
}

/// Command-line adjustments applied after loading
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces the extension list when non-empty
    pub extensions: Vec<String>,
    /// Appended to the ignore list
    pub ignore: Vec<String>,
    pub max_depth: Option<usize>,
    pub no_gitignore: bool,
}

impl ScanConfig {
    /// Resolve configuration for a project rooted at `root`
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ExportMapError::ConfigError {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            return Self::load_from(path);
        }

        for candidate in implicit_config_paths(root) {
            if !candidate.is_file() {
                continue;
            }
            match Self::load_from(&candidate) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", candidate.display());
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", candidate.display(), e);
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ExportMapError::ConfigError {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| ExportMapError::ConfigError {
            message: format!("failed to parse config: {}", e),
        })?;
        config.extensions = normalize_extensions(&config.extensions);
        Ok(config)
    }

    /// Layer command-line overrides on top of loaded settings
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if !overrides.extensions.is_empty() {
            self.extensions = normalize_extensions(&overrides.extensions);
        }
        for pattern in &overrides.ignore {
            if !self.ignore.contains(pattern) {
                self.ignore.push(pattern.clone());
            }
        }
        if let Some(depth) = overrides.max_depth {
            self.max_depth = depth;
        }
        if overrides.no_gitignore {
            self.respect_gitignore = false;
        }
    }

    /// True when `ext` (with or without leading dot) is allowed
    pub fn allows_extension(&self, ext: &str) -> bool {
        let wanted = normalize_extension(ext);
        self.extensions.iter().any(|e| *e == wanted)
    }
}

fn implicit_config_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths = vec![root.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("export-map").join("config.toml"));
    }
    paths
}

fn normalize_extensions(exts: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(exts.len());
    for ext in exts {
        let ext = normalize_extension(ext);
        if ext.len() > 1 && !out.contains(&ext) {
            out.push(ext);
        }
    }
    out
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
