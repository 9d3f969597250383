//! export-map: export summaries for JavaScript/TypeScript projects
//!
//! Scans a project directory, extracts the exported symbols of every source
//! file with a lightweight pattern matcher (no parser), groups the files into
//! sections using project-type heuristics, and renders a compact report.
//!
//! # Pipeline
//!
//! 1. [`walk`] collects source files under the root
//! 2. [`extract`] pulls exports out of each file, in parallel
//! 3. [`detect`] decides the project type from `package.json`
//! 4. [`classify`] buckets files into sections and attaches routes
//! 5. [`render`] turns the result into text
//!
//! # Example
//!
//! ```ignore
//! use export_map::{render, scan, OutputFormat, RegexMatcher, ScanConfig};
//! use std::path::Path;
//!
//! let root = Path::new("./my-app");
//! let ctx = scan(root, &ScanConfig::default(), &RegexMatcher)?;
//! println!("{}", render(&ctx, OutputFormat::Ai, root)?);
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod routes;
pub mod schema;
pub mod walk;

pub use classify::{classify, Strategy};
pub use cli::{Cli, OutputFormat};
pub use config::{ConfigOverrides, ScanConfig};
pub use detect::{detect_project, Manifest};
pub use error::{ExportMapError, Result};
pub use extract::{extract_exports, extract_file, RegexMatcher, SymbolMatcher};
pub use pipeline::scan;
pub use render::render;
pub use routes::{synthesize_routes, RouteTree};
pub use schema::{ClassificationContext, Exports, FileRecord, ProjectType, Sections};
pub use walk::collect_files;
