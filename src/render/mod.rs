//! Report renderers
//!
//! Every renderer is a pure function of the [`ClassificationContext`]; the
//! scan root is only consulted by the tree format to label the top node and
//! compute relative paths.

mod ai;
mod human;
mod markdown;
mod raw;
mod route_groups;
mod tree;

use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::{ExportMapError, Result};
use crate::schema::{ClassificationContext, ContextExport};

/// Render `ctx` in the requested format
pub fn render(ctx: &ClassificationContext, format: OutputFormat, root: &Path) -> Result<String> {
    let output = match format {
        OutputFormat::Ai => ai::render(ctx),
        OutputFormat::Human => human::render(ctx),
        OutputFormat::Raw => raw::render(ctx),
        OutputFormat::Markdown => markdown::render(ctx),
        OutputFormat::Tree => tree::render(ctx, root),
        OutputFormat::Json => to_json(ctx)?,
        OutputFormat::Toon => to_toon(ctx)?,
    };
    Ok(output)
}

/// `{ projectType, routes, sections }`, pretty-printed
pub fn to_json(ctx: &ClassificationContext) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&ContextExport::from(ctx)).map_err(|e| {
        ExportMapError::Serialization {
            message: format!("JSON serialization failed: {}", e),
        }
    })?;
    json.push('\n');
    Ok(json)
}

/// The JSON structure, TOON-encoded
pub fn to_toon(ctx: &ClassificationContext) -> Result<String> {
    let value = serde_json::to_value(ContextExport::from(ctx)).map_err(|e| {
        ExportMapError::Serialization {
            message: format!("JSON serialization failed: {}", e),
        }
    })?;
    let mut toon = rtoon::encode_default(&value).map_err(|e| ExportMapError::Serialization {
        message: format!("TOON encoding failed: {}", e),
    })?;
    if !toon.ends_with('\n') {
        toon.push('\n');
    }
    Ok(toon)
}

/// `Features/Billing` → `billing`
pub(crate) fn domain_name(section: &str) -> String {
    section.to_lowercase().replacen("features/", "", 1)
}

/// `Hooks` and `Hooks/<sub>`, any case
pub(crate) fn is_hook_section(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == "hooks" || lower.starts_with("hooks/")
}
