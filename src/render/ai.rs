//! Compact digest for AI assistants
//!
//! Summarizes instead of listing: routes capped per group, feature domains
//! reduced to an intent phrase and an action count, hooks by name, and the
//! component layer by size.

use std::collections::HashSet;

use super::route_groups::{route_groups, DynamicChildren};
use super::{domain_name, is_hook_section};
use crate::schema::{ClassificationContext, FileRecord, Section};

/// Route examples shown per group
const MAX_ROUTE_EXAMPLES: usize = 4;

pub fn render(ctx: &ClassificationContext) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Project Context ({})", ctx.project_type.label()));
    lines.push(String::new());

    if let Some(tree) = ctx.routes.as_ref().filter(|t| !t.is_empty()) {
        let groups = route_groups(tree, DynamicChildren::Skip);
        lines.push(format!("## Routes ({})", groups.len()));
        for group in &groups {
            let shown: Vec<&str> = group
                .children
                .iter()
                .take(MAX_ROUTE_EXAMPLES)
                .map(String::as_str)
                .collect();
            lines.push(format!("/{} → {}", group.key, shown.join(", ")));
        }
        lines.push(String::new());
    }

    let features = ctx.sections.matching("features");
    if !features.is_empty() {
        lines.push(format!("## Core Domains ({})", features.len()));
        for section in features {
            lines.push(domain_line(section));
        }
        lines.push(String::new());
    }

    if !ctx.sections.matching("auth").is_empty() {
        lines.push("## Auth & Session".to_string());
        lines.push("sign-in, session handling, token management".to_string());
        lines.push(String::new());
    }

    if !ctx.sections.matching("lib").is_empty() {
        lines.push("## Shared Lib".to_string());
        lines.push("utils — formatting, helpers".to_string());
        if !ctx.sections.matching("config").is_empty() {
            lines.push("config — api, uploads, pricing".to_string());
        }
        lines.push(String::new());
    }

    let hook_sections: Vec<&Section> = ctx
        .sections
        .iter()
        .filter(|s| is_hook_section(&s.name))
        .collect();
    if !hook_sections.is_empty() {
        let hooks: Vec<&str> = hook_sections
            .iter()
            .flat_map(|s| s.files.iter())
            .flat_map(|f| f.exports.functions.iter())
            .map(String::as_str)
            .filter(|name| name.starts_with("use"))
            .collect();
        lines.push(format!("## Hooks ({})", hooks.len()));
        lines.push(hooks.join(", "));
        lines.push(String::new());
    }

    let components = ctx.sections.matching("components");
    if !components.is_empty() {
        let total: usize = components.iter().map(|s| s.files.len()).sum();
        let mut seen = HashSet::new();
        let folders: Vec<String> = components
            .iter()
            .filter_map(|s| s.name.rsplit('/').next())
            .map(str::to_lowercase)
            .filter(|f| seen.insert(f.clone()))
            .collect();
        lines.push("## UI Layer".to_string());
        lines.push(format!("~{} components ({})", total, folders.join(", ")));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `billing — create/edit (3 actions)`
fn domain_line(section: &Section) -> String {
    let name = domain_name(&section.name);
    let actions: usize = section
        .files
        .iter()
        .filter(|f| f.name.contains("action"))
        .map(|f| f.exports.functions.len())
        .sum();
    format!("{} — {} ({} actions)", name, intent(&name, &section.files), actions)
}

/// Guess what a domain is for from its name, then from its function names
fn intent(domain: &str, files: &[FileRecord]) -> String {
    match domain {
        "users" => return "authenticate, edit profile, manage credentials".to_string(),
        "orders" => return "create/edit/cancel".to_string(),
        "estimates" => return "create/edit/convert".to_string(),
        "files" => return "upload/download".to_string(),
        _ => {}
    }

    let functions = files
        .iter()
        .flat_map(|f| f.exports.functions.iter())
        .map(|n| n.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut intents = Vec::new();
    if functions.contains("create") {
        intents.push("create");
    }
    if functions.contains("edit") || functions.contains("update") {
        intents.push("edit");
    }
    if functions.contains("delete") || functions.contains("cancel") {
        intents.push("cancel");
    }

    if intents.is_empty() {
        "manage".to_string()
    } else {
        intents.join("/")
    }
}
