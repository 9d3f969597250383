//! Annotated tree for people
//!
//! Box-drawn blocks for routes, feature domains and infrastructure, with an
//! icon per route group and domain.

use super::domain_name;
use super::route_groups::{route_groups, DynamicChildren, RouteGroup};
use crate::schema::ClassificationContext;

/// Children listed per route group before eliding the rest
const MAX_CHILDREN: usize = 5;

/// Route groups containing these names come first, in this order
const GROUP_ORDER: [&str; 3] = ["client", "admin", "api"];

/// Section-name fragments and the infrastructure label they produce
const INFRASTRUCTURE: &[(&[&str], &str)] = &[
    (&["auth"], "auth / session"),
    (&["lib", "utils", "helpers"], "shared utils"),
    (&["services"], "services"),
    (&["models"], "data models"),
    (&["middleware"], "middleware"),
    (&["config"], "config"),
    (&["hooks"], "hooks"),
    (&["components"], "ui components"),
];

pub fn render(ctx: &ClassificationContext) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("📁 Project: {} App", ctx.project_type.label()));
    lines.push(format!(
        "   {} files in {} sections",
        ctx.sections.file_count(),
        ctx.sections.len()
    ));
    lines.push(String::new());

    if let Some(tree) = ctx.routes.as_ref().filter(|t| !t.is_empty()) {
        let groups = order_groups(route_groups(tree, DynamicChildren::Keep));
        if !groups.is_empty() {
            lines.push(block_header("Routes"));
            lines.push("│".to_string());
            for (i, group) in groups.iter().enumerate() {
                let last = i + 1 == groups.len();
                let (prefix, indent) = branch(last);
                lines.push(format!(
                    "{} {} {}",
                    prefix,
                    route_icon(&group.key),
                    capitalize(group.base())
                ));

                let children = consolidate(&group.children);
                for child in children.iter().take(MAX_CHILDREN) {
                    lines.push(format!("{}/{}", indent, child));
                }
                if children.len() > MAX_CHILDREN {
                    lines.push(format!(
                        "{}({} more {} pages)",
                        indent,
                        children.len() - MAX_CHILDREN,
                        group.base()
                    ));
                }
            }
            lines.push(String::new());
        }
    }

    let features = ctx.sections.matching("features");
    if !features.is_empty() {
        lines.push(block_header("Domains"));
        lines.push("│".to_string());
        for (i, section) in features.iter().enumerate() {
            let name = domain_name(&section.name);
            let (prefix, _) = branch(i + 1 == features.len());
            lines.push(format!("{} {} features/{}", prefix, domain_icon(&name), name));
        }
        lines.push(String::new());
    }

    let infrastructure: Vec<&str> = INFRASTRUCTURE
        .iter()
        .filter(|(fragments, _)| {
            fragments
                .iter()
                .any(|f| !ctx.sections.matching(f).is_empty())
        })
        .map(|(_, label)| *label)
        .collect();
    if !infrastructure.is_empty() {
        lines.push(block_header("Infrastructure"));
        lines.push("│".to_string());
        for (i, label) in infrastructure.iter().enumerate() {
            let (prefix, _) = branch(i + 1 == infrastructure.len());
            lines.push(format!("{} {}", prefix, label));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn block_header(title: &str) -> String {
    let rule = "─".repeat(32usize.saturating_sub(title.len()));
    format!("┌─ {} {}", title, rule)
}

fn branch(last: bool) -> (&'static str, &'static str) {
    if last {
        ("└──", "    ")
    } else {
        ("├──", "│   ")
    }
}

/// client, admin, api first, everything else after in input order
fn order_groups(groups: Vec<RouteGroup>) -> Vec<RouteGroup> {
    let mut ordered: Vec<RouteGroup> = Vec::with_capacity(groups.len());
    let mut rest = groups;
    for name in GROUP_ORDER {
        let (matched, remaining): (Vec<_>, Vec<_>) = rest
            .into_iter()
            .partition(|g| g.key.to_lowercase().contains(name));
        ordered.extend(matched);
        rest = remaining;
    }
    ordered.extend(rest);
    ordered
}

/// Drop `[param]` children and mark the pages that have one as `(list, detail)`
fn consolidate(children: &[String]) -> Vec<String> {
    let dynamic: Vec<String> = children
        .iter()
        .filter(|c| c.starts_with('['))
        .map(|c| c.to_lowercase())
        .collect();

    let mut seen = Vec::new();
    let mut out = Vec::new();
    for child in children {
        if child.starts_with('[') && child.ends_with(']') {
            continue;
        }
        let lower = child.to_lowercase();
        if seen.contains(&lower) {
            continue;
        }

        // `orders` pairs with `[orderId]`: compare without the plural `s`
        let mut stem = lower.clone();
        stem.pop();
        let has_detail = !stem.is_empty() && dynamic.iter().any(|d| d.contains(&stem));

        out.push(if has_detail {
            format!("{} (list, detail)", child)
        } else {
            child.clone()
        });
        seen.push(lower);
    }
    out
}

fn route_icon(group: &str) -> &'static str {
    let lower = group.to_lowercase();
    if lower.contains("client") || lower.contains("user") {
        "👤"
    } else if lower.contains("admin") {
        "🛠️"
    } else if lower.contains("api") {
        "🔌"
    } else if lower.contains("auth") || lower.contains("login") {
        "🔐"
    } else {
        "📄"
    }
}

fn domain_icon(name: &str) -> &'static str {
    const ICONS: [(&str, &str); 6] = [
        ("order", "📦"),
        ("estimate", "📋"),
        ("file", "📁"),
        ("user", "👤"),
        ("auth", "🔐"),
        ("payment", "💳"),
    ];
    ICONS
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, icon)| *icon)
        .unwrap_or("📂")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
