//! Plain-text blocks, one per top-level category
//!
//! `Features/billing` and `Features/orders` become one `=== FEATURES ===`
//! block with `billing/` and `orders/` groups. Files without exports are
//! left out.

use crate::schema::{ClassificationContext, FileRecord, Section};

pub fn render(ctx: &ClassificationContext) -> String {
    let mut out = String::new();

    let routes = ctx.route_lines();
    if !routes.is_empty() {
        out.push_str("=== ROUTES ===\n\n");
        for line in &routes {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    for (category, sections) in categories(ctx.sections.iter()) {
        out.push_str(&format!("=== {} ===\n\n", category_title(&category)));
        for section in sections {
            match section.name.split_once('/') {
                Some((_, sub)) => {
                    out.push_str(&format!("{}/\n", sub));
                    for file in &section.files {
                        push_file(&mut out, file);
                    }
                }
                None => {
                    for file in &section.files {
                        push_file(&mut out, file);
                    }
                }
            }
            out.push('\n');
        }
    }

    out.push_str("=== DONE ===\n");
    out
}

/// Group sections by the part of their name before the first `/`,
/// keeping first-seen order
fn categories<'a>(sections: impl Iterator<Item = &'a Section>) -> Vec<(String, Vec<&'a Section>)> {
    let mut grouped: Vec<(String, Vec<&'a Section>)> = Vec::new();
    for section in sections {
        let category = section
            .name
            .split_once('/')
            .map_or(section.name.as_str(), |(head, _)| head);
        match grouped.iter_mut().find(|(c, _)| c == category) {
            Some((_, list)) => list.push(section),
            None => grouped.push((category.to_string(), vec![section])),
        }
    }
    grouped
}

fn category_title(category: &str) -> String {
    match category.trim_start_matches('_') {
        "" => "ROOT".to_string(),
        name => name.to_uppercase(),
    }
}

fn push_file(out: &mut String, file: &FileRecord) {
    if file.exports.is_empty() {
        return;
    }
    out.push_str(&file.name);
    out.push('\n');
    for (kind, name) in file.exports.iter_kinds() {
        out.push_str(&format!("• {}: {}\n", kind, name));
    }
    if let Some(default) = &file.exports.default_export {
        out.push_str(&format!("• default: {}\n", default));
    }
}
