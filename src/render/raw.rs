//! Verbose dump: every section, every file, every symbol

use crate::schema::ClassificationContext;

pub fn render(ctx: &ClassificationContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} project ({})\n",
        ctx.project_type.label(),
        ctx.project_type
    ));

    let routes = ctx.route_lines();
    if !routes.is_empty() {
        out.push_str(&format!("\n## Routes ({})\n", routes.len()));
        for line in &routes {
            out.push_str(&format!("  {}\n", line));
        }
    }

    for section in &ctx.sections {
        out.push_str(&format!(
            "\n## {} ({} files)\n",
            section.name,
            section.files.len()
        ));
        for file in &section.files {
            out.push_str(&format!("{}\n", file.path.display()));
            if file.exports.is_empty() {
                out.push_str("  (no exports)\n");
                continue;
            }
            for (kind, name) in file.exports.iter_kinds() {
                out.push_str(&format!("  {}: {}\n", kind, name));
            }
            if let Some(default) = &file.exports.default_export {
                out.push_str(&format!("  default: {}\n", default));
            }
        }
    }

    out
}
