//! Directory tree of the scanned files with their exports

use std::collections::BTreeMap;
use std::path::Path;

use crate::schema::{ClassificationContext, FileRecord};

#[derive(Default)]
struct Dir<'a> {
    dirs: BTreeMap<String, Dir<'a>>,
    files: BTreeMap<String, &'a FileRecord>,
}

impl<'a> Dir<'a> {
    fn insert(&mut self, parts: &[String], file: &'a FileRecord) {
        match parts {
            [] => {}
            [name] => {
                self.files.insert(name.clone(), file);
            }
            [dir, rest @ ..] => self.dirs.entry(dir.clone()).or_default().insert(rest, file),
        }
    }
}

pub fn render(ctx: &ClassificationContext, root: &Path) -> String {
    let mut tree = Dir::default();
    for section in &ctx.sections {
        for file in &section.files {
            let parts = file
                .relative_parts(root)
                .unwrap_or_else(|| vec![file.name.clone()]);
            tree.insert(&parts, file);
        }
    }

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    let mut lines = vec![format!("{}/", root_name)];
    render_dir(&tree, "", &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Folders first, then files, each alphabetical
fn render_dir(dir: &Dir<'_>, prefix: &str, lines: &mut Vec<String>) {
    let total = dir.dirs.len() + dir.files.len();
    let mut index = 0;

    for (name, child) in &dir.dirs {
        index += 1;
        let (connector, extension) = branch(index == total);
        lines.push(format!("{}{}{}/", prefix, connector, name));
        render_dir(child, &format!("{}{}", prefix, extension), lines);
    }

    for (name, file) in &dir.files {
        index += 1;
        let (connector, _) = branch(index == total);
        lines.push(format!("{}{}{}{}", prefix, connector, name, export_suffix(file)));
    }
}

fn branch(last: bool) -> (&'static str, &'static str) {
    if last {
        ("└─ ", "   ")
    } else {
        ("├─ ", "│  ")
    }
}

/// ` → a, b, default C`, or nothing when the file exports nothing
fn export_suffix(file: &FileRecord) -> String {
    let mut names: Vec<String> = file
        .exports
        .iter_kinds()
        .map(|(_, name)| name.to_string())
        .collect();
    if let Some(default) = &file.exports.default_export {
        names.push(format!("default {}", default));
    }
    if names.is_empty() {
        String::new()
    } else {
        format!(" → {}", names.join(", "))
    }
}
