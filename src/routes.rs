//! File-system route synthesis
//!
//! Walks the routing directory of a Next.js-style project (`app/` or
//! `pages/`) and builds a [`RouteTree`] of folder names. Only directories are
//! routes. Private folders (`_name`) and the `api` folder are dropped along
//! with everything beneath them; route groups such as `(marketing)` are kept
//! and sorted before ordinary segments.
//!
//! The tree is an arena of nodes with parent links. The indented text form
//! (two spaces per level, pre-order) exists only at the output boundary via
//! [`RouteTree::to_lines`].

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

/// Candidate routing roots, checked in order
const ROUTE_ROOTS: [&str; 4] = ["app", "src/app", "pages", "src/pages"];

/// Index of a node inside a [`RouteTree`]
pub type NodeId = usize;

/// One route segment (a directory)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub name: String,
    pub depth: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl RouteNode {
    /// `(group)` folders organize routes without adding a URL segment
    pub fn is_group(&self) -> bool {
        is_group(&self.name)
    }

    /// `[param]`, `[...slug]` and `[[...slug]]` folders
    pub fn is_dynamic(&self) -> bool {
        self.name.starts_with('[') && self.name.ends_with(']')
    }
}

/// Arena-backed route tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTree {
    nodes: Vec<RouteNode>,
    roots: Vec<NodeId>,
}

impl RouteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` (or as a root) and return its id
    pub fn add(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        let depth = parent.map_or(0, |p| self.nodes[p].depth + 1);
        self.nodes.push(RouteNode {
            name: name.into(),
            depth,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &RouteNode {
        &self.nodes[id]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in pre-order (node, then its children, then its siblings)
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id].children.iter().rev().copied());
        }
        order
    }

    /// Names from the root down to `id`
    pub fn ancestry(&self, id: NodeId) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(n) = current {
            names.push(self.nodes[n].name.as_str());
            current = self.nodes[n].parent;
        }
        names.reverse();
        names
    }

    /// Flatten to the indented text form, one line per node
    pub fn to_lines(&self) -> Vec<String> {
        self.preorder()
            .into_iter()
            .map(|id| {
                let node = &self.nodes[id];
                format!("{}{}", "  ".repeat(node.depth), node.name)
            })
            .collect()
    }

    /// Rebuild a tree from its indented text form
    ///
    /// Depth is taken from leading spaces (two per level). A line indented
    /// deeper than its predecessor allows is attached to the deepest open
    /// ancestor.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut tree = Self::new();
        let mut open: Vec<NodeId> = Vec::new();
        for line in lines {
            let line = line.as_ref();
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            let depth = (line.len() - line.trim_start().len()) / 2;
            open.truncate(depth);
            let id = tree.add(name, open.last().copied());
            open.push(id);
        }
        tree
    }

    fn graft(&mut self, dir: ScannedDir, parent: Option<NodeId>) {
        let id = self.add(dir.name, parent);
        for child in dir.children {
            self.graft(child, Some(id));
        }
    }
}

/// Find the routing root of a project, if any
pub fn find_routes_root(project_root: &Path) -> Option<PathBuf> {
    ROUTE_ROOTS
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|path| path.is_dir())
}

/// Synthesize the route tree for `project_root`
///
/// Returns an empty tree when no routing root exists.
pub fn synthesize_routes(project_root: &Path) -> RouteTree {
    match find_routes_root(project_root) {
        Some(dir) => {
            tracing::debug!("Synthesizing routes from {}", dir.display());
            build_route_tree(&dir)
        }
        None => RouteTree::new(),
    }
}

/// Build the route tree of the directories beneath `routes_dir`
pub fn build_route_tree(routes_dir: &Path) -> RouteTree {
    let mut tree = RouteTree::new();
    for dir in scan_children(routes_dir) {
        tree.graft(dir, None);
    }
    tree
}

/// Directory listing result before it is placed in the arena
struct ScannedDir {
    name: String,
    children: Vec<ScannedDir>,
}

/// List route folders beneath `dir`, sorted, with subtrees scanned in parallel
fn scan_children(dir: &Path) -> Vec<ScannedDir> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_route_segment(name))
        .collect();
    names.sort_by(|a, b| compare_segments(a, b));

    names
        .into_par_iter()
        .map(|name| {
            let children = scan_children(&dir.join(&name));
            ScannedDir { name, children }
        })
        .collect()
}

/// Folders that become route entries
fn is_route_segment(name: &str) -> bool {
    !(name.starts_with('_') || name.starts_with('.') || name == "api")
}

pub(crate) fn is_group(name: &str) -> bool {
    name.starts_with('(') && name.ends_with(')')
}

/// Route groups first, then alphabetical within each class
fn compare_segments(a: &str, b: &str) -> Ordering {
    is_group(b).cmp(&is_group(a)).then_with(|| a.cmp(b))
}
