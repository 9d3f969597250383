//! Route grouping shared by the digest renderers
//!
//! Collapses the route tree into top-level groups. A dynamic segment directly
//! under a top-level route (`orders/[id]`) opens its own group so that its
//! children stay separate from the list pages. Route group folders such as
//! `(auth)` add no URL segment, so their children are lifted one level.

use std::collections::HashMap;

use crate::routes::{is_group, NodeId, RouteTree};

/// Segments that never show up as examples
const TECHNICAL_ROUTES: [&str; 5] = ["error", "sync", "verify-email", "success", "...nextauth"];

/// One top-level route (or `top/[param]`) and its child page names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    pub key: String,
    pub children: Vec<String>,
}

impl RouteGroup {
    /// First path segment of the key (`orders` for `orders/[id]`)
    pub fn base(&self) -> &str {
        self.key.split('/').next().unwrap_or(&self.key)
    }
}

/// How dynamic children are treated while grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicChildren {
    /// Drop `[x]` children entirely
    Skip,
    /// Keep them so the caller can detect list/detail pairs
    Keep,
}

/// Group the routes of `tree`, dropping groups that end up empty
pub fn route_groups(tree: &RouteTree, dynamic: DynamicChildren) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut top: Option<String> = None;
    let mut open_dynamic: Option<String> = None;

    for id in tree.preorder() {
        let node = tree.node(id);
        if node.is_group() {
            continue;
        }

        match url_depth(tree, id) {
            0 => {
                top = Some(node.name.clone());
                open_dynamic = None;
                ensure(&mut groups, &mut index, &node.name);
            }
            1 if node.is_dynamic() => {
                if let Some(top) = &top {
                    let key = format!("{}/{}", top, node.name);
                    ensure(&mut groups, &mut index, &key);
                    open_dynamic = Some(key);
                }
            }
            depth => {
                if depth == 1 {
                    open_dynamic = None;
                }
                if is_technical(&node.name)
                    || (dynamic == DynamicChildren::Skip && has_brackets(&node.name))
                {
                    continue;
                }
                let key = match (&open_dynamic, &top) {
                    (Some(key), _) if depth > 1 => key,
                    (_, Some(top)) => top,
                    _ => continue,
                };
                if let Some(&i) = index.get(key.as_str()) {
                    let children = &mut groups[i].children;
                    if !children.contains(&node.name) {
                        children.push(node.name.clone());
                    }
                }
            }
        }
    }

    groups.retain(|g| !g.children.is_empty());
    groups
}

fn ensure(groups: &mut Vec<RouteGroup>, index: &mut HashMap<String, usize>, key: &str) {
    if !index.contains_key(key) {
        index.insert(key.to_string(), groups.len());
        groups.push(RouteGroup {
            key: key.to_string(),
            children: Vec::new(),
        });
    }
}

/// Depth counting only segments that appear in the URL
fn url_depth(tree: &RouteTree, id: NodeId) -> usize {
    let ancestry = tree.ancestry(id);
    let parents = &ancestry[..ancestry.len().saturating_sub(1)];
    parents.iter().filter(|name| !is_group(name)).count()
}

fn is_technical(name: &str) -> bool {
    let lower = name.to_lowercase();
    TECHNICAL_ROUTES.iter().any(|p| lower.contains(p))
}

fn has_brackets(name: &str) -> bool {
    name.contains('[') || name.contains(']')
}
