//! ES module export patterns
//!
//! Covers `export function`, `export const`, `export type`,
//! `export interface`, `export class` and the `export default` forms.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{is_reserved, Hit, HitKind};

/// Regex patterns for ES module exports.
/// Cached as static to avoid recompilation on every file.
mod patterns {
    use super::*;

    /// `export function foo`, `export async function foo`, `export function* gen`
    pub static FUNCTION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\bexport\s+(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)")
            .expect("Invalid export function regex")
    });

    /// `export const NAME` up to (not including) the annotation or initializer
    pub static CONST: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\bexport\s+const\s+([A-Za-z_$][\w$]*)")
            .expect("Invalid export const regex")
    });

    /// Right-hand side that looks callable: function expression or arrow function
    pub static CALLABLE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?:async\b\s*)?(?:function\b|(?:<[^>]*>\s*)?\([^)]*\)\s*(?::[^=]*?)?=>|[A-Za-z_$][\w$]*\s*=>)",
        )
        .expect("Invalid callable regex")
    });

    /// `export type Foo`
    pub static TYPE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\bexport\s+(?:declare\s+)?type\s+([A-Za-z_$][\w$]*)")
            .expect("Invalid export type regex")
    });

    /// `export interface Foo`
    pub static INTERFACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\bexport\s+(?:declare\s+)?interface\s+([A-Za-z_$][\w$]*)")
            .expect("Invalid export interface regex")
    });

    /// `export class Foo`, `export default class Foo`, `export abstract class Foo`
    pub static CLASS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"\bexport\s+(default\s+)?(?:declare\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][\w$]*)",
        )
        .expect("Invalid export class regex")
    });

    /// `export default function Foo`, `export default async function Foo`
    pub static DEFAULT_FUNCTION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\bexport\s+default\s+(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)")
            .expect("Invalid export default function regex")
    });

    /// `export default Foo;` with nothing else on the line
    pub static DEFAULT_IDENT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)\bexport\s+default\s+([A-Za-z_$][\w$]*)[ \t]*;?[ \t]*\r?$")
            .expect("Invalid export default identifier regex")
    });

    /// `export { Foo as default }`
    pub static DEFAULT_ALIAS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\bexport\s*\{[^}]*?\b([A-Za-z_$][\w$]*)\s+as\s+default\b")
            .expect("Invalid export default alias regex")
    });
}

/// Push every ES module hit found in `text`
pub(crate) fn collect(text: &str, hits: &mut Vec<Hit>) {
    for cap in patterns::FUNCTION.captures_iter(text) {
        let m = &cap[1];
        hits.push(Hit::new(offset(&cap), HitKind::Function, m));
    }

    for cap in patterns::CONST.captures_iter(text) {
        let Some(whole) = cap.get(0) else { continue };
        let Some(rhs) = initializer(&text[whole.end()..]) else {
            continue;
        };
        let kind = if looks_callable(rhs) {
            HitKind::Function
        } else {
            HitKind::Constant
        };
        hits.push(Hit::new(whole.start(), kind, &cap[1]));
    }

    for cap in patterns::TYPE.captures_iter(text) {
        hits.push(Hit::new(offset(&cap), HitKind::Type, &cap[1]));
    }

    for cap in patterns::INTERFACE.captures_iter(text) {
        hits.push(Hit::new(offset(&cap), HitKind::Interface, &cap[1]));
    }

    for cap in patterns::CLASS.captures_iter(text) {
        let at = offset(&cap);
        hits.push(Hit::new(at, HitKind::Class, &cap[2]));
        if cap.get(1).is_some() {
            hits.push(Hit::new(at, HitKind::Default, &cap[2]));
        }
    }

    for cap in patterns::DEFAULT_FUNCTION.captures_iter(text) {
        hits.push(Hit::new(offset(&cap), HitKind::Default, &cap[1]));
    }

    for cap in patterns::DEFAULT_IDENT.captures_iter(text) {
        if !is_reserved(&cap[1]) {
            hits.push(Hit::new(offset(&cap), HitKind::Default, &cap[1]));
        }
    }

    for cap in patterns::DEFAULT_ALIAS.captures_iter(text) {
        hits.push(Hit::new(offset(&cap), HitKind::Default, &cap[1]));
    }
}

fn offset(cap: &regex::Captures<'_>) -> usize {
    cap.get(0).map_or(0, |m| m.start())
}

/// True when an initializer expression looks like a function
pub(crate) fn looks_callable(rhs: &str) -> bool {
    patterns::CALLABLE.is_match(rhs.trim_start())
}

/// Return the initializer text following `export const NAME`
///
/// `rest` starts right after the name. An optional `: Type` annotation is
/// skipped with bracket tracking so `=>` inside function types is not taken
/// for the assignment. Returns `None` for declarations without an
/// initializer (`export const x: number;`).
fn initializer(rest: &str) -> Option<&str> {
    let trimmed = rest.trim_start();
    let start = rest.len() - trimmed.len();
    let bytes = trimmed.as_bytes();

    match bytes.first() {
        Some(b'=') if bytes.get(1) != Some(&b'=') && bytes.get(1) != Some(&b'>') => {
            return Some(&rest[start + 1..]);
        }
        Some(b':') => {}
        _ => return None,
    }

    let mut depth = 0usize;
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' | b'<' => depth += 1,
            b')' | b']' | b'}' | b'>' => depth = depth.saturating_sub(1),
            b'=' if bytes.get(i + 1) == Some(&b'>') => i += 1,
            b'=' if depth == 0 => return Some(&rest[start + i + 1..]),
            b';' | b'\n' if depth == 0 => return None,
            _ => {}
        }
        i += 1;
    }
    None
}
