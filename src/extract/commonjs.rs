//! CommonJS export patterns and model registrations
//!
//! - `exports.name = ...` / `module.exports.name = ...`
//! - `module.exports = { a, b: c }`
//! - `module.exports = name`
//! - `mongoose.model("Name", schema)`

use once_cell::sync::Lazy;
use regex::Regex;

use super::{is_identifier, is_reserved, Hit, HitKind};

mod patterns {
    use super::*;

    /// `exports.foo =` or `module.exports.foo =`
    pub static MEMBER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?:\bmodule\.)?\bexports\.([A-Za-z_$][\w$]*)\s*=")
            .expect("Invalid exports member regex")
    });

    /// Callable right-hand side of a CommonJS assignment
    pub static CALLABLE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:async\b\s*)?(?:function\b|\(|[A-Za-z_$][\w$]*\s*=>)")
            .expect("Invalid CommonJS callable regex")
    });

    /// `module.exports = { ... }`, first occurrence only
    pub static OBJECT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\bmodule\.exports\s*=\s*\{([^}]+)\}").expect("Invalid module.exports regex")
    });

    /// `module.exports = Name;`
    pub static IDENT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)\bmodule\.exports\s*=\s*([A-Za-z_$][\w$]*)[ \t]*;?[ \t]*\r?$")
            .expect("Invalid module.exports identifier regex")
    });

    /// Names that read as configuration rather than helpers
    pub static CONFIG_NAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^(?:config|options|settings)").expect("Invalid config name regex")
    });

    /// `mongoose.model("Name", ...)`
    pub static MONGOOSE_MODEL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"\bmongoose\.model\s*(?:<[^>]*>)?\s*\(\s*['"]([A-Za-z_$][\w$]*)['"]"#)
            .expect("Invalid mongoose model regex")
    });
}

/// Push every CommonJS hit found in `text`
pub(crate) fn collect(text: &str, hits: &mut Vec<Hit>) {
    for cap in patterns::MEMBER.captures_iter(text) {
        let Some(whole) = cap.get(0) else { continue };
        let rhs = &text[whole.end()..];
        // `exports.x == y` is a comparison, not an export
        if rhs.starts_with('=') {
            continue;
        }

        let name = &cap[1];
        if patterns::CALLABLE.is_match(rhs.trim_start()) {
            hits.push(Hit::new(whole.start(), HitKind::Function, name));
        } else if is_constant_name(name) {
            hits.push(Hit::new(whole.start(), HitKind::Constant, name));
        }
    }

    if let Some(cap) = patterns::OBJECT.captures(text) {
        if let Some(body) = cap.get(1) {
            let mut at = body.start();
            for item in body.as_str().split(',') {
                let key = item.split(':').next().unwrap_or("").trim();
                if is_identifier(key) {
                    hits.push(Hit::new(at, HitKind::Function, key));
                }
                at += item.len() + 1;
            }
        }
    }

    for cap in patterns::IDENT.captures_iter(text) {
        if !is_reserved(&cap[1]) {
            let at = cap.get(0).map_or(0, |m| m.start());
            hits.push(Hit::new(at, HitKind::CommonJsDefault, &cap[1]));
        }
    }

    for cap in patterns::MONGOOSE_MODEL.captures_iter(text) {
        let at = cap.get(0).map_or(0, |m| m.start());
        hits.push(Hit::new(at, HitKind::Class, &cap[1]));
    }
}

/// ALL_CAPS or config-like names count as constants; other lowercase
/// non-callable exports are ignored.
fn is_constant_name(name: &str) -> bool {
    let all_caps = name.chars().any(|c| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    all_caps || patterns::CONFIG_NAME.is_match(name)
}
