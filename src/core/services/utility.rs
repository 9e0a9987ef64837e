//! Utility-class parsing and theme lookup
//!
//! A candidate such as `md:hover:-mt-4` splits into variants (`md`,
//! `hover`), a negative marker, and a body `mt-4`. The body's prefix picks
//! the namespaces to search (see [`UTILITIES`]) and the rest is the key.
//!
//! # Examples
//!
//! ```
//! use tokenwind::core::models::{ResolvedTheme, ThemeLayer, TokenValue};
//! use tokenwind::core::services::utility;
//!
//! let theme = ResolvedTheme::from(ThemeLayer::new().with("height", "128", "36rem"));
//! let parsed = utility::parse("md:h-128").unwrap();
//! let found = utility::lookup(&theme, &parsed).unwrap();
//! assert_eq!(found.namespace.as_deref(), Some("height"));
//! assert_eq!(found.value, TokenValue::from("36rem"));
//! ```

use serde::Serialize;

use crate::core::models::{DEFAULT_KEY, ResolvedTheme, TokenValue};

/// A utility prefix and the namespaces it reads, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityRule {
    /// Class prefix, without the trailing `-`
    pub prefix: &'static str,
    /// Namespaces searched for the key, first match wins
    pub namespaces: &'static [&'static str],
}

const fn rule(prefix: &'static str, namespaces: &'static [&'static str]) -> UtilityRule {
    UtilityRule { prefix, namespaces }
}

const SPACING: &str = "spacing";

/// Known theme-backed utilities
pub const UTILITIES: &[UtilityRule] = &[
    rule("h", &["height", SPACING]),
    rule("w", &["width", SPACING]),
    rule("size", &["size", SPACING]),
    rule("min-h", &["minHeight"]),
    rule("min-w", &["minWidth"]),
    rule("max-h", &["maxHeight", SPACING]),
    rule("max-w", &["maxWidth"]),
    rule("p", &["padding", SPACING]),
    rule("px", &["padding", SPACING]),
    rule("py", &["padding", SPACING]),
    rule("pt", &["padding", SPACING]),
    rule("pr", &["padding", SPACING]),
    rule("pb", &["padding", SPACING]),
    rule("pl", &["padding", SPACING]),
    rule("m", &["margin", SPACING]),
    rule("mx", &["margin", SPACING]),
    rule("my", &["margin", SPACING]),
    rule("mt", &["margin", SPACING]),
    rule("mr", &["margin", SPACING]),
    rule("mb", &["margin", SPACING]),
    rule("ml", &["margin", SPACING]),
    rule("gap", &["gap", SPACING]),
    rule("gap-x", &["gap", SPACING]),
    rule("gap-y", &["gap", SPACING]),
    rule("inset", &["inset", SPACING]),
    rule("top", &["inset", SPACING]),
    rule("right", &["inset", SPACING]),
    rule("bottom", &["inset", SPACING]),
    rule("left", &["inset", SPACING]),
    rule("font", &["fontFamily", "fontWeight"]),
    rule("text", &["fontSize", "textColor", "colors"]),
    rule("leading", &["lineHeight"]),
    rule("tracking", &["letterSpacing"]),
    rule("bg", &["backgroundColor", "colors"]),
    rule("border", &["borderWidth", "borderColor", "colors"]),
    rule("rounded", &["borderRadius"]),
    rule("ring", &["ringWidth", "ringColor", "colors"]),
    rule("decoration", &["textDecorationColor", "colors"]),
    rule("shadow", &["boxShadow"]),
    rule("opacity", &["opacity"]),
    rule("z", &["zIndex"]),
];

/// A candidate split into its syntactic parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility<'a> {
    /// The full candidate
    pub raw: &'a str,
    /// Variant prefixes, outermost first (`md`, `hover`)
    pub variants: Vec<&'a str>,
    /// Leading `!`
    pub important: bool,
    /// Leading `-` on the body
    pub negative: bool,
    /// The utility itself, e.g. `mt-4`
    pub body: &'a str,
}

/// A utility matched to a theme value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Prefix of the rule that matched
    pub prefix: &'static str,
    /// Namespace the value came from; `None` for arbitrary values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Key looked up (or the arbitrary value text)
    pub key: String,
    /// The resolved value
    pub value: TokenValue,
}

/// Split a candidate into variants, flags and body
///
/// Returns `None` for fragments that cannot be utilities: empty bodies,
/// empty variants (`a::b`, `hover:`), or unbalanced brackets.
#[must_use]
pub fn parse(candidate: &str) -> Option<Utility<'_>> {
    let mut segments = split_variants(candidate)?;
    let last = segments.pop()?;
    if segments.iter().any(|v| v.is_empty()) {
        return None;
    }

    let (important, rest) = last.strip_prefix('!').map_or((false, last), |r| (true, r));
    let (negative, body) = rest.strip_prefix('-').map_or((false, rest), |r| (true, r));

    if body.is_empty() || body.starts_with('-') {
        return None;
    }

    Some(Utility {
        raw: candidate,
        variants: segments,
        important,
        negative,
        body,
    })
}

/// Resolve a parsed utility against a theme
///
/// Rules are tried longest prefix first, so `min-h-full` is `min-h` and
/// not `m`. A bare prefix (`rounded`) looks up `DEFAULT`. `prefix-[value]`
/// resolves to `value` with `_` read as a space, without a theme lookup.
#[must_use]
pub fn lookup(theme: &ResolvedTheme, utility: &Utility<'_>) -> Option<Resolution> {
    let mut rules: Vec<(&UtilityRule, &str)> = UTILITIES
        .iter()
        .filter_map(|rule| key_for(rule.prefix, utility.body).map(|key| (rule, key)))
        .collect();
    rules.sort_by_key(|(rule, _)| std::cmp::Reverse(rule.prefix.len()));

    for (rule, key) in rules {
        if let Some(arbitrary) = key.strip_prefix('[').and_then(|k| k.strip_suffix(']')) {
            if arbitrary.is_empty() {
                return None;
            }
            return Some(Resolution {
                prefix: rule.prefix,
                namespace: None,
                key: key.to_string(),
                value: TokenValue::Single(arbitrary.replace('_', " ")),
            });
        }

        let found = rule.namespaces.iter().find_map(|namespace| {
            theme.resolve(namespace, key).map(|value| (*namespace, value))
        });
        if let Some((namespace, value)) = found {
            return Some(Resolution {
                prefix: rule.prefix,
                namespace: Some(namespace.to_string()),
                key: key.to_string(),
                value: value.clone(),
            });
        }
    }

    None
}

fn key_for<'a>(prefix: &str, body: &'a str) -> Option<&'a str> {
    if body == prefix {
        return Some(DEFAULT_KEY);
    }
    body.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|key| !key.is_empty())
}

/// Split on `:` outside of `[...]`
fn split_variants(candidate: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in candidate.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            ':' if depth == 0 => {
                segments.push(&candidate[start..i]);
                start = i + 1;
            },
            _ => {},
        }
    }

    if depth != 0 {
        return None;
    }
    segments.push(&candidate[start..]);
    Some(segments)
}
