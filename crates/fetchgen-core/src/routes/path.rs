//! Path template parsing.
//!
//! A path template such as `/blog/{id}` is split on `/` into segments. Each
//! segment is either literal text or a parameter segment holding exactly one
//! `{name}` token, possibly surrounded by literal text (`v{version}.json`).
//! Segments with a missing brace, or a `}` before the first `{`, stay
//! literal; they are never an error.

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::first_letter_upper;

/// Character placed before a `{name}` token in generated URL templates
pub const INTERPOLATION_MARKER: char = '$';

/// Prefix without braces, then the first `{...}` token, then anything.
static PARAM_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<prefix>[^{}]*)\{(?P<name>[^}]*)\}(?P<suffix>.*)$")
        .expect("path parameter pattern is valid")
});

/// One `/`-separated piece of a path template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, including malformed brace usage
    Literal(&'a str),
    /// A segment holding a `{name}` token
    Param {
        prefix: &'a str,
        name: &'a str,
        suffix: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// Classify a single path segment
    pub fn parse(raw: &'a str) -> Self {
        match PARAM_SEGMENT.captures(raw) {
            Some(caps) => Segment::Param {
                prefix: caps.name("prefix").map_or("", |m| m.as_str()),
                name: caps.name("name").map_or("", |m| m.as_str()),
                suffix: caps.name("suffix").map_or("", |m| m.as_str()),
            },
            None => Segment::Literal(raw),
        }
    }

    /// Piece of the readable route identifier contributed by this segment
    pub fn readable(&self) -> String {
        match self {
            Segment::Literal(text) => first_letter_upper(text),
            Segment::Param { name, .. } => first_letter_upper(name),
        }
    }

    /// This segment as it appears in the generated URL template
    pub fn url_template(&self) -> String {
        match self {
            Segment::Literal(text) => (*text).to_string(),
            Segment::Param {
                prefix,
                name,
                suffix,
            } => format!("{prefix}{INTERPOLATION_MARKER}{{{name}}}{suffix}"),
        }
    }
}

/// Everything derived from one path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    /// Path parameter names in template order
    pub params: Vec<String>,
    /// Separator-free identifier, e.g. `BlogId` for `/blog/{id}`
    pub readable_route: String,
    /// URL template joined onto the base path, e.g. `/api/blog/${id}`
    pub url: String,
}

/// Parse `path` and join the resulting URL template onto `base_path`
pub fn parse_path(base_path: &str, path: &str) -> ParsedPath {
    let mut params = Vec::new();
    let mut readable_route = String::new();
    let mut out_path = Vec::new();

    for segment in path.split('/').map(Segment::parse) {
        if let Segment::Param { name, .. } = segment {
            params.push(name.to_string());
        }
        readable_route.push_str(&segment.readable());
        out_path.push(segment.url_template());
    }

    ParsedPath {
        params,
        readable_route,
        url: join_base_path(base_path, &out_path.join("/")),
    }
}

/// Join a base path and a route, keeping exactly one `/` at the junction
/// unless either side is empty.
pub fn join_base_path(base: &str, route: &str) -> String {
    if base.is_empty() || route.is_empty() {
        return format!("{base}{route}");
    }

    match (base.ends_with('/'), route.starts_with('/')) {
        (true, true) => format!("{base}{}", &route[1..]),
        (false, false) => format!("{base}/{route}"),
        _ => format!("{base}{route}"),
    }
}
