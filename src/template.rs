//! Message templates with `${identifier}` placeholders.
//!
//! Rendering is a single left-to-right pass over the template. Each
//! placeholder whose full token (`${name}`) is a key of the substitution map
//! is replaced by its value; any other placeholder stays verbatim. Inserted
//! values are never scanned again, so a value that itself looks like a
//! placeholder cannot trigger a second substitution.
//!
//! ```rust
//! use coded_errors::template::{render, SubstitutionMap};
//!
//! let mut map = SubstitutionMap::new();
//! map.insert("index", "(foo)");
//!
//! assert_eq!(render("Invalid array index ${index}.", &map), "Invalid array index (foo).");
//! assert_eq!(render("Left ${alone}", &map), "Left ${alone}");
//! ```

use smallvec::SmallVec;
use std::collections::HashSet;

const OPEN: &str = "${";
const CLOSE: char = '}';

// ============================================================================
// Substitution Map
// ============================================================================

/// Ordered `${name}` → value pairs.
///
/// Message templates rarely carry more than a handful of placeholders, so the
/// pairs live inline and lookups are linear.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    pairs: SmallVec<[(String, String); 4]>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: SmallVec::with_capacity(capacity),
        }
    }

    /// Bind placeholder `name` (without the `${}` wrapper) to `value`.
    ///
    /// Re-binding a name replaces the earlier value.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let token = placeholder_token(name);
        let value = value.into();
        match self.pairs.iter_mut().find(|(key, _)| *key == token) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((token, value)),
        }
    }

    /// Value bound to a full token such as `${index}`.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == token)
            .map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(token, value)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Values may carry caller data; only the keys are shown.
impl std::fmt::Debug for SubstitutionMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.pairs.iter().map(|(key, _)| key))
            .finish()
    }
}

/// Wrap an identifier as `${identifier}`.
pub fn placeholder_token(name: &str) -> String {
    let mut token = String::with_capacity(name.len() + 3);
    token.push_str(OPEN);
    token.push_str(name);
    token.push(CLOSE);
    token
}

// ============================================================================
// Scanning
// ============================================================================

enum Segment<'a> {
    Literal(&'a str),
    Placeholder { token: &'a str, name: &'a str },
}

/// Splits a template into literal runs and well-formed placeholders.
///
/// `${` not followed by an identifier and `}` is literal text. Identifiers
/// follow Rust's rules loosely: a letter or `_`, then letters, digits or `_`,
/// in any script.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let mut search_from = 0;
        // First `}` at or after the last body searched; each `}` is found once.
        let mut close_at: Option<usize> = None;
        loop {
            let Some(offset) = self.rest[search_from..].find(OPEN) else {
                return Some(self.take_literal());
            };
            let start = search_from + offset;
            let body_start = start + OPEN.len();

            let close = match close_at {
                Some(close) if close >= body_start => close,
                _ => match self.rest[body_start..].find(CLOSE) {
                    Some(end) => body_start + end,
                    // No `}` left, so no later `${` can close either.
                    None => return Some(self.take_literal()),
                },
            };
            close_at = Some(close);

            let name = &self.rest[body_start..close];
            if is_identifier(name) {
                if start > 0 {
                    let literal = &self.rest[..start];
                    self.rest = &self.rest[start..];
                    return Some(Segment::Literal(literal));
                }
                let token_len = close + CLOSE.len_utf8();
                let token = &self.rest[..token_len];
                self.rest = &self.rest[token_len..];
                return Some(Segment::Placeholder { token, name });
            }

            search_from = body_start;
        }
    }
}

impl<'a> Segments<'a> {
    fn take_literal(&mut self) -> Segment<'a> {
        let literal = self.rest;
        self.rest = "";
        Segment::Literal(literal)
    }
}

fn segments(template: &str) -> Segments<'_> {
    Segments { rest: template }
}

fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

// ============================================================================
// Public Operations
// ============================================================================

/// Placeholder identifiers in order of appearance, repeats included.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    segments(template).filter_map(|segment| match segment {
        Segment::Placeholder { name, .. } => Some(name),
        Segment::Literal(_) => None,
    })
}

/// Number of **distinct** placeholders in `template`.
pub fn variable_count(template: &str) -> usize {
    placeholders(template).collect::<HashSet<_>>().len()
}

/// Substitute every bound placeholder in one pass.
pub fn render(template: &str, substitutions: &SubstitutionMap) -> String {
    let mut output = String::with_capacity(template.len());

    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder { token, .. } => {
                output.push_str(substitutions.get(token).unwrap_or(token));
            }
        }
    }

    output
}
