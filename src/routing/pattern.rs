//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile a registered pattern into literal and parameter segments
//! - Match concrete request paths, binding `:name` segments
//!
//! # Design Decisions
//! - Literal segments compare exactly (case-sensitive)
//! - A parameter matches any single non-empty segment
//! - Trailing slashes on the request path are tolerated
//! - No regex, so matching stays O(segments)

use std::collections::HashMap;

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled route pattern: literal segments plus named `:param` segments,
/// e.g. `/api/users/:userId`.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string. Segments starting with `:` become named
    /// parameters.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .into_iter()
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();
        Self {
            template: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as registered.
    ///
    /// Used as the metrics label in place of the concrete path, keeping
    /// label cardinality bounded by the route table.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Match a concrete request path, binding parameter segments.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let segments = split_path(path);
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (expected, actual) in self.segments.iter().zip(segments) {
            match expected {
                Segment::Literal(literal) => {
                    if literal != actual {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), actual.to_string());
                }
            }
        }
        Some(params)
    }
}

fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}
