//! Path pattern matching module
//!
//! Patterns are literal segments mixed with `{name}` captures, e.g.
//! `/users/{id}/orders`. A capture matches exactly one non-empty segment.

/// Path variables captured from a request path, in pattern order
pub type PathVars = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Capture(String),
}

/// Compiled path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .map(|segment| {
                segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .filter(|name| !name.is_empty())
                    .map_or_else(
                        || Segment::Literal(segment.to_string()),
                        |name| Segment::Capture(name.to_string()),
                    )
            })
            .collect();

        Self { segments }
    }

    /// Match a request path, returning the captured variables on success
    pub fn match_path(&self, path: &str) -> Option<PathVars> {
        let mut vars = PathVars::new();
        let mut parts = split_path(path);

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Capture(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    vars.push((name.clone(), part.to_string()));
                }
            }
        }

        // Pattern exhausted; the path must be too
        if parts.next().is_some() {
            return None;
        }

        Some(vars)
    }
}

/// Split on `/`, ignoring the leading slash so `/` yields one empty segment
fn split_path(path: &str) -> std::str::Split<'_, char> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}
