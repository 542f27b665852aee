//! Property values with symbolic variable references.
//!
//! Parsing runs before a class has its display name, so references to local
//! variables (`--&gap`) and runtime-variable placeholders (`$c[...]`) cannot
//! be spelled out yet. They are kept as [`Segment::Local`] and
//! [`Segment::Runtime`] until name finalization rewrites every segment into
//! plain text.

use std::fmt;

/// One piece of a property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal CSS text, emitted verbatim.
    Text(String),
    /// Reference to a class-local variable by its declared name.
    Local(String),
    /// Placeholder for a runtime variable, keyed by abbreviation plus an
    /// optional state/pseudo suffix (`c`, `c-hover`).
    Runtime(String),
}

/// A property value plus its `!important` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub segments: Vec<Segment>,
    pub important: bool,
}

impl Value {
    /// A value made of literal text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Text(text.into())],
            important: false,
        }
    }

    /// A runtime-variable placeholder.
    pub fn runtime(key: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Runtime(key.into())],
            important: false,
        }
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            important: false,
        }
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Returns `true` if any segment still needs name finalization.
    pub fn is_symbolic(&self) -> bool {
        self.segments.iter().any(|s| !matches!(s, Segment::Text(_)))
    }

    pub fn has_local_refs(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Local(_)))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Runtime(_)])
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::Local(name) => write!(f, "LOCALVAR({name})")?,
                Segment::Runtime(key) => write!(f, "var(--{key})")?,
            }
        }
        if self.important {
            f.write_str("!important")?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
