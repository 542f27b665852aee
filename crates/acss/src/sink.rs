//! Destinations for compiled CSS rules.
//!
//! A [`Session`](crate::Session) queues every rule it compiles and hands the
//! queue to a [`StyleSink`] on [`flush`](crate::Session::flush). A sink may
//! reject individual rules; rejected rules are logged and skipped, and the
//! rest of the batch is still delivered.

use crate::error::SinkError;

/// Receives compiled rules one at a time.
pub trait StyleSink {
    /// Inserts one complete CSS rule.
    fn insert_rule(&mut self, rule: &str) -> Result<(), SinkError>;
}

impl<F> StyleSink for F
where
    F: FnMut(&str) -> Result<(), SinkError>,
{
    fn insert_rule(&mut self, rule: &str) -> Result<(), SinkError> {
        self(rule)
    }
}

/// Outcome of a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushReport {
    pub inserted: usize,
    pub rejected: usize,
}

/// Accumulates rules into a string, for server-side rendering.
///
/// ```rust
/// use acss::sink::{StringSink, StyleSink};
///
/// let mut sink = StringSink::new();
/// sink.insert_rule(".a_b{color:red}").unwrap();
/// assert_eq!(sink.into_style_tag("acss"), r#"<style data-acss="ssr">.a_b{color:red}</style>"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSink {
    css: String,
    rules: usize,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.css
    }

    /// Number of rules received so far.
    pub fn len(&self) -> usize {
        self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }

    pub fn into_css(self) -> String {
        self.css
    }

    /// Wraps the accumulated CSS in `<style data-{attr}="ssr">`.
    pub fn into_style_tag(self, attr: &str) -> String {
        format!("<style data-{attr}=\"ssr\">{}</style>", self.css)
    }
}

impl StyleSink for StringSink {
    fn insert_rule(&mut self, rule: &str) -> Result<(), SinkError> {
        self.css.push_str(rule);
        self.rules += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        let mut sink = |rule: &str| -> Result<(), SinkError> {
            seen.push(rule.to_string());
            Ok(())
        };
        sink.insert_rule(".a{color:red}").unwrap();
        assert_eq!(seen, [".a{color:red}"]);
    }

    #[test]
    fn string_sink_counts_rules() {
        let mut sink = StringSink::new();
        assert!(sink.is_empty());
        sink.insert_rule(".a{c:d}").unwrap();
        sink.insert_rule(".b{e:f}").unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.as_str(), ".a{c:d}.b{e:f}");
    }
}
