//! Line classification and dispatch.
//!
//! Every line of a class, const or query body is one of five shapes:
//!
//! | Shape            | Example                            |
//! |------------------|------------------------------------|
//! | property         | `bg[red]`, `$c[blue]`, `--&g[4px]` |
//! | state            | `hover(c[red] bg[blue])`           |
//! | pseudo-element   | `before(ct[*] c[red])`             |
//! | screen query     | `screen(md, p[16px])`              |
//! | container query  | `container(min-w[500px], p[8px])`  |
//!
//! The classifier only looks at the text before the first `(`. A prefix that
//! is not a known state, pseudo-element, `screen` or `container` falls
//! through to the property parser, so `w[calc(100% - 2px)]` stays a property.

use bitflags::bitflags;

use crate::error::AcssError;
use crate::parser::{declare, pseudo, query, state};
use crate::types::{PseudoClass, PseudoElement, StyleDef, ThemeSource};

bitflags! {
    /// Restrictions applied while parsing a line.
    ///
    /// Top-level class bodies parse with no flags set.
    ///
    /// ```
    /// use acss::parser::ParseContext;
    ///
    /// let ctx = ParseContext::QUERY;
    /// assert!(ctx.contains(ParseContext::QUERY));
    /// assert!(!ctx.contains(ParseContext::CONST));
    /// assert!(ParseContext::empty().is_empty());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ParseContext: u8 {
        /// Inside `@const name { ... }`: no `!important`, no variables.
        const CONST = 0b0000_0001;
        /// Inside `@query selector { ... }`: no runtime or local variables.
        const QUERY = 0b0000_0010;
    }
}

pub(crate) const CONST_CONTEXT: &str = "an @const block";
pub(crate) const QUERY_CONTEXT: &str = "an @query block";

/// The shape of one DSL line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Property(&'a str),
    State(PseudoClass, &'a str),
    PseudoElement(PseudoElement, &'a str),
    Screen(&'a str),
    Container(&'a str),
}

/// Everything a sub-parser needs to know about the line being parsed.
pub(crate) struct LineEnv<'a> {
    pub line: &'a str,
    pub ctx: ParseContext,
    pub theme: &'a dyn ThemeSource,
}

/// Classifies a trimmed line. Group shapes return the text between the
/// first `(` and the final `)`.
pub fn classify(line: &str) -> Result<Line<'_>, AcssError> {
    let Some(open) = line.find('(') else {
        return Ok(Line::Property(line));
    };
    let prefix = &line[..open];

    let group_body = || {
        line[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| AcssError::malformed(format!("`{prefix}(` is missing its closing `)`"), line))
    };

    if let Some(state) = PseudoClass::from_name(prefix) {
        return Ok(Line::State(state, group_body()?));
    }
    if let Some(pseudo) = PseudoElement::from_name(prefix) {
        return Ok(Line::PseudoElement(pseudo, group_body()?));
    }
    match prefix {
        "screen" => Ok(Line::Screen(group_body()?)),
        "container" => Ok(Line::Container(group_body()?)),
        _ => Ok(Line::Property(line)),
    }
}

/// Parses one line into `def`.
///
/// Blank lines are ignored. Any unknown abbreviation, malformed group or
/// context violation aborts with an error naming the line.
///
/// ```rust
/// use acss::parser::{parse_line, ParseContext};
/// use acss::types::{StyleDef, Theme};
///
/// let theme = Theme::standard();
/// let mut def = StyleDef::new();
/// parse_line("bg[red]", &mut def, ParseContext::empty(), &theme).unwrap();
/// parse_line("screen(md, p[16px])", &mut def, ParseContext::empty(), &theme).unwrap();
///
/// assert_eq!(def.base_value("background-color").as_deref(), Some("red"));
/// assert_eq!(def.screens[0].query, "(min-width:768px)");
/// ```
pub fn parse_line(
    line: &str,
    def: &mut StyleDef,
    ctx: ParseContext,
    theme: &dyn ThemeSource,
) -> Result<(), AcssError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }
    log::trace!("parse_line: {line} ({ctx:?})");

    let env = LineEnv { line, ctx, theme };
    match classify(line)? {
        Line::Property(_) => declare::parse_property_line(def, &env),
        Line::State(state, body) => state::parse_state(state, body, def, &env),
        Line::PseudoElement(pseudo, body) => pseudo::parse_pseudo(pseudo, body, def, &env),
        Line::Screen(body) => query::parse_screen(body, def, &env),
        Line::Container(body) => query::parse_container(body, def, &env),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_plain_properties() {
        assert_eq!(classify("bg[red]").unwrap(), Line::Property("bg[red]"));
        assert_eq!(
            classify("w[calc(100% - 2px)]").unwrap(),
            Line::Property("w[calc(100% - 2px)]")
        );
    }

    #[test]
    fn classifies_groups() {
        assert_eq!(
            classify("hover(c[red])").unwrap(),
            Line::State(PseudoClass::Hover, "c[red]")
        );
        assert_eq!(
            classify("focus-visible(ol[none])").unwrap(),
            Line::State(PseudoClass::FocusVisible, "ol[none]")
        );
        assert_eq!(
            classify("before(ct[x])").unwrap(),
            Line::PseudoElement(PseudoElement::Before, "ct[x]")
        );
        assert_eq!(classify("screen(md, p[1px])").unwrap(), Line::Screen("md, p[1px]"));
        assert_eq!(
            classify("container(sm, p[1px])").unwrap(),
            Line::Container("sm, p[1px]")
        );
    }

    #[test]
    fn unclosed_group_is_malformed() {
        let err = classify("hover(c[red]").unwrap_err();
        assert!(matches!(err, AcssError::Malformed { .. }));
    }
}
