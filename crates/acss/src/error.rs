//! Error types for ACSS compilation.
//!
//! Every error is fail-fast: it aborts the class, const or template being
//! compiled and is returned to the immediate caller. Variants that originate
//! from source text carry the offending line verbatim so the host can point
//! at it without re-parsing.

use std::fmt;

use thiserror::Error;

/// Where a theme lookup was made from.
///
/// Used in [`AcssError::MissingThemeKey`] so the message names both the
/// missing key and the construct that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupContext {
    Base,
    State,
    Pseudo,
    Screen,
    Container,
}

impl fmt::Display for LookupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupContext::Base => "base",
            LookupContext::State => "state",
            LookupContext::Pseudo => "pseudo",
            LookupContext::Screen => "screen",
            LookupContext::Container => "container",
        };
        f.write_str(name)
    }
}

/// Coarse error category, one per failure class a host may want to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownAbbreviation,
    MalformedSyntax,
    ContextViolation,
    DuplicateDeclaration,
    UniquenessViolation,
    MissingThemeKey,
}

/// Errors that can occur while compiling ACSS source.
///
/// # Examples
///
/// ```rust
/// use acss::{AcssError, ErrorKind, Session};
///
/// let mut session = Session::default();
/// let err = session.compile_template(".box {\n  nope[1px]\n}").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownAbbreviation);
/// assert!(matches!(err, AcssError::UnknownAbbreviation { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcssError {
    /// An abbreviation token is not present in the abbreviation table.
    #[error("unknown abbreviation `{abbr}` in `{line}`")]
    UnknownAbbreviation { abbr: String, line: String },

    /// The source does not follow the DSL grammar.
    #[error("malformed syntax: {message} in `{line}`")]
    Malformed { message: String, line: String },

    /// The first argument of `screen(...)` / `container(...)` does not
    /// resolve to `min-width` or `max-width`.
    #[error("query condition `{condition}` must resolve to min-width or max-width in `{line}`")]
    InvalidQueryCondition { condition: String, line: String },

    /// Two `@const` blocks share a name.
    #[error("duplicate @const block `{name}`")]
    DuplicateConst { name: String },

    /// A construct was used where the surrounding block forbids it.
    #[error("{feature} is not allowed in {context}: `{line}`")]
    ContextViolation {
        feature: &'static str,
        context: &'static str,
        line: String,
    },

    /// A local variable was declared twice within one class.
    #[error("local variable `--&{name}` is already declared in `{line}`")]
    DuplicateLocalVar { name: String, line: String },

    /// An abbreviation was used both as a runtime variable and as a plain
    /// property within one property map.
    #[error("`{abbr}` is declared both as `${abbr}` and as a plain property in `{line}`")]
    MixedVariableForm { abbr: String, line: String },

    /// A `--&name` reference has no matching declaration in its class.
    #[error("local variable `--&{name}` is not declared in class `{class}`")]
    UndeclaredLocalVar { name: String, class: String },

    /// `@use` names a constant that was never defined.
    #[error("unknown constant `{name}` in `{line}`")]
    UnknownConst { name: String, line: String },

    /// `@bind` key collides with a class name or an earlier bind.
    #[error("@bind key `{key}` is already defined")]
    DuplicateBind { key: String },

    /// `@bind` references a class that is not defined in the template.
    #[error("@bind `{key}` references undefined class `.{class}`")]
    UnknownBindClass { key: String, class: String },

    /// A scope was registered twice (strict mode).
    #[error("scope `{scope}` has already been declared")]
    DuplicateScope { scope: String },

    /// A class was compiled twice under the same scope (strict mode).
    #[error("class `{class}` has already been declared in scope `{scope}`")]
    DuplicateScopeClass { scope: String, class: String },

    /// A breakpoint, container or typography key is not registered.
    #[error("unknown {kind} key `{key}` referenced from {context} in `{line}`")]
    MissingThemeKey {
        kind: &'static str,
        key: String,
        context: LookupContext,
        line: String,
    },

    /// A typography entry expands to something that is not a CSS property
    /// known to the abbreviation table.
    #[error("typography key `{key}` expands to unknown property `{property}`")]
    InvalidThemeProperty { key: String, property: String },
}

impl AcssError {
    /// Builds a [`AcssError::Malformed`] for the given line.
    pub fn malformed(message: impl Into<String>, line: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            line: line.into(),
        }
    }

    /// Builds a [`AcssError::ContextViolation`] for the given line.
    pub fn context(feature: &'static str, context: &'static str, line: impl Into<String>) -> Self {
        Self::ContextViolation {
            feature,
            context,
            line: line.into(),
        }
    }

    /// Returns the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AcssError::UnknownAbbreviation { .. } => ErrorKind::UnknownAbbreviation,
            AcssError::Malformed { .. }
            | AcssError::InvalidQueryCondition { .. }
            | AcssError::DuplicateConst { .. }
            | AcssError::UnknownConst { .. } => ErrorKind::MalformedSyntax,
            AcssError::ContextViolation { .. } => ErrorKind::ContextViolation,
            AcssError::DuplicateLocalVar { .. }
            | AcssError::MixedVariableForm { .. }
            | AcssError::UndeclaredLocalVar { .. }
            | AcssError::DuplicateBind { .. }
            | AcssError::UnknownBindClass { .. } => ErrorKind::DuplicateDeclaration,
            AcssError::DuplicateScope { .. } | AcssError::DuplicateScopeClass { .. } => {
                ErrorKind::UniquenessViolation
            }
            AcssError::MissingThemeKey { .. } | AcssError::InvalidThemeProperty { .. } => {
                ErrorKind::MissingThemeKey
            }
        }
    }
}

/// A rule rejected by a [`StyleSink`](crate::sink::StyleSink).
///
/// Sink errors never abort a flush; they are logged and counted.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("rule rejected by sink: {reason}")]
pub struct SinkError {
    pub rule: String,
    pub reason: String,
}

impl SinkError {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}
