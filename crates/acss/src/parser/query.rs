//! `screen(...)` and `container(...)` lines.
//!
//! Both take a width condition followed by a comma and a property list:
//!
//! ```text
//! screen(md, p[16px])                -> @media only screen and (min-width:768px)
//! container(max-w[600px], d[none])   -> @container (max-width:600px)
//! ```
//!
//! A bare condition is an alias resolved through the theme. The explicit form
//! accepts `min-w`/`max-w` and the short `min`/`max`.

use crate::error::{AcssError, LookupContext};
use crate::parser::declare::{Target, parse_token, write_token};
use crate::parser::line::LineEnv;
use crate::parser::property::Prefix;
use crate::parser::tokens::split_tokens;
use crate::types::{MediaBlock, PropMap, StyleDef, abbr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaKind {
    Screen,
    Container,
}

impl MediaKind {
    fn name(self) -> &'static str {
        match self {
            MediaKind::Screen => "screen",
            MediaKind::Container => "container",
        }
    }

    fn lookup_context(self) -> LookupContext {
        match self {
            MediaKind::Screen => LookupContext::Screen,
            MediaKind::Container => LookupContext::Container,
        }
    }
}

pub(crate) fn parse_screen(body: &str, def: &mut StyleDef, env: &LineEnv<'_>) -> Result<(), AcssError> {
    let block = parse_media(MediaKind::Screen, body, env)?;
    def.screens.push(block);
    Ok(())
}

pub(crate) fn parse_container(body: &str, def: &mut StyleDef, env: &LineEnv<'_>) -> Result<(), AcssError> {
    let block = parse_media(MediaKind::Container, body, env)?;
    def.containers.push(block);
    Ok(())
}

fn parse_media(kind: MediaKind, body: &str, env: &LineEnv<'_>) -> Result<MediaBlock, AcssError> {
    let Some((condition, list)) = body.split_once(',') else {
        return Err(AcssError::malformed(
            format!("`{}(...)` needs a comma between the condition and the properties", kind.name()),
            env.line,
        ));
    };

    let condition = condition.trim();
    if condition.is_empty() {
        return Err(AcssError::malformed(
            format!("`{}(...)` has an empty condition", kind.name()),
            env.line,
        ));
    }
    let query = parse_condition(kind, condition, env)?;

    let tokens = split_tokens(list);
    if tokens.is_empty() {
        return Err(AcssError::malformed(
            format!("`{}(...)` has no properties", kind.name()),
            env.line,
        ));
    }

    let mut props = PropMap::new();
    let mut target = Target {
        props: &mut props,
        vars: None,
        suffix: None,
        lookup: kind.lookup_context(),
    };
    for token in tokens {
        write_token(token, &mut target, env)?;
    }

    Ok(MediaBlock { query, props })
}

/// Resolves a condition to a `(property:value)` fragment.
fn parse_condition(kind: MediaKind, condition: &str, env: &LineEnv<'_>) -> Result<String, AcssError> {
    let resolved = if condition.contains('[') {
        condition
    } else {
        let found = match kind {
            MediaKind::Screen => env.theme.breakpoint(condition),
            MediaKind::Container => env.theme.container(condition),
        };
        found.ok_or_else(|| AcssError::MissingThemeKey {
            kind: match kind {
                MediaKind::Screen => "breakpoint",
                MediaKind::Container => "container",
            },
            key: condition.to_string(),
            context: kind.lookup_context(),
            line: env.line.to_string(),
        })?
    };

    let invalid = || AcssError::InvalidQueryCondition {
        condition: condition.to_string(),
        line: env.line.to_string(),
    };

    let token = parse_token(resolved, env)?;
    let property = match token.name {
        "min" => "min-width",
        "max" => "max-width",
        name => abbr::lookup(name).ok_or_else(|| AcssError::UnknownAbbreviation {
            abbr: name.to_string(),
            line: env.line.to_string(),
        })?,
    };
    if token.prefix != Prefix::None || token.important || token.value.trim().is_empty() {
        return Err(invalid());
    }
    if !abbr::is_query_property(property) {
        return Err(invalid());
    }

    Ok(format!("({property}:{})", token.value.trim()))
}
