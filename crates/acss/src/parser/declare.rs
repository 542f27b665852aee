//! Property declarations.
//!
//! Handles the plain-property line shape and the per-token resolution shared
//! by every group parser: abbreviation lookup, runtime variables, the
//! typography shorthand and value normalization.

use crate::error::{AcssError, LookupContext};
use crate::parser::line::{CONST_CONTEXT, LineEnv, ParseContext, QUERY_CONTEXT};
use crate::parser::property::{Prefix, PropertyToken, parse_property_token};
use crate::parser::values::normalize;
use crate::types::abbr::{self, TYPOGRAPHY_ABBR};
use crate::types::{PropMap, StyleDef, Value, VarMap};

const MEDIA_CONTEXT: &str = "a screen or container query";

/// Where resolved properties are written.
pub(crate) struct Target<'a> {
    pub props: &'a mut PropMap,
    /// Runtime-variable defaults; `None` where runtime variables are not
    /// supported.
    pub vars: Option<&'a mut VarMap>,
    /// Appended to runtime-variable keys (`c` becomes `c-hover`).
    pub suffix: Option<&'static str>,
    pub lookup: LookupContext,
}

/// Parses `raw` as an `abbr[value]` token, reporting failures against the
/// whole line.
pub(crate) fn parse_token<'a>(raw: &'a str, env: &LineEnv<'_>) -> Result<PropertyToken<'a>, AcssError> {
    parse_property_token(raw)
        .map(|(_, token)| token)
        .map_err(|_| AcssError::malformed(format!("expected `abbr[value]`, found `{raw}`"), env.line))
}

/// Parses a plain-property line into the base map, or a local variable
/// declaration into `local_vars`.
pub(crate) fn parse_property_line(def: &mut StyleDef, env: &LineEnv<'_>) -> Result<(), AcssError> {
    let token = parse_token(env.line, env)?;
    if token.prefix == Prefix::Local {
        return declare_local(def, token, env);
    }

    let mut target = Target {
        props: &mut def.base,
        vars: Some(&mut def.var_base),
        suffix: None,
        lookup: LookupContext::Base,
    };
    if write_property(token, &mut target, env)? {
        def.has_runtime_var = true;
    }
    Ok(())
}

fn declare_local(def: &mut StyleDef, token: PropertyToken<'_>, env: &LineEnv<'_>) -> Result<(), AcssError> {
    if env.ctx.contains(ParseContext::CONST) {
        return Err(AcssError::context("local variable", CONST_CONTEXT, env.line));
    }
    if env.ctx.contains(ParseContext::QUERY) {
        return Err(AcssError::context("local variable", QUERY_CONTEXT, env.line));
    }
    if token.important {
        return Err(AcssError::context("!important", "a local variable declaration", env.line));
    }
    if token.value.is_empty() {
        return Err(AcssError::malformed("empty value", env.line));
    }
    if def.local_vars.contains_key(token.name) {
        return Err(AcssError::DuplicateLocalVar {
            name: token.name.to_string(),
            line: env.line.to_string(),
        });
    }

    def.local_vars
        .insert(token.name.to_string(), Value::from_segments(normalize(token.value)));
    Ok(())
}

/// Parses and writes one token of a parenthesized list.
///
/// Returns `true` if the token declared a runtime variable.
pub(crate) fn write_token(raw: &str, target: &mut Target<'_>, env: &LineEnv<'_>) -> Result<bool, AcssError> {
    let token = parse_token(raw, env)?;
    write_property(token, target, env)
}

/// Resolves a parsed token into `target`.
///
/// Returns `true` if the token declared a runtime variable.
pub(crate) fn write_property(
    token: PropertyToken<'_>,
    target: &mut Target<'_>,
    env: &LineEnv<'_>,
) -> Result<bool, AcssError> {
    if token.prefix == Prefix::Local {
        return Err(AcssError::malformed(
            "local variables must be declared on their own line",
            env.line,
        ));
    }
    let empty = || AcssError::malformed(format!("empty value for `{}`", token.name), env.line);

    if token.name == TYPOGRAPHY_ABBR && token.prefix == Prefix::None {
        if token.value.is_empty() {
            return Err(empty());
        }
        expand_typography(token, target, env)?;
        return Ok(false);
    }

    let property = abbr::lookup(token.name).ok_or_else(|| AcssError::UnknownAbbreviation {
        abbr: token.name.to_string(),
        line: env.line.to_string(),
    })?;
    if token.value.is_empty() {
        return Err(empty());
    }

    if token.important && env.ctx.contains(ParseContext::CONST) {
        return Err(AcssError::context("!important", CONST_CONTEXT, env.line));
    }

    if token.prefix == Prefix::Runtime {
        write_runtime(token, property, target, env)?;
        return Ok(true);
    }

    if target.vars.as_deref().is_some_and(|vars| vars.contains_key(token.name)) {
        return Err(mixed(token.name, env));
    }

    let value = Value::from_segments(normalize(token.value)).with_important(token.important);
    if value.has_local_refs() && env.ctx.contains(ParseContext::QUERY) {
        return Err(AcssError::context("local variable", QUERY_CONTEXT, env.line));
    }
    target.props.insert(property.to_string(), value);
    Ok(false)
}

fn write_runtime(
    token: PropertyToken<'_>,
    property: &str,
    target: &mut Target<'_>,
    env: &LineEnv<'_>,
) -> Result<(), AcssError> {
    if env.ctx.contains(ParseContext::CONST) {
        return Err(AcssError::context("runtime variable", CONST_CONTEXT, env.line));
    }
    if env.ctx.contains(ParseContext::QUERY) {
        return Err(AcssError::context("runtime variable", QUERY_CONTEXT, env.line));
    }
    let Some(vars) = target.vars.as_deref_mut() else {
        return Err(AcssError::context("runtime variable", MEDIA_CONTEXT, env.line));
    };
    if token.value.contains("--&") {
        return Err(AcssError::context(
            "local variable",
            "a runtime variable default",
            env.line,
        ));
    }
    if target.props.get(property).is_some_and(|v| !v.is_runtime()) {
        return Err(mixed(token.name, env));
    }

    let key = match target.suffix {
        Some(suffix) => format!("{}-{}", token.name, suffix),
        None => token.name.to_string(),
    };
    vars.insert(token.name.to_string(), token.value.to_string());
    target
        .props
        .insert(property.to_string(), Value::runtime(key).with_important(token.important));
    Ok(())
}

fn expand_typography(token: PropertyToken<'_>, target: &mut Target<'_>, env: &LineEnv<'_>) -> Result<(), AcssError> {
    if token.important && env.ctx.contains(ParseContext::CONST) {
        return Err(AcssError::context("!important", CONST_CONTEXT, env.line));
    }

    let key = token.value.trim();
    let entry = env
        .theme
        .typography(key)
        .ok_or_else(|| AcssError::MissingThemeKey {
            kind: "typography",
            key: key.to_string(),
            context: target.lookup,
            line: env.line.to_string(),
        })?;

    for (property, value) in entry {
        if !abbr::is_canonical(property) {
            return Err(AcssError::InvalidThemeProperty {
                key: key.to_string(),
                property: property.clone(),
            });
        }
        let value = Value::from_segments(normalize(value)).with_important(token.important);
        target.props.insert(property.clone(), value);
    }
    Ok(())
}

fn mixed(abbr: &str, env: &LineEnv<'_>) -> AcssError {
    AcssError::MixedVariableForm {
        abbr: abbr.to_string(),
        line: env.line.to_string(),
    }
}
