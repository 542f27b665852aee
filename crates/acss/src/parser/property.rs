//! The `abbr[value]` grammar.
//!
//! ```text
//! token     := prefix? name '[' value ']' '!'?
//! prefix    := '$' | '--&'
//! name      := [A-Za-z0-9_-]+
//! value     := any text, greedy up to the final ']'
//! ```
//!
//! The value is greedy so nested brackets and parentheses survive:
//! `gd-cols[[full] 1fr [end]]` keeps `[full] 1fr [end]` intact.

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::char,
    error::{Error, ErrorKind},
};

/// How a property token is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// `abbr[value]`
    None,
    /// `$abbr[value]`: runtime variable
    Runtime,
    /// `--&name[value]`: local variable declaration
    Local,
}

/// A parsed `abbr[value]` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyToken<'a> {
    pub prefix: Prefix,
    pub name: &'a str,
    pub value: &'a str,
    pub important: bool,
}

fn is_head_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '$' | '&')
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_')
}

fn fail(input: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(input, ErrorKind::Verify))
}

/// Parses a complete `abbr[value]` token, consuming all input.
pub fn parse_property_token(input: &str) -> IResult<&str, PropertyToken<'_>> {
    let (rest, head) = take_while1(is_head_char)(input)?;
    let (rest, _) = char('[')(rest)?;

    let (value, important) = if let Some(value) = rest.strip_suffix("]!") {
        (value, true)
    } else if let Some(value) = rest.strip_suffix(']') {
        (value, false)
    } else {
        return Err(fail(rest));
    };

    let (prefix, name) = if let Some(name) = head.strip_prefix("--&") {
        (Prefix::Local, name)
    } else if let Some(name) = head.strip_prefix('$') {
        (Prefix::Runtime, name)
    } else {
        (Prefix::None, head)
    };

    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(fail(head));
    }

    Ok((
        "",
        PropertyToken {
            prefix,
            name,
            value,
            important,
        },
    ))
}
