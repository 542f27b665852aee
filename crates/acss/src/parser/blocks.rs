//! Recursive-descent parsing of template and class-body structure.
//!
//! A template holds top-level directives (`@scope`, `@bind`), named
//! `@const` blocks and `.class` blocks:
//!
//! ```text
//! @scope app
//! @bind card .panel .shadow
//!
//! @const rounded {
//!   br[8px]
//! }
//!
//! .panel {
//!   @use rounded
//!   p[16px]
//!   @query > h2 {
//!     fs[20px]
//!   }
//! }
//! ```
//!
//! Class and const bodies are captured as raw text here and parsed on their
//! own by [`parse_class_body`] and [`parse_const_body`], so a host can also
//! compile a single body without a surrounding template.

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, recognize},
    multi::separated_list1,
    sequence::{pair, preceded},
};

use crate::error::AcssError;
use crate::parser::lexer::{Lexer, Spanned, Token};

/// `@bind key .classA .classB`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bind<'a> {
    pub key: &'a str,
    pub classes: Vec<&'a str>,
}

/// A named block whose body is kept as raw source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// The top-level structure of a template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template<'a> {
    pub scope: Option<&'a str>,
    pub binds: Vec<Bind<'a>>,
    pub consts: Vec<RawBlock<'a>>,
    pub classes: Vec<RawBlock<'a>>,
}

/// A nested `@query selector { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBlock<'a> {
    pub selector: &'a str,
    pub lines: Vec<&'a str>,
}

/// The contents of one class body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassBody<'a> {
    /// Constants named by the class's `@use` line, in mixin order.
    pub uses: Vec<&'a str>,
    pub lines: Vec<&'a str>,
    pub queries: Vec<QueryBlock<'a>>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char)(input)
}

fn class_ref(input: &str) -> IResult<&str, &str> {
    preceded(char('.'), ident)(input)
}

/// `key .a .b`
fn bind_value(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    all_consuming(pair(
        ident,
        preceded(multispace1, separated_list1(multispace1, class_ref)),
    ))(input)
}

/// `name` or `.name`, with surrounding whitespace.
fn header_name<'a>(input: &'a str, dotted: bool) -> Option<&'a str> {
    let parser = |i: &'a str| -> IResult<&'a str, &'a str> {
        let (i, _) = multispace0(i)?;
        let (i, name) = if dotted { class_ref(i)? } else { ident(i)? };
        let (i, _) = multispace0(i)?;
        Ok((i, name))
    };
    all_consuming(parser)(input).ok().map(|(_, name)| name)
}

/// Strips `keyword` when it is followed by whitespace or nothing.
fn strip_keyword<'a>(header: &'a str, keyword: &str) -> Option<&'a str> {
    header
        .strip_prefix(keyword)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Returns `true` if `name` is a valid class, const, scope or bind name.
pub fn is_ident(name: &str) -> bool {
    all_consuming(recognize(ident))(name).is_ok()
}

/// Parses the top-level structure of a template.
///
/// ```
/// use acss::parser::parse_template;
///
/// let template = parse_template("@scope app\n.box {\n  p[4px]\n}").unwrap();
/// assert_eq!(template.scope, Some("app"));
/// assert_eq!(template.classes[0].name, "box");
/// assert_eq!(template.classes[0].body.trim(), "p[4px]");
/// ```
pub fn parse_template(source: &str) -> Result<Template<'_>, AcssError> {
    BlockParser::new(source).template()
}

/// Parses a class body into its `@use` line, plain lines and `@query` blocks.
pub fn parse_class_body(body: &str) -> Result<ClassBody<'_>, AcssError> {
    BlockParser::new(body).class_body()
}

/// Parses a const body into its lines. Directives and nested blocks are
/// rejected.
pub fn parse_const_body<'a>(name: &str, body: &'a str) -> Result<Vec<&'a str>, AcssError> {
    BlockParser::new(body).flat_body(&format!("@const {name}"))
}

struct BlockParser<'a> {
    source: &'a str,
    tokens: Lexer<'a>,
}

impl<'a> BlockParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Lexer::new(source),
        }
    }

    fn next(&mut self) -> Result<Option<Spanned<'a>>, AcssError> {
        self.tokens.next().transpose()
    }

    /// Consumes up to the `}` matching an already-consumed `{` and returns
    /// the raw text in between.
    fn raw_body(&mut self, header: &str, body_start: usize) -> Result<&'a str, AcssError> {
        let mut depth = 1usize;
        loop {
            let Some(spanned) = self.next()? else {
                return Err(AcssError::malformed("block is never closed", header));
            };
            match spanned.token {
                Token::Open(_) => depth += 1,
                Token::Close => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(&self.source[body_start..spanned.span.start]);
                    }
                }
                Token::Line(_) | Token::Directive { .. } => {}
            }
        }
    }

    /// Collects lines up to the closing `}` (or end of input when `closed`
    /// is false), rejecting directives and nested blocks.
    fn lines_until_close(&mut self, header: &str, closed: bool) -> Result<Vec<&'a str>, AcssError> {
        let mut lines = Vec::new();
        loop {
            let Some(spanned) = self.next()? else {
                if closed {
                    return Err(AcssError::malformed("block is never closed", header));
                }
                return Ok(lines);
            };
            match spanned.token {
                Token::Line(line) => lines.push(line),
                Token::Close if closed => return Ok(lines),
                Token::Close => return Err(AcssError::malformed("unmatched `}`", header)),
                Token::Directive { name, .. } => {
                    return Err(AcssError::malformed(
                        format!("@{name} is not allowed inside `{header}`"),
                        &self.source[spanned.span],
                    ));
                }
                Token::Open(inner) => {
                    return Err(AcssError::malformed(
                        format!("`{inner}` blocks cannot be nested inside `{header}`"),
                        &self.source[spanned.span],
                    ));
                }
            }
        }
    }

    fn flat_body(mut self, header: &str) -> Result<Vec<&'a str>, AcssError> {
        self.lines_until_close(header, false)
    }

    fn template(mut self) -> Result<Template<'a>, AcssError> {
        let mut template = Template::default();

        let source = self.source;
        while let Some(spanned) = self.next()? {
            let text = &source[spanned.span.clone()];
            match spanned.token {
                Token::Directive { name: "scope", value } => {
                    if template.scope.is_some() {
                        return Err(AcssError::malformed("only one @scope is allowed per template", text));
                    }
                    if !is_ident(value) {
                        return Err(AcssError::malformed("@scope needs a single name", text));
                    }
                    template.scope = Some(value);
                }
                Token::Directive { name: "bind", value } => {
                    let (_, (key, classes)) = bind_value(value)
                        .map_err(|_| AcssError::malformed("expected `@bind key .class ...`", text))?;
                    template.binds.push(Bind { key, classes });
                }
                Token::Directive { name: "use", .. } => {
                    return Err(AcssError::malformed("@use is only valid inside a class body", text));
                }
                Token::Directive { name, .. } => {
                    return Err(AcssError::malformed(format!("unexpected directive @{name}"), text));
                }
                Token::Open(header) => {
                    let body_start = spanned.span.end;
                    if let Some(rest) = strip_keyword(header, "@const") {
                        let name = header_name(rest, false)
                            .ok_or_else(|| AcssError::malformed("expected `@const name {`", text))?;
                        if template.consts.iter().any(|c| c.name == name) {
                            return Err(AcssError::DuplicateConst { name: name.to_string() });
                        }
                        let body = self.raw_body(header, body_start)?;
                        template.consts.push(RawBlock { name, body });
                    } else if let Some(name) = header_name(header, true) {
                        let body = self.raw_body(header, body_start)?;
                        template.classes.push(RawBlock { name, body });
                    } else {
                        return Err(AcssError::malformed(
                            format!("unexpected block `{header}`; expected `.class` or `@const name`"),
                            text,
                        ));
                    }
                }
                Token::Line(line) => {
                    return Err(AcssError::malformed("property line outside of a block", line));
                }
                Token::Close => {
                    return Err(AcssError::malformed("unmatched `}`", text));
                }
            }
        }

        log::debug!(
            "parsed template: {} const(s), {} class(es), {} bind(s)",
            template.consts.len(),
            template.classes.len(),
            template.binds.len()
        );
        Ok(template)
    }

    fn class_body(mut self) -> Result<ClassBody<'a>, AcssError> {
        let mut body = ClassBody::default();
        let mut seen_use = false;

        let source = self.source;
        while let Some(spanned) = self.next()? {
            let text = &source[spanned.span.clone()];
            match spanned.token {
                Token::Line(line) => body.lines.push(line),
                Token::Directive { name: "use", value } => {
                    if seen_use {
                        return Err(AcssError::malformed("a class may have only one @use line", text));
                    }
                    seen_use = true;
                    body.uses = value.split_whitespace().collect();
                    if body.uses.is_empty() || !body.uses.iter().all(|name| is_ident(name)) {
                        return Err(AcssError::malformed("expected `@use name ...`", text));
                    }
                }
                Token::Directive { name, .. } => {
                    return Err(AcssError::malformed(
                        format!("@{name} is not allowed inside a class body"),
                        text,
                    ));
                }
                Token::Open(header) => {
                    let Some(selector) = strip_keyword(header, "@query").map(str::trim) else {
                        return Err(AcssError::malformed(
                            format!("unexpected block `{header}` inside a class body"),
                            text,
                        ));
                    };
                    if selector.is_empty() {
                        return Err(AcssError::malformed("@query needs a selector", text));
                    }
                    let lines = self.lines_until_close(header, true)?;
                    body.queries.push(QueryBlock { selector, lines });
                }
                Token::Close => {
                    return Err(AcssError::malformed("unmatched `}`", text));
                }
            }
        }
        Ok(body)
    }
}
