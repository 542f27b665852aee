//! Lexer for template and class-body source.
//!
//! Converts source text into a stream of block-level tokens. Line contents
//! are not interpreted here; they are handed to the line parser untouched.

use std::ops::Range;

use crate::error::AcssError;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// One DSL line: `bg[red]`, `hover(c[blue])`
    Line(&'a str),
    /// Single-line directive: `@scope app` is `Directive { name: "scope", value: "app" }`
    Directive { name: &'a str, value: &'a str },
    /// Block header without the brace: `.box`, `@const card`, `@query > span`
    Open(&'a str),
    /// `}`
    Close,
}

/// A token plus the byte range it covers in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub span: Range<usize>,
}

/// Lexer for block-structured ACSS source.
///
/// Newlines always end a line. Braces only open or close blocks when they
/// sit outside `[...]` and `(...)`, so values such as `ct[{]` survive.
/// `/* ... */` comments are skipped.
///
/// # Examples
///
/// ```
/// use acss::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new(".box {\n  bg[red]\n}")
///     .map(|t| t.map(|t| t.token))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens, vec![Token::Open(".box"), Token::Line("bg[red]"), Token::Close]);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The full source this lexer reads from.
    pub fn source(&self) -> &'a str {
        self.input
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments. Fails on an unterminated comment.
    fn skip_trivia(&mut self) -> Result<(), AcssError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }
            if !self.remaining().starts_with("/*") {
                return Ok(());
            }
            let start = self.pos;
            match self.remaining()[2..].find("*/") {
                Some(end) => self.pos += 2 + end + 2,
                None => {
                    let snippet = self.input[start..].lines().next().unwrap_or_default();
                    return Err(AcssError::malformed("unterminated comment", snippet));
                }
            }
        }
    }

    /// Consumes up to the end of the line, a top-level brace or a comment.
    fn consume_line(&mut self) -> Spanned<'a> {
        let start = self.pos;
        let mut depth: usize = 0;

        while let Some(c) = self.peek() {
            match c {
                '\n' => break,
                '{' | '}' if depth == 0 => break,
                '/' if depth == 0 && self.remaining().starts_with("/*") => break,
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }

        let text = self.input[start..self.pos].trim();
        if self.peek() == Some('{') {
            self.advance();
            return Spanned {
                token: Token::Open(text),
                span: start..self.pos,
            };
        }

        let token = match text.strip_prefix('@') {
            Some(directive) => {
                let (name, value) = directive.split_once(char::is_whitespace).unwrap_or((directive, ""));
                Token::Directive {
                    name,
                    value: value.trim(),
                }
            }
            None => Token::Line(text),
        };
        Spanned {
            token,
            span: start..self.pos,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<'a>, AcssError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Err(err) = self.skip_trivia() {
                self.pos = self.input.len();
                return Some(Err(err));
            }
            if self.pos >= self.input.len() {
                return None;
            }

            if self.peek() == Some('}') {
                let start = self.pos;
                self.advance();
                return Some(Ok(Spanned {
                    token: Token::Close,
                    span: start..self.pos,
                }));
            }

            let spanned = self.consume_line();
            // A comment directly after code leaves nothing behind.
            if spanned.token == Token::Line("") {
                continue;
            }
            return Some(Ok(spanned));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input)
            .map(|t| t.map(|t| t.token))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn lex_lines() {
        assert_eq!(
            lex("bg[red]\n  hover(c[blue])\n"),
            vec![Token::Line("bg[red]"), Token::Line("hover(c[blue])")]
        );
    }

    #[test]
    fn lex_directives() {
        assert_eq!(
            lex("@scope app\n@bind card .a .b"),
            vec![
                Token::Directive {
                    name: "scope",
                    value: "app"
                },
                Token::Directive {
                    name: "bind",
                    value: "card .a .b"
                },
            ]
        );
    }

    #[test]
    fn lex_single_line_block() {
        assert_eq!(
            lex(".box { p[4px] }"),
            vec![Token::Open(".box"), Token::Line("p[4px]"), Token::Close]
        );
    }

    #[test]
    fn braces_inside_values_are_text() {
        assert_eq!(
            lex("before(ct[{])\nafter(ct[}])"),
            vec![Token::Line("before(ct[{])"), Token::Line("after(ct[}])")]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            lex("/* header */\n.box {\n  c[red] /* trailing */\n  /* own line */\n}"),
            vec![Token::Open(".box"), Token::Line("c[red]"), Token::Close]
        );
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let result: Result<Vec<_>, _> = Lexer::new(".box { /* open").collect();
        assert!(matches!(result, Err(AcssError::Malformed { .. })));
    }

    #[test]
    fn spans_cover_the_source() {
        let source = ".box {\n  c[red]\n}";
        let spans: Vec<_> = Lexer::new(source).map(|t| t.unwrap().span).collect();
        assert_eq!(&source[spans[0].clone()], ".box {");
        assert_eq!(&source[spans[1].clone()], "c[red]");
        assert_eq!(&source[spans[2].clone()], "}");
    }
}
