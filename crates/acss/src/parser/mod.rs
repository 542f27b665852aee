//! ACSS parsing.
//!
//! Parsing happens at two levels:
//!
//! - Block structure: [`Lexer`] turns source into lines, directives and
//!   braces; [`parse_template`], [`parse_class_body`] and
//!   [`parse_const_body`] build on it.
//! - Lines: [`parse_line`] classifies one line and writes it into a
//!   [`StyleDef`](crate::types::StyleDef).
//!
//! ## Submodules
//!
//! - [`lexer`]: block-level tokens with byte spans
//! - [`blocks`]: templates, class bodies and const bodies
//! - [`line`]: line classification and dispatch
//! - [`property`]: the `abbr[value]` token grammar
//! - [`tokens`]: splitting of parenthesized property lists
//! - [`values`]: value normalization
//!
//! ## Example
//!
//! ```rust
//! use acss::parser::{parse_line, ParseContext};
//! use acss::types::{PseudoClass, StyleDef, Theme};
//!
//! let theme = Theme::standard();
//! let mut def = StyleDef::new();
//! parse_line("hover(c[red] bd[1px solid red])", &mut def, ParseContext::empty(), &theme).unwrap();
//!
//! assert_eq!(def.state_value(PseudoClass::Hover, "border").as_deref(), Some("1px solid red"));
//! ```

pub mod blocks;
pub mod lexer;
pub mod line;
pub mod property;
pub mod tokens;
pub mod values;

mod declare;
mod pseudo;
mod query;
mod state;

pub use crate::parser::blocks::{
    Bind, ClassBody, QueryBlock, RawBlock, Template, is_ident, parse_class_body, parse_const_body,
    parse_template,
};
pub use crate::parser::lexer::{Lexer, Spanned, Token};
pub use crate::parser::line::{Line, ParseContext, classify, parse_line};
pub use crate::parser::property::{Prefix, PropertyToken, parse_property_token};
pub use crate::parser::tokens::split_tokens;
pub use crate::parser::values::{normalize, normalize_text};
