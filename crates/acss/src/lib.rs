//! # ACSS - Abbreviated CSS Compiler
//!
//! A compiler for a compact abbreviation syntax for CSS. Class bodies are
//! written as one abbreviation per line and compiled into minified CSS under
//! stable, hashed class names.
//!
//! - **Parsing**: lines, property groups and block structure ([`parser`])
//! - **Compilation**: `@use` mixins, name finalization and scope tracking
//!   ([`compiler`], [`Session`])
//! - **Output**: deterministic CSS text ([`serializer`]) handed to a
//!   [`StyleSink`](sink::StyleSink)
//!
//! ## Quick Start
//!
//! ```rust
//! use acss::Session;
//!
//! let source = r#"
//!     @scope app
//!
//!     @const rounded {
//!         br[8px]
//!     }
//!
//!     .card {
//!         @use rounded
//!         p[16px]
//!         bg[white]
//!         hover($sh[0 2px 8px black])
//!         screen(md, p[24px])
//!     }
//! "#;
//!
//! let mut session = Session::default();
//! let sheet = session.compile_template(source).expect("valid ACSS");
//!
//! let card = &sheet.classes["card"];
//! assert!(sheet.css.contains(&format!(".{card}{{padding:16px;background-color:white;border-radius:8px}}")));
//! assert!(sheet.css.contains("@media only screen and (min-width:768px)"));
//! ```
//!
//! ## Syntax
//!
//! ### Lines
//! - Property: `bg[red]`, `p[8px]!` (important)
//! - Runtime variable: `$c[blue]`, settable later through a custom property
//! - Local variable: `--&gap[4px]`, referenced as `--&gap`
//! - State: `hover(c[red] bg[blue])`
//! - Pseudo-element: `before(ct[*] c[gray])`
//! - Screen: `screen(md, p[16px])`, `screen(max-w[600px], d[none])`
//! - Container: `container(min-w[500px], p[8px])`
//!
//! ### Directives
//! - `@scope name`: namespace for duplicate detection and hashing
//! - `@bind key .a .b`: alias for several classes
//! - `@const name { ... }`: reusable fragment
//! - `@use a b`: mix constants into a class
//! - `@query selector { ... }`: rules for descendants of a class
//!
//! ## Modules
//!
//! - [`parser`]: lexer, block parser and line parser
//! - [`compiler`]: sessions, mixins and name finalization
//! - [`serializer`]: CSS text generation
//! - [`sink`]: destinations for compiled rules
//! - [`types`]: style definitions, values, pseudo selectors and themes
//! - [`hash`]: display-name hashing
//! - [`config`]: compile options
//! - [`error`]: error types

pub mod compiler;
pub mod config;
pub mod error;
pub mod hash;
pub mod parser;
pub mod serializer;
pub mod sink;
pub mod types;

pub use compiler::{CompiledClass, CompiledSheet, ConstRegistry, Diagnostic, Session};
pub use config::{CompileMode, CompileOptions};
pub use error::{AcssError, ErrorKind, LookupContext, SinkError};
pub use types::{StyleDef, Theme, ThemeSource};
