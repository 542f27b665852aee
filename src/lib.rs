//! Abbreviated CSS for Rust hosts.
//!
//! This crate re-exports the [`acss`] compiler and adds a one-call helper
//! for server-side rendering.
//!
//! ```rust
//! use acss_rs::render_style_tag;
//!
//! let html = render_style_tag("@scope page\n.title {\n  fw[700]\n}", "acss").unwrap();
//! assert!(html.starts_with(r#"<style data-acss="ssr">.title_"#));
//! assert!(html.ends_with("{font-weight:700}</style>"));
//! ```

pub mod error;

pub use acss::*;
pub use error::Result;

use acss::sink::StringSink;

/// Compiles `source` in a fresh session and wraps the CSS in an SSR
/// `<style data-{attr}="ssr">` tag.
pub fn render_style_tag(source: &str, attr: &str) -> Result<String> {
    let mut session = Session::default();
    session.compile_template(source)?;

    let mut sink = StringSink::new();
    session.flush(&mut sink);
    Ok(sink.into_style_tag(attr))
}
