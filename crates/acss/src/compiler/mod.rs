//! Class, const and template compilation.
//!
//! [`Session`] drives the pipeline for each class:
//!
//! 1. parse the body into a [`StyleDef`] with symbolic variable references
//! 2. merge `@use` constants ([`merge_all`])
//! 3. assign the display name ([`display_name`])
//! 4. resolve symbolic references ([`finalize`])
//! 5. serialize and queue the rules

pub mod finalize;
pub mod merge;
pub mod registry;
pub mod session;

use indexmap::IndexMap;

use crate::hash::identifier;
use crate::types::StyleDef;

pub use finalize::{finalize, local_var_name, runtime_var_name};
pub use merge::{merge_all, merge_into};
pub use registry::ConstRegistry;
pub use session::{Diagnostic, Session, SessionSnapshot};

/// The generated class name for `class` in `scope`.
///
/// The hash key is `{scope}:{class}`; classes compiled without a scope hash
/// `:{class}`.
///
/// ```rust
/// use acss::compiler::display_name;
/// use acss::hash::DEFAULT_SEED;
///
/// let app = display_name(DEFAULT_SEED, "app", "box");
/// let shop = display_name(DEFAULT_SEED, "shop", "box");
/// assert!(app.starts_with("box_"));
/// assert_ne!(app, shop);
/// ```
pub fn display_name(seed: u32, scope: &str, class: &str) -> String {
    format!("{class}_{}", identifier(seed, &format!("{scope}:{class}")))
}

/// One compiled class.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledClass {
    pub display_name: String,
    /// All rules of the class, concatenated.
    pub css: String,
    /// The finalized definition the CSS was generated from.
    pub style: StyleDef,
    /// Runtime-variable key (`c`, `c-hover`) to custom-property name.
    pub runtime_vars: IndexMap<String, String>,
}

/// The result of compiling a template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledSheet {
    pub scope: Option<String>,
    /// Class name or `@bind` key to the class attribute value to use.
    pub classes: IndexMap<String, String>,
    pub css: String,
    /// Runtime variables per class name, for classes that declare any.
    pub runtime_vars: IndexMap<String, IndexMap<String, String>>,
}
