//! Core data types for ACSS compilation.
//!
//! - [`abbr`]: the static abbreviation table
//! - [`pseudo`]: supported pseudo-classes and pseudo-elements
//! - [`value`]: property values with symbolic variable references
//! - [`style_def`]: the per-class compiled style definition
//! - [`theme`]: breakpoint, container and typography registries

pub mod abbr;
pub mod pseudo;
pub mod style_def;
pub mod theme;
pub mod value;

pub use pseudo::{PseudoClass, PseudoElement};
pub use style_def::{MediaBlock, NestedQuery, PropMap, StyleDef, VarMap};
pub use theme::{Theme, ThemeSource, TypographyEntry};
pub use value::{Segment, Value};
