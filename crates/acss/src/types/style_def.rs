//! The compiled artifact for one class or nested query.

use indexmap::IndexMap;

use crate::types::pseudo::{PseudoClass, PseudoElement};
use crate::types::value::Value;

/// Canonical CSS property name to value, in insertion order.
pub type PropMap = IndexMap<String, Value>;

/// Runtime-variable abbreviation to its raw default value.
pub type VarMap = IndexMap<String, String>;

/// A `screen(...)` or `container(...)` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaBlock {
    /// Condition fragment, e.g. `(min-width:768px)`.
    pub query: String,
    pub props: PropMap,
}

/// A nested `@query <selector> { ... }` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NestedQuery {
    /// Selector text as written, emitted after the parent class.
    pub selector: String,
    pub style: StyleDef,
}

/// The parsed styling intent of one class before serialization.
///
/// Created fresh per compilation, mutated by parsing, merging and name
/// finalization, then handed to the serializer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDef {
    pub base: PropMap,
    pub states: IndexMap<PseudoClass, PropMap>,
    pub screens: Vec<MediaBlock>,
    pub containers: Vec<MediaBlock>,
    pub pseudos: IndexMap<PseudoElement, PropMap>,
    pub var_base: VarMap,
    pub var_states: IndexMap<PseudoClass, VarMap>,
    pub var_pseudos: IndexMap<PseudoElement, VarMap>,
    /// Class-local variables by declared name (without the `--&` prefix).
    pub local_vars: IndexMap<String, Value>,
    /// Final custom-property declarations for `:root`, filled by finalization.
    pub root_vars: IndexMap<String, String>,
    pub queries: Vec<NestedQuery>,
    pub has_runtime_var: bool,
}

impl StyleDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing would be emitted for this definition.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
            && self.states.values().all(|p| p.is_empty())
            && self.screens.is_empty()
            && self.containers.is_empty()
            && self.pseudos.values().all(|p| p.is_empty())
            && self.local_vars.is_empty()
            && self.root_vars.is_empty()
            && self.queries.is_empty()
    }

    /// Convenience accessor for a base property rendered as text.
    pub fn base_value(&self, property: &str) -> Option<String> {
        self.base.get(property).map(|v| v.to_string())
    }

    /// Convenience accessor for a state property rendered as text.
    pub fn state_value(&self, state: PseudoClass, property: &str) -> Option<String> {
        self.states
            .get(&state)
            .and_then(|props| props.get(property))
            .map(|v| v.to_string())
    }
}
