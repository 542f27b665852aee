//! CSS text generation.
//!
//! Output is minified: no whitespace beyond what a rule needs, no trailing
//! `;` in a declaration block. Rules are emitted in a fixed order:
//!
//! 1. `:root{...}` with runtime-variable defaults
//! 2. `.name{...}` with local-variable declarations, then base properties
//! 3. `.name:state{...}` per state, in declaration order
//! 4. `@media only screen and (...){.name{...}}` per screen block
//! 5. `@container (...){.name{...}}` per container block
//! 6. `.name::pseudo{...}` per pseudo-element
//! 7. the same for every `@query` child, under `.name <selector>`

use crate::compiler::local_var_name;
use crate::types::{PropMap, StyleDef};

/// Serializes a finalized definition into one CSS string.
///
/// ```rust
/// use acss::serializer::serialize;
/// use acss::types::{StyleDef, Value};
///
/// let mut def = StyleDef::new();
/// def.base.insert("color".into(), Value::text("red"));
/// def.base.insert("padding".into(), Value::text("4px").with_important(true));
///
/// assert_eq!(serialize("box_a", &def), ".box_a{color:red;padding:4px!important}");
/// ```
pub fn serialize(display_name: &str, def: &StyleDef) -> String {
    serialize_rules(display_name, def).concat()
}

/// Serializes a finalized definition into individual rules, in emission
/// order. Each entry is one complete top-level rule.
pub fn serialize_rules(display_name: &str, def: &StyleDef) -> Vec<String> {
    let mut rules = Vec::new();
    emit(&format!(".{display_name}"), display_name, def, &mut rules);
    for rule in &rules {
        log::trace!("emit: {rule}");
    }
    rules
}

fn emit(selector: &str, display_name: &str, def: &StyleDef, rules: &mut Vec<String>) {
    if !def.root_vars.is_empty() {
        let decls: Vec<String> = def.root_vars.iter().map(|(k, v)| format!("{k}:{v}")).collect();
        rules.push(format!(":root{{{}}}", decls.join(";")));
    }

    let mut base: Vec<String> = def
        .local_vars
        .iter()
        .map(|(name, value)| format!("{}:{value}", local_var_name(name, display_name)))
        .collect();
    base.extend(declarations(&def.base));
    if !base.is_empty() {
        rules.push(format!("{selector}{{{}}}", base.join(";")));
    }

    for (state, props) in &def.states {
        if !props.is_empty() {
            rules.push(format!("{selector}:{state}{{{}}}", block(props)));
        }
    }

    for screen in &def.screens {
        rules.push(format!(
            "@media only screen and {}{{{selector}{{{}}}}}",
            screen.query,
            block(&screen.props)
        ));
    }

    for container in &def.containers {
        rules.push(format!(
            "@container {}{{{selector}{{{}}}}}",
            container.query,
            block(&container.props)
        ));
    }

    for (pseudo, props) in &def.pseudos {
        if !props.is_empty() {
            rules.push(format!("{selector}::{pseudo}{{{}}}", block(props)));
        }
    }

    for query in &def.queries {
        let child = format!("{selector} {}", query.selector);
        emit(&child, display_name, &query.style, rules);
    }
}

fn declarations(props: &PropMap) -> impl Iterator<Item = String> + '_ {
    props.iter().map(|(prop, value)| format!("{prop}:{value}"))
}

fn block(props: &PropMap) -> String {
    declarations(props).collect::<Vec<_>>().join(";")
}
