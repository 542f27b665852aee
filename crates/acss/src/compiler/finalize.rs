//! Name finalization.
//!
//! Parsing leaves local-variable references and runtime-variable
//! placeholders symbolic because the display name is not known yet. Once it
//! is, a single pass rewrites every [`Segment`] into text and fills
//! `root_vars` with the runtime-variable defaults.

use indexmap::IndexMap;

use crate::error::AcssError;
use crate::parser::normalize_text;
use crate::types::{PropMap, Segment, StyleDef, Value};

/// Custom-property name of a class-local variable.
pub fn local_var_name(name: &str, display_name: &str) -> String {
    format!("--{name}-{display_name}")
}

/// Custom-property name of a runtime variable.
pub fn runtime_var_name(key: &str, display_name: &str) -> String {
    format!("--{key}-{display_name}")
}

/// Resolves every symbolic value in `def` against `display_name`.
///
/// Returns the runtime variables of the class: placeholder key (`c`,
/// `c-hover`) to the custom property a host sets to change it.
pub fn finalize(
    def: &mut StyleDef,
    display_name: &str,
    class: &str,
) -> Result<IndexMap<String, String>, AcssError> {
    let locals: Vec<String> = def.local_vars.keys().cloned().collect();
    let resolver = Resolver {
        display_name,
        class,
        locals: &locals,
    };

    for value in def.local_vars.values_mut() {
        resolver.resolve(value)?;
    }
    resolver.resolve_all(def)?;

    let mut runtime_vars = IndexMap::new();
    let suffixed_states = def
        .var_states
        .iter()
        .map(|(state, vars)| (Some(state.as_str()), vars));
    let suffixed_pseudos = def
        .var_pseudos
        .iter()
        .map(|(pseudo, vars)| (Some(pseudo.as_str()), vars));

    for (suffix, vars) in std::iter::once((None, &def.var_base))
        .chain(suffixed_states)
        .chain(suffixed_pseudos)
    {
        for (abbr, raw) in vars {
            let key = match suffix {
                Some(suffix) => format!("{abbr}-{suffix}"),
                None => abbr.clone(),
            };
            let name = runtime_var_name(&key, display_name);
            let default = normalize_text(raw).unwrap_or_else(|| raw.clone());
            def.root_vars.insert(name.clone(), default);
            runtime_vars.insert(key, name);
        }
    }

    log::trace!(
        "finalized {display_name}: {} local var(s), {} runtime var(s)",
        def.local_vars.len(),
        runtime_vars.len()
    );
    Ok(runtime_vars)
}

struct Resolver<'a> {
    display_name: &'a str,
    class: &'a str,
    locals: &'a [String],
}

impl Resolver<'_> {
    fn resolve_all(&self, def: &mut StyleDef) -> Result<(), AcssError> {
        self.resolve_map(&mut def.base)?;
        for props in def.states.values_mut().chain(def.pseudos.values_mut()) {
            self.resolve_map(props)?;
        }
        for block in def.screens.iter_mut().chain(def.containers.iter_mut()) {
            self.resolve_map(&mut block.props)?;
        }
        for query in &mut def.queries {
            self.resolve_all(&mut query.style)?;
        }
        Ok(())
    }

    fn resolve_map(&self, props: &mut PropMap) -> Result<(), AcssError> {
        for value in props.values_mut() {
            self.resolve(value)?;
        }
        Ok(())
    }

    fn resolve(&self, value: &mut Value) -> Result<(), AcssError> {
        if !value.is_symbolic() {
            return Ok(());
        }

        let mut text = String::new();
        for segment in &value.segments {
            match segment {
                Segment::Text(t) => text.push_str(t),
                Segment::Local(name) => {
                    if !self.locals.iter().any(|l| l == name) {
                        return Err(AcssError::UndeclaredLocalVar {
                            name: name.clone(),
                            class: self.class.to_string(),
                        });
                    }
                    text.push_str("var(");
                    text.push_str(&local_var_name(name, self.display_name));
                    text.push(')');
                }
                Segment::Runtime(key) => {
                    text.push_str("var(");
                    text.push_str(&runtime_var_name(key, self.display_name));
                    text.push(')');
                }
            }
        }
        value.segments = vec![Segment::Text(text)];
        Ok(())
    }
}
