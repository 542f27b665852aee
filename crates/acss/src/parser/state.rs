//! `state(token token ...)` lines.

use crate::error::{AcssError, LookupContext};
use crate::parser::declare::{Target, write_token};
use crate::parser::line::LineEnv;
use crate::parser::tokens::split_tokens;
use crate::types::{PseudoClass, StyleDef};

/// Parses the body of a pseudo-class group into `def.states[state]`.
///
/// Runtime variables declared here are keyed `abbr-state` so the same
/// abbreviation can vary independently per state.
pub(crate) fn parse_state(
    state: PseudoClass,
    body: &str,
    def: &mut StyleDef,
    env: &LineEnv<'_>,
) -> Result<(), AcssError> {
    let tokens = split_tokens(body);
    if tokens.is_empty() {
        return Err(AcssError::malformed(format!("`{state}(...)` has no properties"), env.line));
    }

    let mut has_runtime = false;
    {
        let mut target = Target {
            props: def.states.entry(state).or_default(),
            vars: Some(def.var_states.entry(state).or_default()),
            suffix: Some(state.as_str()),
            lookup: LookupContext::State,
        };
        for token in tokens {
            has_runtime |= write_token(token, &mut target, env)?;
        }
    }

    if def.var_states.get(&state).is_some_and(|vars| vars.is_empty()) {
        def.var_states.shift_remove(&state);
    }
    def.has_runtime_var |= has_runtime;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::parser::{ParseContext, parse_line};
    use crate::types::{PseudoClass, StyleDef, Theme};

    #[test]
    fn runtime_variable_in_state() {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        parse_line("hover($c[blue] bg[green])", &mut def, ParseContext::empty(), &theme).unwrap();

        let hover = &def.states[&PseudoClass::Hover];
        assert_eq!(hover["color"], "var(--c-hover)");
        assert_eq!(hover["background-color"], "green");
        assert_eq!(def.var_states[&PseudoClass::Hover]["c"], "blue");
        assert!(def.has_runtime_var);
    }

    #[test]
    fn repeated_states_accumulate() {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        parse_line("focus(c[red])", &mut def, ParseContext::empty(), &theme).unwrap();
        parse_line("focus(bd[1px solid red])", &mut def, ParseContext::empty(), &theme).unwrap();

        assert_eq!(def.states[&PseudoClass::Focus].len(), 2);
        assert!(def.var_states.is_empty());
    }

    #[test]
    fn empty_state_is_malformed() {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        assert!(parse_line("hover( )", &mut def, ParseContext::empty(), &theme).is_err());
    }
}
