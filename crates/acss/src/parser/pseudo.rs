//! `pseudo-element(token token ...)` lines.

use crate::error::{AcssError, LookupContext};
use crate::parser::declare::{Target, parse_token, write_property};
use crate::parser::line::{CONST_CONTEXT, LineEnv, ParseContext};
use crate::parser::property::Prefix;
use crate::parser::tokens::split_tokens;
use crate::types::abbr::CONTENT_ABBR;
use crate::types::{PseudoElement, StyleDef, Value};

/// Parses the body of a pseudo-element group into `def.pseudos[pseudo]`.
///
/// `ct[text]` is written as `content:"text"` without normalization.
pub(crate) fn parse_pseudo(
    pseudo: PseudoElement,
    body: &str,
    def: &mut StyleDef,
    env: &LineEnv<'_>,
) -> Result<(), AcssError> {
    let tokens = split_tokens(body);
    if tokens.is_empty() {
        return Err(AcssError::malformed(format!("`{pseudo}(...)` has no properties"), env.line));
    }

    let mut has_runtime = false;
    {
        let mut target = Target {
            props: def.pseudos.entry(pseudo).or_default(),
            vars: Some(def.var_pseudos.entry(pseudo).or_default()),
            suffix: Some(pseudo.as_str()),
            lookup: LookupContext::Pseudo,
        };
        for raw in tokens {
            let token = parse_token(raw, env)?;
            if token.name == CONTENT_ABBR && token.prefix == Prefix::None {
                if token.value.is_empty() {
                    return Err(AcssError::malformed("empty content", env.line));
                }
                if token.important && env.ctx.contains(ParseContext::CONST) {
                    return Err(AcssError::context("!important", CONST_CONTEXT, env.line));
                }
                let quoted = format!("\"{}\"", token.value.replace('"', "\\\""));
                target
                    .props
                    .insert("content".to_string(), Value::text(quoted).with_important(token.important));
                continue;
            }
            has_runtime |= write_property(token, &mut target, env)?;
        }
    }

    if def.var_pseudos.get(&pseudo).is_some_and(|vars| vars.is_empty()) {
        def.var_pseudos.shift_remove(&pseudo);
    }
    def.has_runtime_var |= has_runtime;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::AcssError;
    use crate::parser::{ParseContext, parse_line};
    use crate::types::{PseudoElement, StyleDef, Theme};

    #[test]
    fn content_is_quoted() {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        parse_line("before(ct[→] c[red])", &mut def, ParseContext::empty(), &theme).unwrap();

        let before = &def.pseudos[&PseudoElement::Before];
        assert_eq!(before["content"], "\"→\"");
        assert_eq!(before["color"], "red");
    }

    #[test]
    fn content_escapes_quotes() {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        parse_line(r#"after(ct[say "hi"])"#, &mut def, ParseContext::empty(), &theme).unwrap();
        assert_eq!(def.pseudos[&PseudoElement::After]["content"], r#""say \"hi\"""#);
    }

    #[test]
    fn empty_content_is_malformed() {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        let err = parse_line("before(ct[])", &mut def, ParseContext::empty(), &theme).unwrap_err();
        assert!(matches!(err, AcssError::Malformed { .. }));
    }

    #[test]
    fn runtime_variable_in_pseudo() {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        parse_line("placeholder($c[gray])", &mut def, ParseContext::empty(), &theme).unwrap();

        assert_eq!(def.pseudos[&PseudoElement::Placeholder]["color"], "var(--c-placeholder)");
        assert_eq!(def.var_pseudos[&PseudoElement::Placeholder]["c"], "gray");
    }
}
