//! `@use` mixin merging.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{MediaBlock, StyleDef};

/// Merges `source` into `target` without overwriting anything `target`
/// already declares.
///
/// Media blocks from `source` are placed before the target's own so that the
/// target's blocks come later in the emitted CSS.
pub fn merge_into(target: &mut StyleDef, source: &StyleDef) {
    merge_all(target, &[source]);
}

/// Merges several mixins into `target`, in `@use` order.
///
/// A key is taken from the leftmost mixin that declares it, unless `target`
/// already has it. Media blocks keep mixin order and precede the target's.
pub fn merge_all(target: &mut StyleDef, sources: &[&StyleDef]) {
    for source in sources {
        fill_absent(&mut target.base, &source.base);
        fill_absent(&mut target.var_base, &source.var_base);
        fill_nested(&mut target.states, &source.states);
        fill_nested(&mut target.var_states, &source.var_states);
        fill_nested(&mut target.pseudos, &source.pseudos);
        fill_nested(&mut target.var_pseudos, &source.var_pseudos);
        target.has_runtime_var |= source.has_runtime_var;
    }

    target.screens = prepend(sources.iter().map(|s| &s.screens), &target.screens);
    target.containers = prepend(sources.iter().map(|s| &s.containers), &target.containers);
}

fn fill_absent<K, V>(target: &mut IndexMap<K, V>, source: &IndexMap<K, V>)
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    for (key, value) in source {
        if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
        }
    }
}

fn fill_nested<K, K2, V>(target: &mut IndexMap<K, IndexMap<K2, V>>, source: &IndexMap<K, IndexMap<K2, V>>)
where
    K: Hash + Eq + Clone,
    K2: Hash + Eq + Clone,
    V: Clone,
{
    for (key, inner) in source {
        fill_absent(target.entry(key.clone()).or_default(), inner);
    }
}

fn prepend<'a>(
    mixins: impl Iterator<Item = &'a Vec<MediaBlock>>,
    own: &'a [MediaBlock],
) -> Vec<MediaBlock> {
    mixins.flatten().chain(own).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseContext, parse_line};
    use crate::types::{PseudoClass, Theme};

    fn def(lines: &[&str], ctx: ParseContext) -> StyleDef {
        let theme = Theme::standard();
        let mut def = StyleDef::new();
        for line in lines {
            parse_line(line, &mut def, ctx, &theme).unwrap();
        }
        def
    }

    #[test]
    fn explicit_beats_mixin() {
        let mut target = def(&["bg[red]"], ParseContext::empty());
        let mixin = def(&["bg[blue]", "c[white]"], ParseContext::CONST);
        merge_into(&mut target, &mixin);

        assert_eq!(target.base_value("background-color").as_deref(), Some("red"));
        assert_eq!(target.base_value("color").as_deref(), Some("white"));
    }

    #[test]
    fn leftmost_mixin_wins() {
        let a = def(&["c[red]", "hover(c[pink])"], ParseContext::CONST);
        let b = def(&["c[blue]", "hover(bg[gray])"], ParseContext::CONST);
        let mut target = StyleDef::new();
        merge_all(&mut target, &[&a, &b]);

        assert_eq!(target.base_value("color").as_deref(), Some("red"));
        assert_eq!(target.states[&PseudoClass::Hover].len(), 2);
    }

    #[test]
    fn mixin_media_comes_first() {
        let mut target = def(&["screen(lg, p[3px])"], ParseContext::empty());
        let a = def(&["screen(sm, p[1px])"], ParseContext::CONST);
        let b = def(&["screen(md, p[2px])"], ParseContext::CONST);
        merge_all(&mut target, &[&a, &b]);

        let queries: Vec<_> = target.screens.iter().map(|s| s.query.as_str()).collect();
        assert_eq!(
            queries,
            ["(min-width:640px)", "(min-width:768px)", "(min-width:1024px)"]
        );
    }
}
