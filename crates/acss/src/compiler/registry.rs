//! Named `@const` definitions available to `@use`.

use indexmap::IndexMap;

use crate::error::AcssError;
use crate::types::StyleDef;

/// Compiled `@const` blocks by name, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ConstRegistry {
    consts: IndexMap<String, StyleDef>,
}

impl ConstRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constant. Names may only be registered once.
    pub fn insert(&mut self, name: impl Into<String>, def: StyleDef) -> Result<(), AcssError> {
        let name = name.into();
        if self.consts.contains_key(&name) {
            return Err(AcssError::DuplicateConst { name });
        }
        self.consts.insert(name, def);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&StyleDef> {
        self.consts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.consts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.consts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.consts.keys().map(String::as_str)
    }
}
