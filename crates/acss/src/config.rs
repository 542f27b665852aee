//! Compile options.

use crate::hash::DEFAULT_SEED;

/// How uniqueness violations (duplicate `@scope`, duplicate scope:class)
/// are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileMode {
    /// Duplicates are fatal errors.
    #[default]
    Strict,
    /// Duplicates are logged and recorded as diagnostics, and compilation
    /// continues. Meant for hot-reload loops that re-execute the same units.
    Development,
}

/// Options shared by every compilation in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub mode: CompileMode,
    /// Seed for display-name hashing.
    pub hash_seed: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            mode: CompileMode::Strict,
            hash_seed: DEFAULT_SEED,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for development builds.
    pub fn development() -> Self {
        Self::default().with_mode(CompileMode::Development)
    }

    /// Builder method to set the compile mode.
    pub fn with_mode(mut self, mode: CompileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method to set the hash seed.
    pub fn with_hash_seed(mut self, seed: u32) -> Self {
        self.hash_seed = seed;
        self
    }
}
