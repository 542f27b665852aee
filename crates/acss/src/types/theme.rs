//! Theme registries consulted during parsing.
//!
//! The compiler never stores theme data itself. It asks a [`ThemeSource`]
//! for three kinds of keys:
//!
//! | Lookup        | Used by                          | Example value                      |
//! |---------------|----------------------------------|------------------------------------|
//! | breakpoint    | `screen(md, ...)`                | `min-w[768px]`                     |
//! | container     | `container(sm, ...)`             | `min-w[384px]`                     |
//! | typography    | `ty[h1]`                         | `font-size: 2.25rem, ...`          |
//!
//! Breakpoint and container values are DSL conditions, substituted textually
//! in place of the alias before the condition is parsed.
//!
//! [`Theme`] is a HashMap-backed implementation with builder methods and a
//! standard set of defaults.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Canonical CSS property to value, in declaration order.
pub type TypographyEntry = IndexMap<String, String>;

/// Lookup interface for the theme collaborators.
pub trait ThemeSource {
    /// Resolves a breakpoint alias to a DSL condition such as `min-w[768px]`.
    fn breakpoint(&self, alias: &str) -> Option<&str>;

    /// Resolves a container-size alias. Defaults to the breakpoint registry.
    fn container(&self, alias: &str) -> Option<&str> {
        self.breakpoint(alias)
    }

    /// Resolves a typography key to the properties it expands to.
    fn typography(&self, key: &str) -> Option<&TypographyEntry>;
}

/// A HashMap-backed theme.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Maps breakpoint aliases (e.g., "md") to conditions.
    pub breakpoints: HashMap<String, String>,
    /// Maps container-size aliases to conditions.
    pub containers: HashMap<String, String>,
    /// Maps typography keys (e.g., "h1") to property sets.
    pub typography: HashMap<String, TypographyEntry>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in theme.
    pub fn standard() -> Self {
        Theme::new()
            .with_breakpoint("sm", "min-w[640px]")
            .with_breakpoint("md", "min-w[768px]")
            .with_breakpoint("lg", "min-w[1024px]")
            .with_breakpoint("xl", "min-w[1280px]")
            .with_breakpoint("2xl", "min-w[1536px]")
            .with_container("xs", "min-w[320px]")
            .with_container("sm", "min-w[384px]")
            .with_container("md", "min-w[448px]")
            .with_container("lg", "min-w[512px]")
            .with_container("xl", "min-w[576px]")
            .with_typography(
                "h1",
                [
                    ("font-size", "2.25rem"),
                    ("line-height", "2.5rem"),
                    ("font-weight", "700"),
                ],
            )
            .with_typography(
                "h2",
                [
                    ("font-size", "1.875rem"),
                    ("line-height", "2.25rem"),
                    ("font-weight", "700"),
                ],
            )
            .with_typography(
                "h3",
                [
                    ("font-size", "1.5rem"),
                    ("line-height", "2rem"),
                    ("font-weight", "600"),
                ],
            )
            .with_typography("body", [("font-size", "1rem"), ("line-height", "1.5rem")])
            .with_typography("small", [("font-size", "0.875rem"), ("line-height", "1.25rem")])
    }

    /// Builder method to register a breakpoint alias.
    pub fn with_breakpoint(mut self, alias: &str, condition: &str) -> Self {
        self.breakpoints.insert(alias.to_string(), condition.to_string());
        self
    }

    /// Builder method to register a container-size alias.
    pub fn with_container(mut self, alias: &str, condition: &str) -> Self {
        self.containers.insert(alias.to_string(), condition.to_string());
        self
    }

    /// Builder method to register a typography entry.
    pub fn with_typography<'a>(
        mut self,
        key: &str,
        properties: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let entry = properties
            .into_iter()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect();
        self.typography.insert(key.to_string(), entry);
        self
    }
}

impl ThemeSource for Theme {
    fn breakpoint(&self, alias: &str) -> Option<&str> {
        self.breakpoints.get(alias).map(String::as_str)
    }

    /// Container sizes first, then breakpoints of the same name.
    fn container(&self, alias: &str) -> Option<&str> {
        self.containers
            .get(alias)
            .or_else(|| self.breakpoints.get(alias))
            .map(String::as_str)
    }

    fn typography(&self, key: &str) -> Option<&TypographyEntry> {
        self.typography.get(key)
    }
}
