//! Closed sets of supported pseudo-classes ("states") and pseudo-elements.
//!
//! A line such as `hover(c[red])` is only treated as a state when its prefix
//! names one of these variants; any other prefix falls through to the plain
//! property parser so functional values like `calc(...)` are left alone.

use std::fmt;

use phf::phf_map;

/// A supported pseudo-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    Hover,
    Focus,
    Active,
    FocusWithin,
    FocusVisible,
    Target,
    Disabled,
    Enabled,
    ReadOnly,
    ReadWrite,
    Required,
    Optional,
    Checked,
    Indeterminate,
    Valid,
    Invalid,
    InRange,
    OutOfRange,
    PlaceholderShown,
    Default,
    Link,
    Visited,
    UserInvalid,
}

static PSEUDO_CLASSES: phf::Map<&'static str, PseudoClass> = phf_map! {
    "hover" => PseudoClass::Hover,
    "focus" => PseudoClass::Focus,
    "active" => PseudoClass::Active,
    "focus-within" => PseudoClass::FocusWithin,
    "focus-visible" => PseudoClass::FocusVisible,
    "target" => PseudoClass::Target,
    "disabled" => PseudoClass::Disabled,
    "enabled" => PseudoClass::Enabled,
    "read-only" => PseudoClass::ReadOnly,
    "read-write" => PseudoClass::ReadWrite,
    "required" => PseudoClass::Required,
    "optional" => PseudoClass::Optional,
    "checked" => PseudoClass::Checked,
    "indeterminate" => PseudoClass::Indeterminate,
    "valid" => PseudoClass::Valid,
    "invalid" => PseudoClass::Invalid,
    "in-range" => PseudoClass::InRange,
    "out-of-range" => PseudoClass::OutOfRange,
    "placeholder-shown" => PseudoClass::PlaceholderShown,
    "default" => PseudoClass::Default,
    "link" => PseudoClass::Link,
    "visited" => PseudoClass::Visited,
    "user-invalid" => PseudoClass::UserInvalid,
};

impl PseudoClass {
    /// Resolves a DSL prefix to a pseudo-class.
    pub fn from_name(name: &str) -> Option<Self> {
        PSEUDO_CLASSES.get(name).copied()
    }

    /// The CSS name, without the leading colon.
    pub fn as_str(self) -> &'static str {
        match self {
            PseudoClass::Hover => "hover",
            PseudoClass::Focus => "focus",
            PseudoClass::Active => "active",
            PseudoClass::FocusWithin => "focus-within",
            PseudoClass::FocusVisible => "focus-visible",
            PseudoClass::Target => "target",
            PseudoClass::Disabled => "disabled",
            PseudoClass::Enabled => "enabled",
            PseudoClass::ReadOnly => "read-only",
            PseudoClass::ReadWrite => "read-write",
            PseudoClass::Required => "required",
            PseudoClass::Optional => "optional",
            PseudoClass::Checked => "checked",
            PseudoClass::Indeterminate => "indeterminate",
            PseudoClass::Valid => "valid",
            PseudoClass::Invalid => "invalid",
            PseudoClass::InRange => "in-range",
            PseudoClass::OutOfRange => "out-of-range",
            PseudoClass::PlaceholderShown => "placeholder-shown",
            PseudoClass::Default => "default",
            PseudoClass::Link => "link",
            PseudoClass::Visited => "visited",
            PseudoClass::UserInvalid => "user-invalid",
        }
    }
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported pseudo-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoElement {
    Before,
    After,
    Placeholder,
    Selection,
    FileSelectorButton,
    FirstLetter,
    FirstLine,
    Marker,
    Backdrop,
    SpellingError,
    GrammarError,
}

static PSEUDO_ELEMENTS: phf::Map<&'static str, PseudoElement> = phf_map! {
    "before" => PseudoElement::Before,
    "after" => PseudoElement::After,
    "placeholder" => PseudoElement::Placeholder,
    "selection" => PseudoElement::Selection,
    "file-selector-button" => PseudoElement::FileSelectorButton,
    "first-letter" => PseudoElement::FirstLetter,
    "first-line" => PseudoElement::FirstLine,
    "marker" => PseudoElement::Marker,
    "backdrop" => PseudoElement::Backdrop,
    "spelling-error" => PseudoElement::SpellingError,
    "grammar-error" => PseudoElement::GrammarError,
};

impl PseudoElement {
    /// Resolves a DSL prefix to a pseudo-element.
    pub fn from_name(name: &str) -> Option<Self> {
        PSEUDO_ELEMENTS.get(name).copied()
    }

    /// The CSS name, without the leading `::`.
    pub fn as_str(self) -> &'static str {
        match self {
            PseudoElement::Before => "before",
            PseudoElement::After => "after",
            PseudoElement::Placeholder => "placeholder",
            PseudoElement::Selection => "selection",
            PseudoElement::FileSelectorButton => "file-selector-button",
            PseudoElement::FirstLetter => "first-letter",
            PseudoElement::FirstLine => "first-line",
            PseudoElement::Marker => "marker",
            PseudoElement::Backdrop => "backdrop",
            PseudoElement::SpellingError => "spelling-error",
            PseudoElement::GrammarError => "grammar-error",
        }
    }
}

impl fmt::Display for PseudoElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
