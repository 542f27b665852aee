//! The abbreviation table.
//!
//! A closed, static mapping from short DSL tokens to canonical CSS property
//! names. Lookups of unknown keys are errors at every call site; nothing in
//! the compiler falls back to treating an abbreviation as a raw property.
//!
//! Two tokens are reserved and deliberately absent from the table:
//!
//! - [`TYPOGRAPHY_ABBR`] (`ty`) expands a typography registry entry.
//! - [`CONTENT_ABBR`] (`ct`) sets `content` inside pseudo-elements.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use phf::phf_map;

/// Reserved abbreviation for the typography shorthand.
pub const TYPOGRAPHY_ABBR: &str = "ty";

/// Reserved abbreviation for pseudo-element `content`.
pub const CONTENT_ABBR: &str = "ct";

/// Map of abbreviations to canonical CSS property names.
pub static ABBREVIATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    // Layout
    "d" => "display",
    "pos" => "position",
    "t" => "top",
    "r" => "right",
    "b" => "bottom",
    "l" => "left",
    "inset" => "inset",
    "z" => "z-index",
    "ov" => "overflow",
    "ov-x" => "overflow-x",
    "ov-y" => "overflow-y",
    "vis" => "visibility",
    "fl" => "float",
    "clr" => "clear",
    "box" => "box-sizing",
    "ar" => "aspect-ratio",
    "obj-fit" => "object-fit",
    "obj-pos" => "object-position",
    "iso" => "isolation",

    // Sizing
    "w" => "width",
    "h" => "height",
    "min-w" => "min-width",
    "max-w" => "max-width",
    "min-h" => "min-height",
    "max-h" => "max-height",

    // Spacing
    "p" => "padding",
    "pt" => "padding-top",
    "pr" => "padding-right",
    "pb" => "padding-bottom",
    "pl" => "padding-left",
    "px" => "padding-inline",
    "py" => "padding-block",
    "m" => "margin",
    "mt" => "margin-top",
    "mr" => "margin-right",
    "mb" => "margin-bottom",
    "ml" => "margin-left",
    "mx" => "margin-inline",
    "my" => "margin-block",
    "gap" => "gap",
    "row-gap" => "row-gap",
    "col-gap" => "column-gap",

    // Flexbox
    "fx" => "flex",
    "fx-dir" => "flex-direction",
    "fx-wrap" => "flex-wrap",
    "fx-flow" => "flex-flow",
    "fx-grow" => "flex-grow",
    "fx-shrink" => "flex-shrink",
    "fx-basis" => "flex-basis",
    "order" => "order",
    "jc" => "justify-content",
    "ji" => "justify-items",
    "js" => "justify-self",
    "ai" => "align-items",
    "ac" => "align-content",
    "as" => "align-self",
    "pc" => "place-content",
    "pi" => "place-items",
    "ps" => "place-self",

    // Grid
    "gd" => "grid",
    "gd-area" => "grid-area",
    "gd-col" => "grid-column",
    "gd-row" => "grid-row",
    "gd-col-start" => "grid-column-start",
    "gd-col-end" => "grid-column-end",
    "gd-row-start" => "grid-row-start",
    "gd-row-end" => "grid-row-end",
    "gd-cols" => "grid-template-columns",
    "gd-rows" => "grid-template-rows",
    "gd-areas" => "grid-template-areas",
    "gd-flow" => "grid-auto-flow",
    "gd-auto-cols" => "grid-auto-columns",
    "gd-auto-rows" => "grid-auto-rows",

    // Color and background
    "c" => "color",
    "bg" => "background-color",
    "bg-sh" => "background",
    "bg-img" => "background-image",
    "bg-size" => "background-size",
    "bg-pos" => "background-position",
    "bg-rep" => "background-repeat",
    "bg-clip" => "background-clip",
    "bg-att" => "background-attachment",
    "bg-blend" => "background-blend-mode",
    "acc" => "accent-color",
    "caret" => "caret-color",

    // Border and outline
    "bd" => "border",
    "bd-t" => "border-top",
    "bd-r" => "border-right",
    "bd-b" => "border-bottom",
    "bd-l" => "border-left",
    "bd-w" => "border-width",
    "bd-s" => "border-style",
    "bd-c" => "border-color",
    "br" => "border-radius",
    "br-tl" => "border-top-left-radius",
    "br-tr" => "border-top-right-radius",
    "br-bl" => "border-bottom-left-radius",
    "br-br" => "border-bottom-right-radius",
    "bd-collapse" => "border-collapse",
    "ol" => "outline",
    "ol-off" => "outline-offset",

    // Typography
    "fs" => "font-size",
    "fw" => "font-weight",
    "ff" => "font-family",
    "fst" => "font-style",
    "lh" => "line-height",
    "ls" => "letter-spacing",
    "ta" => "text-align",
    "td" => "text-decoration",
    "tt" => "text-transform",
    "ti" => "text-indent",
    "tov" => "text-overflow",
    "tsh" => "text-shadow",
    "ws" => "white-space",
    "wb" => "word-break",
    "ow" => "overflow-wrap",
    "va" => "vertical-align",
    "lst" => "list-style",

    // Effects
    "op" => "opacity",
    "sh" => "box-shadow",
    "tf" => "transform",
    "tf-o" => "transform-origin",
    "tr" => "transition",
    "an" => "animation",
    "fil" => "filter",
    "bf" => "backdrop-filter",
    "mix" => "mix-blend-mode",

    // Interaction
    "cur" => "cursor",
    "pe" => "pointer-events",
    "us" => "user-select",
    "ap" => "appearance",
    "rs" => "resize",
    "sb" => "scroll-behavior",
    "wc" => "will-change",

    // Containment
    "cq-type" => "container-type",
    "cq-name" => "container-name",

    // SVG
    "fill" => "fill",
    "stroke" => "stroke",
    "stroke-w" => "stroke-width",
};

/// Every canonical property name that appears as a value in [`ABBREVIATIONS`].
static CANONICAL: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ABBREVIATIONS.values().copied().collect());

/// Looks up the canonical CSS property for an abbreviation.
pub fn lookup(abbr: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(abbr).copied()
}

/// Returns `true` if `property` is a canonical property name of the table.
pub fn is_canonical(property: &str) -> bool {
    CANONICAL.contains(property)
}

/// Returns `true` for canonical properties that may appear in a
/// `screen(...)` / `container(...)` condition.
pub fn is_query_property(property: &str) -> bool {
    matches!(property, "min-width" | "max-width")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_abbreviations() {
        assert_eq!(lookup("bg"), Some("background-color"));
        assert_eq!(lookup("p"), Some("padding"));
        assert_eq!(lookup("gd-col"), Some("grid-column"));
        assert_eq!(lookup("min-w"), Some("min-width"));
    }

    #[test]
    fn reserved_tokens_are_not_in_the_table() {
        assert_eq!(lookup(TYPOGRAPHY_ABBR), None);
        assert_eq!(lookup(CONTENT_ABBR), None);
    }

    #[test]
    fn canonical_set_contains_table_values_only() {
        assert!(is_canonical("background-color"));
        assert!(is_canonical("grid-template-columns"));
        assert!(!is_canonical("bg"));
        assert!(!is_canonical("content"));
    }

    #[test]
    fn only_width_bounds_are_query_properties() {
        assert!(is_query_property("min-width"));
        assert!(is_query_property("max-width"));
        assert!(!is_query_property("width"));
        assert!(!is_query_property("min-height"));
    }
}
