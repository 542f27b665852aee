//! Integration tests for compile errors.
//!
//! Every error aborts the class being compiled and names the offending
//! source line.

use acss::types::abbr::ABBREVIATIONS;
use acss::{AcssError, ConstRegistry, ErrorKind, LookupContext, Session, Theme};

fn compile_err(body: &str) -> AcssError {
    Session::default()
        .compile_class("app", "box", body, &ConstRegistry::new())
        .expect_err("class should fail")
}

// ============================================================================
// UNKNOWN ABBREVIATIONS
// ============================================================================

#[test]
fn test_unknown_abbreviation_everywhere() {
    let lines = [
        "zz[1px]",
        "$zz[1px]",
        "hover(c[red] zz[1px])",
        "before(zz[1px])",
        "screen(md, zz[1px])",
        "container(sm, zz[1px])",
        "screen(zz[1px], p[1px])",
        "zz[]",
        "$zz[]",
        "hover(zz[])",
        "before(zz[])",
        "screen(zz[], p[1px])",
    ];
    for line in lines {
        let err = compile_err(line);
        assert_eq!(err.kind(), ErrorKind::UnknownAbbreviation, "{line}");
        assert!(err.to_string().contains(line), "{err}");
    }
}

#[test]
fn test_unknown_abbreviation_wins_over_context() {
    let session = Session::default();
    let err = session.compile_const_block("a", "zz[1px]!").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownAbbreviation);
}

#[test]
fn test_every_abbreviation_maps_to_its_property() {
    for (abbr, property) in ABBREVIATIONS.entries() {
        let mut session = Session::default();
        let compiled = session
            .compile_class("app", "box", &format!("{abbr}[x]"), &ConstRegistry::new())
            .unwrap();
        assert_eq!(compiled.style.base_value(property).as_deref(), Some("x"), "{abbr}");
    }
}

// ============================================================================
// MALFORMED SYNTAX
// ============================================================================

#[test]
fn test_malformed_lines() {
    let lines = [
        "bg",
        "bg[red",
        "bg[]",
        "hover(c[red]",
        "hover()",
        "screen(md p[1px])",
        "screen(, p[1px])",
        "screen(md,)",
        "before(ct[])",
        "hover(--&g[1px])",
    ];
    for line in lines {
        let err = compile_err(line);
        assert_eq!(err.kind(), ErrorKind::MalformedSyntax, "{line}: {err}");
    }
}

#[test]
fn test_invalid_query_condition() {
    for line in ["screen(min-h[1px], p[1px])", "screen($min-w[1px], p[1px])", "screen(min-w[1px]!, p[1px])"] {
        let err = compile_err(line);
        assert!(matches!(err, AcssError::InvalidQueryCondition { .. }), "{line}: {err}");
    }
}

#[test]
fn test_invalid_class_name() {
    let err = Session::default()
        .compile_class("app", "bad name", "p[1px]", &ConstRegistry::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedSyntax);
}

// ============================================================================
// DECLARATIONS
// ============================================================================

#[test]
fn test_duplicate_local_variable() {
    let err = compile_err("--&g[1px]\n--&g[2px]");
    assert!(matches!(err, AcssError::DuplicateLocalVar { ref name, .. } if name == "g"));
    assert_eq!(err.kind(), ErrorKind::DuplicateDeclaration);
}

#[test]
fn test_local_variable_with_important() {
    let err = compile_err("--&g[1px]!");
    assert_eq!(err.kind(), ErrorKind::ContextViolation);
}

#[test]
fn test_undeclared_local_variable() {
    let err = compile_err("p[--&nope]");
    assert!(matches!(err, AcssError::UndeclaredLocalVar { ref name, .. } if name == "nope"));
}

#[test]
fn test_mixed_variable_forms() {
    for body in ["$c[red]\nc[blue]", "c[blue]\n$c[red]", "hover($c[red] c[blue])"] {
        let err = compile_err(body);
        assert!(matches!(err, AcssError::MixedVariableForm { .. }), "{body}: {err}");
    }
}

#[test]
fn test_runtime_default_cannot_use_local() {
    let err = compile_err("--&g[1px]\n$p[--&g]");
    assert_eq!(err.kind(), ErrorKind::ContextViolation);
}

#[test]
fn test_runtime_variables_rejected_in_media() {
    for line in ["screen(md, $p[1px])", "container(sm, $p[1px])"] {
        assert_eq!(compile_err(line).kind(), ErrorKind::ContextViolation, "{line}");
    }
}

// ============================================================================
// THEME KEYS
// ============================================================================

#[test]
fn test_missing_theme_keys() {
    let cases = [
        ("ty[huge]", "typography", LookupContext::Base),
        ("hover(ty[huge])", "typography", LookupContext::State),
        ("after(ty[huge])", "typography", LookupContext::Pseudo),
        ("screen(huge, p[1px])", "breakpoint", LookupContext::Screen),
        ("container(huge, p[1px])", "container", LookupContext::Container),
    ];
    for (line, expected_kind, expected_context) in cases {
        let err = compile_err(line);
        let AcssError::MissingThemeKey { kind, key, context, .. } = &err else {
            panic!("expected MissingThemeKey for {line}, got {err}");
        };
        assert_eq!(*kind, expected_kind);
        assert_eq!(key, "huge");
        assert_eq!(*context, expected_context);
        assert_eq!(err.kind(), ErrorKind::MissingThemeKey);
    }
}

#[test]
fn test_typography_with_unknown_property() {
    let theme = Theme::new().with_typography("odd", [("font-size", "1rem"), ("not-a-prop", "1")]);
    let mut session = Session::new(theme, Default::default());
    let err = session
        .compile_class("app", "box", "ty[odd]", &ConstRegistry::new())
        .unwrap_err();
    assert!(matches!(err, AcssError::InvalidThemeProperty { ref property, .. } if property == "not-a-prop"));
}

#[test]
fn test_error_message_names_the_line() {
    let err = compile_err("p[1px]\nhover(c[red] nope[2px])");
    insta::assert_snapshot!(
        err.to_string(),
        @"unknown abbreviation `nope` in `hover(c[red] nope[2px])`"
    );
}
