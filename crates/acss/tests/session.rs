//! Integration tests for session state.
//!
//! Covers scope and class uniqueness in both compile modes, the pending
//! rule queue and flushing to sinks.

use acss::sink::{FlushReport, StringSink, StyleSink};
use acss::{
    AcssError, CompileMode, CompileOptions, ConstRegistry, ErrorKind, Session, SinkError, Theme,
};

fn dev_session() -> Session {
    Session::new(Theme::standard(), CompileOptions::development())
}

// ============================================================================
// UNIQUENESS: STRICT MODE
// ============================================================================

#[test]
fn test_strict_duplicate_scope() {
    let mut session = Session::default();
    assert_eq!(session.options().mode, CompileMode::Strict);

    session.compile_template("@scope app\n.a { p[1px] }").unwrap();
    let err = session.compile_template("@scope app\n.b { p[1px] }").unwrap_err();

    assert_eq!(err, AcssError::DuplicateScope { scope: "app".into() });
    assert_eq!(err.kind(), ErrorKind::UniquenessViolation);
    assert!(!session.scope_class_seen("app", "b"));
}

#[test]
fn test_strict_duplicate_class() {
    let mut session = Session::default();
    let consts = ConstRegistry::new();
    session.compile_class("app", "box", "p[1px]", &consts).unwrap();

    let err = session.compile_class("app", "box", "p[1px]", &consts).unwrap_err();
    assert!(matches!(err, AcssError::DuplicateScopeClass { .. }));

    // A different scope is a different class.
    session.compile_class("shop", "box", "p[1px]", &consts).unwrap();
}

#[test]
fn test_strict_duplicate_class_in_one_template() {
    let err = Session::default()
        .compile_template("@scope app\n.box { p[1px] }\n.box { p[2px] }")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UniquenessViolation);
}

// ============================================================================
// UNIQUENESS: DEVELOPMENT MODE
// ============================================================================

#[test]
fn test_development_duplicate_scope_once_per_call() {
    let mut session = dev_session();
    let source = "@scope app\n.box { p[1px] }";

    let first = session.compile_template(source).unwrap();
    assert!(session.diagnostics().is_empty());

    // Scope and class are both duplicates on each recompile.
    let second = session.compile_template(source).unwrap();
    assert_eq!(session.diagnostics().len(), 2);
    session.compile_template(source).unwrap();
    assert_eq!(session.diagnostics().len(), 4);

    let scope_warnings = session
        .diagnostics()
        .iter()
        .filter(|d| d.message.contains("scope `app` has already been declared"))
        .count();
    assert_eq!(scope_warnings, 2);
    assert!(session.diagnostics().iter().all(|d| d.kind == ErrorKind::UniquenessViolation));

    assert_eq!(first, second);
}

#[test]
fn test_development_failed_recompile_drops_its_diagnostics() {
    let mut session = dev_session();
    session.compile_template("@scope app\n.box { p[1px] }").unwrap();

    // Duplicate scope and class are reported before the bad line fails.
    let result = session.compile_template("@scope app\n.box { p[1px]\n zz[1px] }");
    assert!(result.is_err());
    assert!(session.diagnostics().is_empty());
    assert_eq!(session.pending().len(), 1);
}

#[test]
fn test_take_diagnostics() {
    let mut session = dev_session();
    session.compile_template("@scope app").unwrap();
    session.compile_template("@scope app").unwrap();

    assert_eq!(session.take_diagnostics().len(), 1);
    assert!(session.diagnostics().is_empty());
}

// ============================================================================
// PENDING RULES AND FLUSH
// ============================================================================

#[test]
fn test_flush_drains_pending_rules() {
    let mut session = Session::default();
    session
        .compile_template("@scope app\n.box {\n  $c[red]\n  hover(c[blue])\n}")
        .unwrap();
    assert_eq!(session.pending().len(), 3);

    let mut sink = StringSink::new();
    let report = session.flush(&mut sink);

    assert_eq!(report, FlushReport { inserted: 3, rejected: 0 });
    assert!(session.pending().is_empty());
    insta::assert_snapshot!(
        sink.into_style_tag("acss"),
        @r#"<style data-acss="ssr">:root{--c-box_jQrCpF:red}.box_jQrCpF{color:var(--c-box_jQrCpF)}.box_jQrCpF:hover{color:blue}</style>"#
    );
}

/// Rejects every `@container` rule, like an engine without container queries.
struct NoContainers {
    accepted: Vec<String>,
}

impl StyleSink for NoContainers {
    fn insert_rule(&mut self, rule: &str) -> Result<(), SinkError> {
        if rule.starts_with("@container") {
            return Err(SinkError::new(rule, "unsupported at-rule"));
        }
        self.accepted.push(rule.to_string());
        Ok(())
    }
}

#[test]
fn test_rejected_rules_do_not_block_the_batch() {
    let mut session = Session::default();
    session
        .compile_template("@scope app\n.box {\n  p[1px]\n  container(sm, p[2px])\n  hover(c[red])\n}")
        .unwrap();

    let mut sink = NoContainers { accepted: Vec::new() };
    let report = session.flush(&mut sink);

    assert_eq!(report, FlushReport { inserted: 2, rejected: 1 });
    assert_eq!(
        sink.accepted,
        [".box_jQrCpF{padding:1px}", ".box_jQrCpF:hover{color:red}"]
    );
}

#[test]
fn test_flush_to_closure() {
    let mut session = Session::default();
    session
        .compile_class("app", "box", "p[1px]", &ConstRegistry::new())
        .unwrap();

    let mut rules = Vec::new();
    let mut sink = |rule: &str| -> Result<(), SinkError> {
        rules.push(rule.to_string());
        Ok(())
    };
    session.flush(&mut sink);
    assert_eq!(rules, [".box_jQrCpF{padding:1px}"]);
}

#[test]
fn test_failed_compile_queues_nothing() {
    let mut session = Session::default();
    let result = session.compile_class("app", "box", "p[1px]\nzz[1px]", &ConstRegistry::new());

    assert!(result.is_err());
    assert!(session.pending().is_empty());
    assert!(!session.scope_class_seen("app", "box"));
}

// ============================================================================
// ISOLATION
// ============================================================================

#[test]
fn test_sessions_are_independent() {
    let mut a = Session::default();
    let mut b = Session::default();
    a.compile_template("@scope app\n.box { p[1px] }").unwrap();
    b.compile_template("@scope app\n.box { p[1px] }").unwrap();

    assert!(a.scope_seen("app"));
    assert!(b.scope_seen("app"));
}

#[test]
fn test_compile_class_does_not_register_the_scope() {
    let mut session = Session::default();
    session.compile_class("app", "box", "p[1px]", &ConstRegistry::new()).unwrap();

    assert!(session.scope_class_seen("app", "box"));
    assert!(!session.scope_seen("app"));

    // The scope is still free for a template to claim.
    session.compile_template("@scope app\n.card { p[1px] }").unwrap();
    assert!(session.scope_seen("app"));
}

#[test]
fn test_set_theme_applies_to_later_compiles() {
    let mut session = Session::default();
    session.set_theme(Theme::new().with_breakpoint("md", "min-w[800px]"));

    let compiled = session
        .compile_class("app", "box", "screen(md, p[1px])", &ConstRegistry::new())
        .unwrap();
    assert_eq!(compiled.style.screens[0].query, "(min-width:800px)");
}
