//! The compilation session.

use indexmap::IndexSet;

use crate::compiler::finalize::finalize;
use crate::compiler::merge::merge_all;
use crate::compiler::registry::ConstRegistry;
use crate::compiler::{CompiledClass, CompiledSheet, display_name};
use crate::config::{CompileMode, CompileOptions};
use crate::error::{AcssError, ErrorKind};
use crate::parser::{
    ParseContext, is_ident, parse_class_body, parse_const_body, parse_line, parse_template,
};
use crate::serializer::serialize_rules;
use crate::sink::{FlushReport, StyleSink};
use crate::types::{NestedQuery, StyleDef, Theme, ThemeSource};

/// A uniqueness violation recorded in development mode instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&AcssError> for Diagnostic {
    fn from(err: &AcssError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// The seen-scope and seen-class registries at one point in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    scopes: IndexSet<String>,
    scope_classes: IndexSet<String>,
}

/// Host-owned compilation state.
///
/// A session owns the theme, the registries that detect duplicate `@scope`
/// names and duplicate `scope:class` pairs, and the queue of compiled rules
/// waiting to be flushed to a [`StyleSink`]. Sessions are independent; tests
/// and multi-tenant hosts can run as many as they like side by side.
///
/// # Examples
///
/// ```rust
/// use acss::{CompileOptions, Session, Theme};
/// use acss::sink::StringSink;
///
/// let mut session = Session::new(Theme::standard(), CompileOptions::default());
/// let sheet = session
///     .compile_template("@scope app\n.box {\n  p[8px]\n  hover(c[red])\n}")
///     .unwrap();
///
/// let name = &sheet.classes["box"];
/// assert!(name.starts_with("box_"));
/// assert_eq!(sheet.css, format!(".{name}{{padding:8px}}.{name}:hover{{color:red}}"));
///
/// let mut sink = StringSink::new();
/// let report = session.flush(&mut sink);
/// assert_eq!(report.inserted, 2);
/// assert_eq!(sink.as_str(), sheet.css);
/// ```
pub struct Session {
    options: CompileOptions,
    theme: Box<dyn ThemeSource>,
    used_scopes: IndexSet<String>,
    used_scope_classes: IndexSet<String>,
    diagnostics: Vec<Diagnostic>,
    pending: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Theme::standard(), CompileOptions::default())
    }
}

impl Session {
    /// Creates a session with the given theme and options.
    pub fn new(theme: impl ThemeSource + 'static, options: CompileOptions) -> Self {
        Self {
            options,
            theme: Box::new(theme),
            used_scopes: IndexSet::new(),
            used_scope_classes: IndexSet::new(),
            diagnostics: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn theme(&self) -> &dyn ThemeSource {
        &*self.theme
    }

    /// Replaces the theme. Already compiled classes are unaffected.
    pub fn set_theme(&mut self, theme: impl ThemeSource + 'static) {
        self.theme = Box::new(theme);
    }

    /// Compiles a full template: `@scope`, `@bind`, `@const` and class blocks.
    ///
    /// On error the session's registries, diagnostics and pending queue are
    /// left as they were before the call.
    pub fn compile_template(&mut self, source: &str) -> Result<CompiledSheet, AcssError> {
        let snapshot = self.snapshot();
        let pending = self.pending.len();
        let diagnostics = self.diagnostics.len();

        let result = self.compile_template_inner(source);
        if result.is_err() {
            self.restore(snapshot);
            self.pending.truncate(pending);
            self.diagnostics.truncate(diagnostics);
        }
        result
    }

    fn compile_template_inner(&mut self, source: &str) -> Result<CompiledSheet, AcssError> {
        let template = parse_template(source)?;

        if let Some(scope) = template.scope {
            self.register_scope(scope)?;
        }
        let scope = template.scope.unwrap_or_default();

        let mut consts = ConstRegistry::new();
        for block in &template.consts {
            let def = self.compile_const_block(block.name, block.body)?;
            consts.insert(block.name, def)?;
        }

        let mut sheet = CompiledSheet {
            scope: template.scope.map(str::to_string),
            ..CompiledSheet::default()
        };
        for block in &template.classes {
            let compiled = self.compile_class(scope, block.name, block.body, &consts)?;
            sheet.css.push_str(&compiled.css);
            if !compiled.runtime_vars.is_empty() {
                sheet
                    .runtime_vars
                    .insert(block.name.to_string(), compiled.runtime_vars);
            }
            sheet
                .classes
                .insert(block.name.to_string(), compiled.display_name);
        }

        for bind in &template.binds {
            if sheet.classes.contains_key(bind.key) {
                return Err(AcssError::DuplicateBind {
                    key: bind.key.to_string(),
                });
            }
            let names = bind
                .classes
                .iter()
                .map(|class| {
                    sheet
                        .classes
                        .get(*class)
                        .cloned()
                        .ok_or_else(|| AcssError::UnknownBindClass {
                            key: bind.key.to_string(),
                            class: class.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            sheet.classes.insert(bind.key.to_string(), names.join(" "));
        }

        log::debug!(
            "compiled template (scope {:?}): {} class(es), {} const(s)",
            sheet.scope,
            template.classes.len(),
            consts.len()
        );
        Ok(sheet)
    }

    /// Compiles one class body under `scope`.
    ///
    /// The display name is `{class}_{identifier}` where the identifier hashes
    /// `{scope}:{class}`, so recompiling the same class in the same scope
    /// yields the same name. The generated rules are queued for
    /// [`flush`](Self::flush).
    ///
    /// Only the `scope:class` pair is recorded here. Scopes are registered
    /// by `@scope` in [`compile_template`](Self::compile_template), so
    /// [`scope_seen`](Self::scope_seen) stays `false` for a scope that was
    /// only passed to this method.
    pub fn compile_class(
        &mut self,
        scope: &str,
        class: &str,
        raw_body: &str,
        consts: &ConstRegistry,
    ) -> Result<CompiledClass, AcssError> {
        if !is_ident(class) {
            return Err(AcssError::malformed(
                format!("invalid class name `{class}`"),
                format!(".{class}"),
            ));
        }
        let key = format!("{scope}:{class}");
        let first_time = !self.used_scope_classes.contains(&key);
        if !first_time {
            self.report(AcssError::DuplicateScopeClass {
                scope: scope.to_string(),
                class: class.to_string(),
            })?;
        }

        let body = parse_class_body(raw_body)?;
        let theme = &*self.theme;

        let mut def = StyleDef::new();
        for line in &body.lines {
            parse_line(line, &mut def, ParseContext::empty(), theme)?;
        }

        for query in &body.queries {
            let mut style = StyleDef::new();
            for line in &query.lines {
                parse_line(line, &mut style, ParseContext::QUERY, theme)?;
            }
            def.queries.push(NestedQuery {
                selector: query.selector.to_string(),
                style,
            });
        }

        let mixins = body
            .uses
            .iter()
            .map(|name| {
                consts.get(name).ok_or_else(|| AcssError::UnknownConst {
                    name: name.to_string(),
                    line: format!("@use {}", body.uses.join(" ")),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        merge_all(&mut def, &mixins);

        let display_name = display_name(self.options.hash_seed, scope, class);
        let runtime_vars = finalize(&mut def, &display_name, class)?;
        let rules = serialize_rules(&display_name, &def);
        let css = rules.concat();

        if first_time {
            self.used_scope_classes.insert(key);
        }
        log::debug!("compiled .{class} as .{display_name} ({} rule(s))", rules.len());
        self.pending.extend(rules);

        Ok(CompiledClass {
            display_name,
            css,
            style: def,
            runtime_vars,
        })
    }

    /// Compiles the body of `@const name { ... }`.
    pub fn compile_const_block(&self, name: &str, raw_body: &str) -> Result<StyleDef, AcssError> {
        let mut def = StyleDef::new();
        for line in parse_const_body(name, raw_body)? {
            parse_line(line, &mut def, ParseContext::CONST, &*self.theme)?;
        }
        log::trace!("compiled @const {name}");
        Ok(def)
    }

    /// Hands every queued rule to `sink` and empties the queue.
    ///
    /// A rule the sink rejects is logged and skipped; the remaining rules are
    /// still inserted.
    pub fn flush(&mut self, sink: &mut dyn StyleSink) -> FlushReport {
        let mut report = FlushReport::default();
        for rule in self.pending.drain(..) {
            match sink.insert_rule(&rule) {
                Ok(()) => report.inserted += 1,
                Err(err) => {
                    log::warn!("{err}: {rule}");
                    report.rejected += 1;
                }
            }
        }
        report
    }

    /// Rules compiled since the last flush, in emission order.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Returns `true` if `scope` has been registered by a template.
    pub fn scope_seen(&self, scope: &str) -> bool {
        self.used_scopes.contains(scope)
    }

    /// Returns `true` if `class` has been compiled under `scope`.
    pub fn scope_class_seen(&self, scope: &str, class: &str) -> bool {
        self.used_scope_classes.contains(&format!("{scope}:{class}"))
    }

    /// Uniqueness violations downgraded to warnings in development mode.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Forgets every seen scope and class, drops diagnostics and pending
    /// rules.
    pub fn reset(&mut self) {
        self.used_scopes.clear();
        self.used_scope_classes.clear();
        self.diagnostics.clear();
        self.pending.clear();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            scopes: self.used_scopes.clone(),
            scope_classes: self.used_scope_classes.clone(),
        }
    }

    /// Restores the seen-scope and seen-class registries.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.used_scopes = snapshot.scopes;
        self.used_scope_classes = snapshot.scope_classes;
    }

    fn register_scope(&mut self, scope: &str) -> Result<(), AcssError> {
        if self.used_scopes.contains(scope) {
            return self.report(AcssError::DuplicateScope {
                scope: scope.to_string(),
            });
        }
        self.used_scopes.insert(scope.to_string());
        Ok(())
    }

    /// Fails in strict mode; records a diagnostic in development mode.
    fn report(&mut self, err: AcssError) -> Result<(), AcssError> {
        match self.options.mode {
            CompileMode::Strict => Err(err),
            CompileMode::Development => {
                log::warn!("{err}");
                self.diagnostics.push(Diagnostic::from(&err));
                Ok(())
            }
        }
    }
}
