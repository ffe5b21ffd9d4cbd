//! sunny/use-alias
//!
//! Prefer the `@/` path alias over relative imports. The alias points at the
//! project's `src` directory, so `../components/Button` imported from
//! `src/pages/Home.tsx` becomes `@/components/Button`.

use oxc_ast::ast::{ImportDeclaration, ImportExpression, StringLiteral};
use oxc_span::Span;

use common::{alias_for_import, as_string_literal, is_relative_specifier};

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

/// Which relative imports are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AliasScope {
    /// Only imports that resolve into a `src` directory, each with a fix
    #[default]
    SrcOnly,
    /// Every relative import; a fix is attached when it resolves into `src`
    Always,
}

/// use-alias rule
#[derive(Debug, Clone, Default)]
pub struct UseAlias {
    pub scope: AliasScope,
}

impl RuleMeta for UseAlias {
    const NAME: &'static str = "use-alias";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Use the `@` path alias instead of relative imports.";
}

impl UseAlias {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: AliasScope) -> Self {
        self.scope = scope;
        self
    }

    /// `import { x } from '../x'`
    pub fn check_import_declaration(
        &self,
        decl: &ImportDeclaration,
        ctx: &LintContext,
    ) -> Option<Diagnostic> {
        self.check_source(decl.span, &decl.source, ctx)
    }

    /// `import('../x')`, only when the argument is a string literal
    pub fn check_import_expression(
        &self,
        expr: &ImportExpression,
        ctx: &LintContext,
    ) -> Option<Diagnostic> {
        let source = as_string_literal(&expr.source)?;
        self.check_source(expr.span, source, ctx)
    }

    fn check_source(
        &self,
        report_span: Span,
        source: &StringLiteral,
        ctx: &LintContext,
    ) -> Option<Diagnostic> {
        let specifier = source.value.as_str();
        if !is_relative_specifier(specifier) {
            return None;
        }

        let alias = alias_for_import(ctx.filename(), specifier);
        if alias.is_none() && self.scope == AliasScope::SrcOnly {
            return None;
        }

        let mut diagnostic = Diagnostic::warning(
            Self::NAME,
            report_span,
            format!("Use the `@` path alias instead of the relative path `{}`.", specifier),
        )
        .with_message_id("useAlias");

        match alias {
            Some(alias) => {
                let quote = quote_char(ctx.span_text(source.span));
                diagnostic = diagnostic.with_fix(
                    Fix::new(source.span, format!("{quote}{alias}{quote}"))
                        .with_message(format!("Replace with `{}`", alias)),
                );
            }
            None => {
                diagnostic = diagnostic.with_help(
                    "The import does not resolve into a `src` directory, so there is no alias for it.",
                );
            }
        }

        Some(diagnostic)
    }
}

/// Quote character a string literal was written with
fn quote_char(literal: &str) -> char {
    match literal.chars().next() {
        Some(quote @ ('"' | '\'')) => quote,
        _ => '\'',
    }
}
