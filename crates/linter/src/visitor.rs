//! Single-pass rule driver
//!
//! `LintRunner` walks the semantic node table once, in pre-order, and hands
//! each node to the enabled rules interested in its kind. Rules never walk the
//! tree themselves; the only extra traversal is the rename pre-pass of
//! type-naming-convention.

use oxc_ast::AstKind;
use oxc_semantic::{AstNode, Semantic};

use crate::config::RulesConfig;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::fixer::{apply_fixes, FixedSource};
use crate::rules::{PageExtension, RenameTable};

/// Runs all enabled rules over one document
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
    /// Set when the document is a `page.<ext>` file
    page: Option<PageExtension>,
    renames: RenameTable,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        let page = PageExtension::from_path(ctx.filename());
        Self {
            ctx,
            config,
            page,
            renames: RenameTable::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run all enabled rules on the document
    pub fn run(mut self) -> LintResult {
        if self.config.is_empty() {
            return LintResult::default();
        }

        let semantic = self.ctx.semantic();
        if let Some(rule) = &self.config.type_naming_convention {
            self.renames = rule.collect_renames(semantic.nodes().program());
            tracing::trace!(renames = self.renames.len(), "collected type renames");
        }

        for node in semantic.nodes().iter() {
            self.check_node(node);
        }

        for diagnostic in &mut self.diagnostics {
            diagnostic.severity = self.config.severity(&diagnostic.rule);
        }

        tracing::debug!(
            file = self.ctx.filename(),
            rules = ?self.config.enabled_rules(),
            diagnostics = self.diagnostics.len(),
            "lint finished"
        );

        LintResult {
            diagnostics: self.diagnostics,
        }
    }

    /// Dispatch one node to the rules interested in its kind
    fn check_node(&mut self, node: &AstNode<'a>) {
        match node.kind() {
            AstKind::TSInterfaceDeclaration(decl) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_interface(decl, &mut self.renames));
                }
            }
            AstKind::TSTypeAliasDeclaration(decl) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_type_alias(decl, &mut self.renames));
                }
            }
            AstKind::TSEnumDeclaration(decl) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_enum(decl, &mut self.renames));
                }
            }
            AstKind::TSTypeReference(reference) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_type_reference(reference, &self.renames));
                }
            }
            AstKind::TSTypeQuery(query) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_type_query(query, &self.renames));
                }
            }
            AstKind::TSClassImplements(implements) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_class_implements(implements, &self.renames));
                }
            }
            AstKind::TSInterfaceHeritage(heritage) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_interface_heritage(heritage, &self.renames));
                }
            }
            AstKind::ExportSpecifier(specifier) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_export_specifier(specifier, &self.renames));
                }
            }
            AstKind::StaticMemberExpression(member) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_static_member(member, &self.renames));
                }
            }
            AstKind::ComputedMemberExpression(member) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_computed_member(member, &self.renames));
                }
            }
            AstKind::AssignmentExpression(assign) => {
                if let Some(rule) = &self.config.type_naming_convention {
                    self.diagnostics
                        .extend(rule.check_assignment(assign, &self.renames));
                }
            }
            AstKind::JSXAttribute(attr) => {
                // no-className-allowed only applies to page files
                if let (Some(rule), Some(page)) = (&self.config.no_classname_allowed, self.page) {
                    self.diagnostics.extend(rule.check(attr, page));
                }
            }
            AstKind::Function(func) => {
                if let Some(rule) = &self.config.require_tsdoc {
                    self.diagnostics
                        .extend(rule.check_function(func, node.id(), &self.ctx));
                }
            }
            AstKind::ImportDeclaration(decl) => {
                if let Some(rule) = &self.config.use_alias {
                    self.diagnostics
                        .extend(rule.check_import_declaration(decl, &self.ctx));
                }
            }
            AstKind::ImportExpression(expr) => {
                if let Some(rule) = &self.config.use_alias {
                    self.diagnostics
                        .extend(rule.check_import_expression(expr, &self.ctx));
                }
            }
            _ => {}
        }
    }
}

/// Result of running the linter
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Warning))
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.has_fix()).count()
    }

    /// Apply the fixes of every diagnostic to `source`
    pub fn fix(&self, source: &str) -> FixedSource {
        apply_fixes(source, &self.diagnostics)
    }
}

/// Convenience function to lint a document with default configuration
pub fn lint<'a>(semantic: &'a Semantic<'a>, filename: &'a str) -> LintResult {
    lint_with_config(semantic, filename, RulesConfig::default())
}

/// Convenience function to lint a document with custom configuration
pub fn lint_with_config<'a>(
    semantic: &'a Semantic<'a>,
    filename: &'a str,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(semantic, filename);
    LintRunner::new(ctx, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{
        AliasScope, NoClassnameAllowed, RequireTsdoc, TypeNamingConvention, UseAlias,
    };
    use crate::RuleLevel;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_semantic::SemanticBuilder;
    use oxc_span::SourceType;

    fn parse_and_lint(source: &str, filename: &str) -> LintResult {
        parse_and_lint_with_config(source, filename, RulesConfig::default())
    }

    fn parse_and_lint_with_config(source: &str, filename: &str, config: RulesConfig) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::from_path(filename).unwrap_or(SourceType::tsx());
        let ret = Parser::new(&allocator, source, source_type).parse();
        let semantic_ret = SemanticBuilder::new().build(&ret.program);
        lint_with_config(&semantic_ret.semantic, filename, config)
    }

    #[test]
    fn test_lint_clean_code() {
        let result = parse_and_lint(
            "/**\n *\n */\nexport function f() {\n  return 1;\n}\ninterface IUser {}\n",
            "src/user.ts",
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostics_in_traversal_order() {
        let source = "import { a } from '../a';\ninterface User {}\nfunction f() { return 1; }\n";
        let result = parse_and_lint(source, "/p/src/x/y.ts");
        let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(rules, vec!["use-alias", "type-naming-convention", "require-tsdoc"]);
    }

    #[test]
    fn test_page_rule_only_on_pages() {
        let source = r#"<div className="a" />"#;
        let config = RulesConfig::none().with_no_classname_allowed(NoClassnameAllowed::new());

        let result = parse_and_lint_with_config(source, "app/page.jsx", config.clone());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message_id, "jsx");

        let result = parse_and_lint_with_config(source, "app/layout.jsx", config);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_forward_reference() {
        let source = "const s: Status = Status.A;\nenum Status { A }\n";
        let config = RulesConfig::none().with_type_naming_convention(TypeNamingConvention::new());
        let result = parse_and_lint_with_config(source, "a.ts", config);
        assert_eq!(result.diagnostics.len(), 3);

        let config =
            RulesConfig::none().with_type_naming_convention(TypeNamingConvention::forward_only());
        let result = parse_and_lint_with_config(source, "a.ts", config);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message_id, "enumName");
    }

    #[test]
    fn test_disabled_rules() {
        let config = RulesConfig::none().with_require_tsdoc(RequireTsdoc::new());
        let result = parse_and_lint_with_config(
            "import x from '../x';\ntype A = 1;\nfunction f() {}\n",
            "/p/src/a/b.ts",
            config,
        );
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].rule, "require-tsdoc");

        let result = parse_and_lint_with_config("type A = 1;", "a.ts", RulesConfig::none());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_result_counts() {
        let config = RulesConfig::none()
            .with_use_alias(UseAlias::new().with_scope(AliasScope::Always))
            .with_level("use-alias", RuleLevel::Warn)
            .and_then(|c| c.with_level("type-naming-convention", RuleLevel::Error))
            .expect("known rules");
        let result = parse_and_lint_with_config(
            "import a from '../a';\nimport b from './b';\ninterface A {}\n",
            "/p/lib/x/y.ts",
            config,
        );
        assert!(result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(result.warning_count(), 2);
        assert_eq!(result.error_count(), 1);
        // Outside `src` there is nothing to rewrite the imports to
        assert_eq!(result.fixable_count(), 1);
    }
}
