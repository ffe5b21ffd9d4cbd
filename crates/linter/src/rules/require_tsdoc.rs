//! sunny/require-tsdoc
//!
//! Require a `/** ... */` comment on every function declaration that does not
//! return a UI element. The fix inserts a skeleton with one `@param` line per
//! parameter, indented to match the declaration.

use oxc_ast::ast::{Function, FunctionType};
use oxc_ast::AstKind;
use oxc_semantic::NodeId;
use oxc_span::Span;

use common::{indentation_at, parameter_names, returns_ui_element};

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

/// require-tsdoc rule
#[derive(Debug, Clone, Default)]
pub struct RequireTsdoc;

impl RuleMeta for RequireTsdoc {
    const NAME: &'static str = "require-tsdoc";
    const CATEGORY: RuleCategory = RuleCategory::Documentation;
    const DESCRIPTION: &'static str =
        "Require a TSDoc comment on functions that do not return a UI element.";
}

impl RequireTsdoc {
    pub fn new() -> Self {
        Self
    }

    /// Check a function node. Only declarations with a body are considered.
    pub fn check_function<'a>(
        &self,
        func: &Function<'a>,
        node_id: NodeId,
        ctx: &LintContext<'a>,
    ) -> Option<Diagnostic> {
        if func.r#type != FunctionType::FunctionDeclaration {
            return None;
        }
        let body = func.body.as_ref()?;
        if returns_ui_element(body) {
            return None;
        }

        let anchor = Self::comment_anchor(func, node_id, ctx);
        let documented = ctx
            .comments_before(anchor.start)
            .into_iter()
            .any(|comment| ctx.is_doc_comment(comment));
        if documented {
            return None;
        }

        let indent = indentation_at(ctx.source_text(), anchor.start);
        let params = parameter_names(&func.params);
        let name = func.id.as_ref().map_or("default", |id| id.name.as_str());

        Some(
            Diagnostic::warning(
                Self::NAME,
                func.span,
                format!("Function `{}` is missing a TSDoc comment.", name),
            )
            .with_message_id("missingTSDoc")
            .with_fix(
                Fix::insert(anchor.start, doc_comment(&params, &indent))
                    .with_message("Add a TSDoc comment"),
            ),
        )
    }

    /// Span the doc comment belongs to: the export wrapper if the function is
    /// its direct value, otherwise the function itself
    fn comment_anchor<'a>(func: &Function<'a>, node_id: NodeId, ctx: &LintContext<'a>) -> Span {
        match ctx.parent_kind(node_id) {
            AstKind::ExportNamedDeclaration(export) => export.span,
            AstKind::ExportDefaultDeclaration(export) => export.span,
            _ => func.span,
        }
    }
}

/// Skeleton doc comment, followed by the indentation of the line it is
/// inserted into so the declaration keeps its column
fn doc_comment(params: &[&str], indent: &str) -> String {
    let mut doc = String::from("/**\n");
    if params.is_empty() {
        doc.push_str(&format!("{indent} *\n"));
    } else {
        for name in params {
            doc.push_str(&format!("{indent} * @param {name} -\n"));
        }
    }
    doc.push_str(&format!("{indent} */\n{indent}"));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_semantic::SemanticBuilder;
    use oxc_span::SourceType;

    fn check(source: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "should parse");
        let semantic = SemanticBuilder::new().build(&ret.program).semantic;
        let ctx = LintContext::new(&semantic, "input.tsx");

        let rule = RequireTsdoc::new();
        semantic
            .nodes()
            .iter()
            .filter_map(|node| match node.kind() {
                AstKind::Function(func) => rule.check_function(func, node.id(), &ctx),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(RequireTsdoc::NAME, "require-tsdoc");
    }

    #[test]
    fn test_doc_comment_layout() {
        assert_eq!(doc_comment(&[], ""), "/**\n *\n */\n");
        assert_eq!(
            doc_comment(&["a", "b"], "  "),
            "/**\n   * @param a -\n   * @param b -\n   */\n  "
        );
    }

    #[test]
    fn test_missing_doc_with_params() {
        let source = "  function add(a: number, b: number) {\n    return a + b;\n  }\n";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message_id, "missingTSDoc");

        let fix = &diagnostics[0].fixes[0];
        assert!(fix.is_insertion());
        assert_eq!(fix.start, 2);
        assert_eq!(
            fix.replacement,
            "/**\n   * @param a -\n   * @param b -\n   */\n  "
        );
    }

    #[test]
    fn test_documented_function() {
        let source = "/**\n * @param name -\n */\nfunction greet(name: string) {\n  return 'hello ' + name;\n}\n";
        assert!(check(source).is_empty());
    }

    #[test]
    fn test_line_comment_is_not_doc() {
        let source = "// adds\nfunction add(a: number) { return a; }\n/* plain */\nfunction sub(a: number) { return a; }\n";
        assert_eq!(check(source).len(), 2);
    }

    #[test]
    fn test_doc_comment_separated_by_code() {
        let source = "/** first */\nconst x = 1;\nfunction f() { return x; }\n";
        assert_eq!(check(source).len(), 1);
    }

    #[test]
    fn test_ui_function_exempt() {
        assert!(check("function App() {\n  return <div>Hello</div>;\n}\n").is_empty());
        assert!(check("function App() {\n  return (\n    <>\n      <span />\n    </>\n  );\n}\n").is_empty());
        assert!(check("function make() {\n  return () => <div />;\n}\n").is_empty());
    }

    #[test]
    fn test_nested_ui_return_not_analysed() {
        let source = "function App(ok: boolean) {\n  if (ok) {\n    return <div />;\n  }\n  return null;\n}\n";
        assert_eq!(check(source).len(), 1);
    }

    #[test]
    fn test_export_uses_wrapper_comment() {
        let source = "/**\n *\n */\nexport default function noParam() {\n  return 42;\n}\n";
        assert!(check(source).is_empty());

        let source = "export function sayHi(name: string) {\n  return name;\n}\n";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].fixes[0].start, 0);
        assert_eq!(diagnostics[0].fixes[0].replacement, "/**\n * @param name -\n */\n");
    }

    #[test]
    fn test_non_identifier_params() {
        let source = "function f({ a }: Props, [b]: number[], c = 1, ...rest: string[]) {\n  return a;\n}\n";
        let diagnostics = check(source);
        assert_eq!(
            diagnostics[0].fixes[0].replacement,
            "/**\n * @param unknown -\n * @param unknown -\n * @param unknown -\n * @param unknown -\n */\n"
        );
    }

    #[test]
    fn test_expressions_and_overloads_ignored() {
        let source = "const f = function () { return 1; };\nconst g = () => 1;\ndeclare function h(): void;\n";
        assert!(check(source).is_empty());
    }
}
