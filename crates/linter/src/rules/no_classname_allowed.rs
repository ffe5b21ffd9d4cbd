//! sunny/no-className-allowed
//!
//! Disallow the `className` attribute in `page.{js,ts,jsx,tsx}` files.
//! Pages compose styled components instead of styling elements directly.

use oxc_ast::ast::{JSXAttribute, JSXAttributeName};

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

const CLASS_NAME: &str = "className";

/// Extension of a page document. Doubles as the message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageExtension {
    Js,
    Ts,
    Jsx,
    Tsx,
}

impl PageExtension {
    /// `page.<ext>` basename check, `None` for every other file
    pub fn from_path(filename: &str) -> Option<Self> {
        common::page_extension(filename).and_then(Self::from_extension)
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" => Some(Self::Js),
            "ts" => Some(Self::Ts),
            "jsx" => Some(Self::Jsx),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
            Self::Jsx => "jsx",
            Self::Tsx => "tsx",
        }
    }
}

/// no-className-allowed rule
#[derive(Debug, Clone, Default)]
pub struct NoClassnameAllowed;

impl RuleMeta for NoClassnameAllowed {
    const NAME: &'static str = "no-className-allowed";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const DESCRIPTION: &'static str =
        "Disallow `className` in `page.{js,ts,jsx,tsx}` files.";
}

impl NoClassnameAllowed {
    pub fn new() -> Self {
        Self
    }

    /// Check one JSX attribute of a page document
    pub fn check(&self, attr: &JSXAttribute, page: PageExtension) -> Option<Diagnostic> {
        let JSXAttributeName::Identifier(ident) = &attr.name else {
            return None;
        };
        if ident.name != CLASS_NAME {
            return None;
        }

        Some(
            Diagnostic::warning(
                Self::NAME,
                attr.span,
                format!("`className` is not allowed in page.{} files.", page.as_str()),
            )
            .with_message_id(page.as_str())
            .with_help("Move the styling into a component and render that component from the page.")
            .with_fix(Fix::delete(attr.span).with_message("Remove the `className` attribute")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::{Expression, JSXAttributeItem, Statement};
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn check_first_element(source: &str, page: PageExtension) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        let Statement::ExpressionStatement(stmt) = &ret.program.body[0] else {
            panic!("expected expression statement");
        };
        let Expression::JSXElement(element) = &stmt.expression else {
            panic!("expected JSX element");
        };

        let rule = NoClassnameAllowed::new();
        element
            .opening_element
            .attributes
            .iter()
            .filter_map(|item| match item {
                JSXAttributeItem::Attribute(attr) => rule.check(attr, page),
                JSXAttributeItem::SpreadAttribute(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(NoClassnameAllowed::NAME, "no-className-allowed");
    }

    #[test]
    fn test_page_extension_from_path() {
        assert_eq!(PageExtension::from_path("src/app/page.tsx"), Some(PageExtension::Tsx));
        assert_eq!(PageExtension::from_path("page.js"), Some(PageExtension::Js));
        assert_eq!(PageExtension::from_path("component.jsx"), None);
        assert_eq!(PageExtension::from_path("page.mdx"), None);
    }

    #[test]
    fn test_class_name_reported() {
        let source = r#"<div className="test" />"#;
        let diagnostics = check_first_element(source, PageExtension::Tsx);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message_id, "tsx");

        let fix = &diagnostics[0].fixes[0];
        assert_eq!(&source[fix.start as usize..fix.end as usize], r#"className="test""#);
        assert!(fix.replacement.is_empty());
    }

    #[test]
    fn test_other_attributes_ignored() {
        let diagnostics =
            check_first_element(r#"<div class="a" id="b" {...rest} />"#, PageExtension::Jsx);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_namespaced_attribute_ignored() {
        let diagnostics = check_first_element(r#"<div x:className="a" />"#, PageExtension::Tsx);
        assert!(diagnostics.is_empty());
    }
}
