//! Shape checks over oxc AST nodes

use oxc_ast::ast::{
    BindingPattern, Expression, FormalParameters, FunctionBody, IdentifierReference, Statement,
    StringLiteral,
};

/// Placeholder used when a parameter is not a plain identifier
pub const UNKNOWN_PARAM_NAME: &str = "unknown";

/// Check if an expression is a JSX element or fragment, ignoring parentheses
pub fn is_ui_element(expr: &Expression) -> bool {
    expr.without_parentheses().is_jsx()
}

/// Check if a function body directly returns a UI element.
///
/// Only `return` statements at the top level of the body are inspected. A
/// returned arrow function counts when its expression body is a UI element.
pub fn returns_ui_element(body: &FunctionBody) -> bool {
    body.statements.iter().any(|stmt| {
        let Statement::ReturnStatement(ret) = stmt else {
            return false;
        };
        let Some(argument) = &ret.argument else {
            return false;
        };
        match argument.without_parentheses() {
            Expression::ArrowFunctionExpression(arrow) => {
                arrow.get_expression().is_some_and(is_ui_element)
            }
            expr => is_ui_element(expr),
        }
    })
}

/// Name bound by a pattern, if it is a plain identifier
pub fn binding_name<'a>(pattern: &BindingPattern<'a>) -> Option<&'a str> {
    match pattern {
        BindingPattern::BindingIdentifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Parameter names in declaration order.
///
/// Anything other than a plain identifier (destructuring, defaults, rest)
/// is reported as `unknown`.
pub fn parameter_names<'a>(params: &FormalParameters<'a>) -> Vec<&'a str> {
    let mut names: Vec<&'a str> = params
        .items
        .iter()
        .map(|param| {
            if param.initializer.is_some() {
                return UNKNOWN_PARAM_NAME;
            }
            binding_name(&param.pattern).unwrap_or(UNKNOWN_PARAM_NAME)
        })
        .collect();
    if params.rest.is_some() {
        names.push(UNKNOWN_PARAM_NAME);
    }
    names
}

/// The string literal an expression consists of, ignoring parentheses
pub fn as_string_literal<'b, 'a>(expr: &'b Expression<'a>) -> Option<&'b StringLiteral<'a>> {
    match expr.without_parentheses() {
        Expression::StringLiteral(lit) => Some(lit),
        _ => None,
    }
}

/// The identifier an expression consists of
pub fn as_identifier<'b, 'a>(expr: &'b Expression<'a>) -> Option<&'b IdentifierReference<'a>> {
    match expr {
        Expression::Identifier(ident) => Some(ident),
        _ => None,
    }
}
