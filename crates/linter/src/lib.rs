//! Sunny lint rules
//!
//! This crate provides the sunny lint rules over the oxc AST:
//! type naming prefixes, `className` restriction in page files, required
//! TSDoc comments and `@/` import aliases.
//! Rules can be used:
//! 1. Through [`LintRunner`] with a [`RulesConfig`] built from a preset or config file
//! 2. Standalone, calling a rule's `check_*` methods on individual nodes

pub mod config;
pub mod fixer;
pub mod registry;
pub mod rules;
pub mod visitor;
mod context;
mod diagnostic;

pub use config::{preset, ConfigError, LintConfig, RuleLevel, RulesConfig};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use fixer::{apply_fixes, FixedSource};
pub use registry::RuleEntry;
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner};

/// Rule category for sunny rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
    /// Rules that enforce naming and layout conventions
    Style,
    /// Rules that require documentation
    Documentation,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// One-line description shown by the registry
    const DESCRIPTION: &'static str;

    /// Name as written in configuration files (`sunny/<rule>`)
    fn qualified_name() -> String {
        format!("{}/{}", common::PLUGIN_NAMESPACE, Self::NAME)
    }
}
