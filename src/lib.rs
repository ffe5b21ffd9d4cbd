//! Sunny lint
//!
//! Parses a JavaScript/TypeScript file with OXC and runs the sunny rules on it:
//! type naming prefixes, no `className` in page files, required TSDoc
//! comments and `@/` import aliases.
//!
//! ## Usage
//!
//! ```rust
//! use sunny_lint::{lint, LintOptions};
//!
//! let options = LintOptions::for_file("src/user.ts").with_fix(true);
//! let output = lint("interface User {}", options, None).unwrap();
//! assert_eq!(output.diagnostics[0].message_id, "interfaceName");
//! assert_eq!(output.code.as_deref(), Some("interface IUser {}"));
//! ```

pub use common::LintOptions;
pub use sunny_linter::{
    ConfigError, Diagnostic, DiagnosticSeverity, Fix, LintConfig, RuleLevel, RulesConfig,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use thiserror::Error;

use sunny_linter::lint_with_config;

/// Errors returned by [`lint`] and [`load_config`]
#[derive(Debug, Error)]
pub enum LintError {
    /// The source has syntax errors; rules never run on a broken tree
    #[error("failed to parse {path}: {}", .errors.join("; "))]
    Parse { path: String, errors: Vec<String> },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of linting one file
#[derive(Debug, Clone)]
pub struct LintOutput {
    pub diagnostics: Vec<Diagnostic>,
    /// Fixed source, only when fixing was requested
    pub code: Option<String>,
}

impl LintOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }
}

/// Build a rule configuration from the JSON contents of a config file
pub fn load_config(json: &str) -> Result<RulesConfig, LintError> {
    let config = LintConfig::from_json(json)?;
    Ok(RulesConfig::try_from(&config)?)
}

/// Lint `source`. Without a `config` every rule is enabled at `error`.
#[tracing::instrument(skip_all, fields(file = %options.filename, fix = options.fix))]
pub fn lint(
    source: &str,
    options: LintOptions<'_>,
    config: Option<RulesConfig>,
) -> Result<LintOutput, LintError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, options.source_type).parse();

    if !ret.errors.is_empty() {
        tracing::debug!(errors = ret.errors.len(), "parse failed");
        return Err(LintError::Parse {
            path: options.filename.to_string(),
            errors: ret.errors.iter().map(ToString::to_string).collect(),
        });
    }

    let semantic_ret = SemanticBuilder::new().build(&ret.program);
    let result = lint_with_config(
        &semantic_ret.semantic,
        options.filename,
        config.unwrap_or_default(),
    );

    let code = options.fix.then(|| {
        let fixed = result.fix(source);
        if fixed.suppressed > 0 {
            tracing::debug!(
                suppressed = fixed.suppressed,
                "some fixes were skipped, lint the output again to apply them"
            );
        }
        fixed.code
    });

    Ok(LintOutput {
        diagnostics: result.diagnostics,
        code,
    })
}

/// A diagnostic as seen from JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    /// Qualified rule name, e.g. `sunny/use-alias`
    pub rule_id: String,
    pub message_id: String,
    pub message: String,
    /// "error" or "warning"
    pub severity: String,
    /// Byte offset where the diagnostic starts
    pub start: u32,
    /// Byte offset where the diagnostic ends
    pub end: u32,
    pub fixable: bool,
}

/// Result of a lint operation
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsLintResult {
    pub diagnostics: Vec<JsDiagnostic>,
    /// The fixed code (if fixing was enabled)
    pub code: Option<String>,
}

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename, used for page detection and alias resolution
    /// @default "input.tsx"
    pub filename: Option<String>,

    /// Whether to return the fixed code
    /// @default false
    pub fix: Option<bool>,

    /// Config file contents, e.g. `{"extends": "recommended"}`
    /// @default all rules at "error"
    pub config: Option<String>,
}

/// Lint source code
#[cfg(feature = "napi")]
#[napi]
pub fn lint_source(source: String, options: Option<JsLintOptions>) -> napi::Result<JsLintResult> {
    let js_options = options.unwrap_or_default();
    let filename = js_options.filename.as_deref().unwrap_or("input.tsx");

    let config = js_options
        .config
        .as_deref()
        .map(load_config)
        .transpose()
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;

    let options = LintOptions::for_file(filename).with_fix(js_options.fix.unwrap_or(false));
    let output =
        lint(&source, options, config).map_err(|err| napi::Error::from_reason(err.to_string()))?;

    let diagnostics = output
        .diagnostics
        .into_iter()
        .map(|d| JsDiagnostic {
            rule_id: format!("{}/{}", common::PLUGIN_NAMESPACE, d.rule),
            message_id: d.message_id.to_string(),
            severity: match d.severity {
                DiagnosticSeverity::Error => "error",
                DiagnosticSeverity::Warning => "warning",
                DiagnosticSeverity::Info => "info",
                DiagnosticSeverity::Hint => "hint",
            }
            .to_string(),
            fixable: d.has_fix(),
            start: d.start,
            end: d.end,
            message: d.message,
        })
        .collect();

    Ok(JsLintResult {
        diagnostics,
        code: output.code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_source() {
        let source = "interface IUser {}\n";
        let output = lint(source, LintOptions::for_file("a.ts"), None).unwrap();
        assert!(output.diagnostics.is_empty());
        assert!(output.code.is_none());
    }

    #[test]
    fn test_fix_requested() {
        let options = LintOptions::for_file("a.ts").with_fix(true);
        let output = lint("type Id = string;", options, None).unwrap();
        assert!(output.has_errors());
        assert_eq!(output.code.as_deref(), Some("type TId = string;"));
    }

    #[test]
    fn test_parse_error() {
        let err = lint("interface {", LintOptions::for_file("broken.ts"), None).unwrap_err();
        assert!(matches!(err, LintError::Parse { ref path, .. } if path == "broken.ts"));
        assert!(err.to_string().starts_with("failed to parse broken.ts"));
    }

    #[test]
    fn test_load_config() {
        let config = load_config(r#"{"rules": {"sunny/use-alias": "warn"}}"#).unwrap();
        assert_eq!(config.enabled_rules(), vec!["use-alias"]);

        let err = load_config(r#"{"extends": "strict"}"#).unwrap_err();
        assert_eq!(err.to_string(), "unknown preset `strict`");
    }
}
