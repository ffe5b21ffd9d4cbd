//! Rule configuration
//!
//! [`RulesConfig`] is what the runner consumes. It is built either in code
//! (`RulesConfig::none().with_use_alias(..)`), from a preset, or from a
//! [`LintConfig`] read from JSON:
//!
//! ```json
//! { "extends": "recommended", "rules": { "sunny/require-tsdoc": "warn" } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostic::DiagnosticSeverity;
use crate::registry;
use crate::rules::{NoClassnameAllowed, RequireTsdoc, TypeNamingConvention, UseAlias};
use crate::RuleMeta;

/// Errors produced while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("invalid rule level `{0}`, expected \"off\", \"warn\", \"error\", 0, 1 or 2")]
    InvalidLevel(String),

    #[error("failed to parse lint config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How a rule is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawRuleLevel")]
pub enum RuleLevel {
    Off,
    Warn,
    #[default]
    Error,
}

impl RuleLevel {
    /// Severity of the diagnostics of an enabled rule
    pub fn severity(self) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }
}

/// Level as written in a config file, either by name or by number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRuleLevel {
    Name(String),
    Number(i64),
}

impl TryFrom<RawRuleLevel> for RuleLevel {
    type Error = ConfigError;

    fn try_from(raw: RawRuleLevel) -> Result<Self, ConfigError> {
        match raw {
            RawRuleLevel::Name(name) => match name.as_str() {
                "off" => Ok(Self::Off),
                "warn" => Ok(Self::Warn),
                "error" => Ok(RuleLevel::Error),
                _ => Err(ConfigError::InvalidLevel(name)),
            },
            RawRuleLevel::Number(0) => Ok(Self::Off),
            RawRuleLevel::Number(1) => Ok(Self::Warn),
            RawRuleLevel::Number(2) => Ok(RuleLevel::Error),
            RawRuleLevel::Number(n) => Err(ConfigError::InvalidLevel(n.to_string())),
        }
    }
}

static RECOMMENDED: [(&str, RuleLevel); 3] = [
    (TypeNamingConvention::NAME, RuleLevel::Error),
    (NoClassnameAllowed::NAME, RuleLevel::Error),
    (RequireTsdoc::NAME, RuleLevel::Error),
];

static ALL: [(&str, RuleLevel); 4] = [
    (TypeNamingConvention::NAME, RuleLevel::Error),
    (NoClassnameAllowed::NAME, RuleLevel::Error),
    (RequireTsdoc::NAME, RuleLevel::Error),
    (UseAlias::NAME, RuleLevel::Error),
];

/// Rule levels of a named preset. `recommended` leaves use-alias off, since
/// the alias depends on the host's path mapping; `all` turns it on.
pub fn preset(name: &str) -> Result<&'static [(&'static str, RuleLevel)], ConfigError> {
    match name {
        "recommended" => Ok(&RECOMMENDED),
        "all" => Ok(&ALL),
        _ => Err(ConfigError::UnknownPreset(name.to_string())),
    }
}

/// Configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Preset the `rules` table is layered on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Rule name (bare or `sunny/`-prefixed) to level, in file order
    #[serde(default)]
    pub rules: IndexMap<String, RuleLevel>,
}

impl LintConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Enabled rules with their options and severities
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub type_naming_convention: Option<TypeNamingConvention>,
    pub no_classname_allowed: Option<NoClassnameAllowed>,
    pub require_tsdoc: Option<RequireTsdoc>,
    pub use_alias: Option<UseAlias>,
    /// Severity per rule name; rules without an entry report errors
    severities: IndexMap<&'static str, DiagnosticSeverity>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            type_naming_convention: Some(TypeNamingConvention::new()),
            no_classname_allowed: Some(NoClassnameAllowed::new()),
            require_tsdoc: Some(RequireTsdoc::new()),
            use_alias: Some(UseAlias::new()),
            severities: IndexMap::new(),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            type_naming_convention: None,
            no_classname_allowed: None,
            require_tsdoc: None,
            use_alias: None,
            severities: IndexMap::new(),
        }
    }

    /// Config with the levels of a named preset
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        let mut config = Self::none();
        for (rule, level) in preset(name)? {
            config.set_level(rule, *level)?;
        }
        Ok(config)
    }

    pub fn with_type_naming_convention(mut self, rule: TypeNamingConvention) -> Self {
        self.type_naming_convention = Some(rule);
        self
    }

    pub fn with_no_classname_allowed(mut self, rule: NoClassnameAllowed) -> Self {
        self.no_classname_allowed = Some(rule);
        self
    }

    pub fn with_require_tsdoc(mut self, rule: RequireTsdoc) -> Self {
        self.require_tsdoc = Some(rule);
        self
    }

    pub fn with_use_alias(mut self, rule: UseAlias) -> Self {
        self.use_alias = Some(rule);
        self
    }

    /// Enable, disable or change the severity of a rule by name.
    ///
    /// Enabling a rule that is already enabled keeps its options.
    pub fn set_level(&mut self, name: &str, level: RuleLevel) -> Result<(), ConfigError> {
        let entry = registry::find(name).ok_or_else(|| ConfigError::UnknownRule(name.to_string()))?;

        if entry.name == TypeNamingConvention::NAME {
            toggle(&mut self.type_naming_convention, level, TypeNamingConvention::new);
        } else if entry.name == NoClassnameAllowed::NAME {
            toggle(&mut self.no_classname_allowed, level, NoClassnameAllowed::new);
        } else if entry.name == RequireTsdoc::NAME {
            toggle(&mut self.require_tsdoc, level, RequireTsdoc::new);
        } else if entry.name == UseAlias::NAME {
            toggle(&mut self.use_alias, level, UseAlias::new);
        } else {
            return Err(ConfigError::UnknownRule(name.to_string()));
        }

        match level.severity() {
            Some(severity) => {
                self.severities.insert(entry.name, severity);
            }
            None => {
                self.severities.shift_remove(entry.name);
            }
        }
        Ok(())
    }

    pub fn with_level(mut self, name: &str, level: RuleLevel) -> Result<Self, ConfigError> {
        self.set_level(name, level)?;
        Ok(self)
    }

    /// Severity the diagnostics of `rule` are reported with
    pub fn severity(&self, rule: &str) -> DiagnosticSeverity {
        self.severities
            .get(rule)
            .copied()
            .unwrap_or(DiagnosticSeverity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.type_naming_convention.is_none()
            && self.no_classname_allowed.is_none()
            && self.require_tsdoc.is_none()
            && self.use_alias.is_none()
    }

    /// Names of the enabled rules, in registry order
    pub fn enabled_rules(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.type_naming_convention.is_some() {
            names.push(TypeNamingConvention::NAME);
        }
        if self.no_classname_allowed.is_some() {
            names.push(NoClassnameAllowed::NAME);
        }
        if self.require_tsdoc.is_some() {
            names.push(RequireTsdoc::NAME);
        }
        if self.use_alias.is_some() {
            names.push(UseAlias::NAME);
        }
        names
    }
}

fn toggle<R>(slot: &mut Option<R>, level: RuleLevel, make: impl FnOnce() -> R) {
    if !level.is_enabled() {
        *slot = None;
    } else if slot.is_none() {
        *slot = Some(make());
    }
}

impl TryFrom<&LintConfig> for RulesConfig {
    type Error = ConfigError;

    fn try_from(config: &LintConfig) -> Result<Self, Self::Error> {
        let mut rules = match &config.extends {
            Some(name) => Self::from_preset(name)?,
            None => Self::none(),
        };
        for (name, level) in &config.rules {
            rules.set_level(name, *level)?;
        }
        Ok(rules)
    }
}
