//! Static list of the sunny rules
//!
//! Hosts use this to list rules, validate configuration keys and render
//! documentation without instantiating any rule.

use serde::Serialize;

use common::PLUGIN_NAMESPACE;

use crate::rules::{NoClassnameAllowed, RequireTsdoc, TypeNamingConvention, UseAlias};
use crate::{RuleCategory, RuleMeta};

/// Metadata of one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEntry {
    pub name: &'static str,
    pub category: RuleCategory,
    pub description: &'static str,
    /// Whether every diagnostic the rule reports by default carries a fix
    pub fixable: bool,
    /// Message ids with a short description of each
    pub messages: &'static [(&'static str, &'static str)],
}

impl RuleEntry {
    /// Name as written in configuration files (`sunny/<rule>`)
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", PLUGIN_NAMESPACE, self.name)
    }

    pub fn has_message(&self, message_id: &str) -> bool {
        self.messages.iter().any(|(id, _)| *id == message_id)
    }
}

static RULES: [RuleEntry; 4] = [
    RuleEntry {
        name: TypeNamingConvention::NAME,
        category: TypeNamingConvention::CATEGORY,
        description: TypeNamingConvention::DESCRIPTION,
        fixable: true,
        messages: &[
            ("interfaceName", "Interface names must start with an uppercase `I`."),
            ("typeAliasName", "Type alias names must start with an uppercase `T`."),
            ("enumName", "Enum names must start with an uppercase `E`."),
        ],
    },
    RuleEntry {
        name: NoClassnameAllowed::NAME,
        category: NoClassnameAllowed::CATEGORY,
        description: NoClassnameAllowed::DESCRIPTION,
        fixable: true,
        messages: &[
            ("js", "`className` is not allowed in page.js files."),
            ("ts", "`className` is not allowed in page.ts files."),
            ("jsx", "`className` is not allowed in page.jsx files."),
            ("tsx", "`className` is not allowed in page.tsx files."),
        ],
    },
    RuleEntry {
        name: RequireTsdoc::NAME,
        category: RequireTsdoc::CATEGORY,
        description: RequireTsdoc::DESCRIPTION,
        fixable: true,
        messages: &[("missingTSDoc", "Missing TSDoc comment.")],
    },
    RuleEntry {
        name: UseAlias::NAME,
        category: UseAlias::CATEGORY,
        description: UseAlias::DESCRIPTION,
        // `AliasScope::Always` can report without a fix; it is opt-in
        fixable: true,
        messages: &[("useAlias", "Use the `@` path alias instead of a relative path.")],
    },
];

/// All rules, in registration order
pub fn rules() -> &'static [RuleEntry] {
    &RULES
}

/// Look a rule up by its bare (`use-alias`) or qualified (`sunny/use-alias`) name
pub fn find(name: &str) -> Option<&'static RuleEntry> {
    let bare = name
        .strip_prefix(PLUGIN_NAMESPACE)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(name);
    RULES.iter().find(|entry| entry.name == bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_listing() {
        let listing: Vec<_> = rules()
            .iter()
            .map(|entry| {
                let ids: Vec<_> = entry.messages.iter().map(|(id, _)| *id).collect();
                (entry.name, entry.fixable, ids)
            })
            .collect();
        assert_eq!(
            listing,
            vec![
                (
                    "type-naming-convention",
                    true,
                    vec!["interfaceName", "typeAliasName", "enumName"]
                ),
                ("no-className-allowed", true, vec!["js", "ts", "jsx", "tsx"]),
                ("require-tsdoc", true, vec!["missingTSDoc"]),
                ("use-alias", true, vec!["useAlias"]),
            ]
        );
        assert!(rules().iter().all(|entry| find(&entry.qualified_name()) == Some(entry)));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("use-alias").map(|e| e.name), Some("use-alias"));
        assert_eq!(
            find("sunny/no-className-allowed").map(|e| e.name),
            Some("no-className-allowed")
        );
        assert!(find("sunny/no-classname-allowed").is_none());
        assert!(find("other/use-alias").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_message_ids() {
        let naming = find("type-naming-convention").expect("registered");
        assert!(naming.has_message("enumName"));
        assert!(!naming.has_message("useAlias"));
        assert_eq!(naming.qualified_name(), "sunny/type-naming-convention");
    }

    #[test]
    fn test_serialize_entry() {
        let entry = find("require-tsdoc").expect("registered");
        let json = serde_json::to_value(entry).expect("serializes");
        assert_eq!(json["category"], "documentation");
        assert_eq!(json["fixable"], true);
        assert_eq!(json["messages"][0][0], "missingTSDoc");
    }
}
