//! Sunny lint rules

pub mod no_classname_allowed;
pub mod require_tsdoc;
pub mod type_naming_convention;
pub mod use_alias;

// Re-export rule structs
pub use no_classname_allowed::{NoClassnameAllowed, PageExtension};
pub use require_tsdoc::RequireTsdoc;
pub use type_naming_convention::{RenameTable, TypeDeclarationKind, TypeNamingConvention};
pub use use_alias::{AliasScope, UseAlias};
