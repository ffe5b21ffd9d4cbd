//! Shared constants for the sunny rules

use phf::{phf_set, Set};

/// Extensions a `page.<ext>` file may carry
pub static PAGE_EXTENSIONS: Set<&'static str> = phf_set! {
    "js",
    "ts",
    "jsx",
    "tsx",
};

/// File stem that marks a routed page
pub const PAGE_FILE_STEM: &str = "page";

/// Directory that the `@` import alias points at
pub const ALIAS_ROOT_DIR: &str = "src";

/// Prefix used in place of the alias root directory
pub const ALIAS_PREFIX: &str = "@";

/// Marker that turns a block comment into a doc comment (`/** ... */`)
pub const DOC_COMMENT_MARKER: char = '*';

/// Plugin namespace used in configuration keys (`sunny/<rule>`)
pub const PLUGIN_NAMESPACE: &str = "sunny";

/// Check whether an extension is one of the page extensions
pub fn is_page_extension(ext: &str) -> bool {
    PAGE_EXTENSIONS.contains(ext)
}
