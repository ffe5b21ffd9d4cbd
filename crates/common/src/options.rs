//! Per-file options for a lint pass

use oxc_span::SourceType;

use crate::constants::{is_page_extension, PAGE_FILE_STEM};

/// Options describing the document being linted
#[derive(Debug, Clone, Copy)]
pub struct LintOptions<'a> {
    /// Path of the document, used for page detection and import resolution
    pub filename: &'a str,

    /// Source type (tsx, jsx, etc.)
    pub source_type: SourceType,

    /// Whether to apply fixes and return the rewritten source
    pub fix: bool,
}

impl Default for LintOptions<'_> {
    fn default() -> Self {
        Self {
            filename: "input.tsx",
            source_type: SourceType::tsx(),
            fix: false,
        }
    }
}

impl<'a> LintOptions<'a> {
    /// Options for `filename`, deriving the source type from its extension.
    ///
    /// Unknown extensions fall back to TSX so every rule can see its syntax.
    pub fn for_file(filename: &'a str) -> Self {
        Self {
            filename,
            source_type: SourceType::from_path(filename).unwrap_or(SourceType::tsx()),
            fix: false,
        }
    }

    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }
}

/// Extension of a `page.<ext>` file name, `None` for any other file.
///
/// Both `/` and `\` are accepted as separators.
pub fn page_extension(filename: &str) -> Option<&str> {
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, ext) = basename.split_once('.')?;
    (stem == PAGE_FILE_STEM && is_page_extension(ext)).then_some(ext)
}
