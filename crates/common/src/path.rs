//! Lexical resolution of import specifiers
//!
//! Nothing here touches the filesystem: paths are folded purely as text so the
//! same result is produced for POSIX and Windows-style file names.

use crate::constants::{ALIAS_PREFIX, ALIAS_ROOT_DIR};

/// Check if an import specifier is relative (`./x`, `../x`, `.`)
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with('.')
}

/// A path split into folded segments
struct ResolvedPath {
    rooted: bool,
    segments: Vec<String>,
    /// Segments up to and including the `src` directory nearest the importer
    importer_root: Option<Vec<String>>,
}

impl ResolvedPath {
    fn resolve(importer: &str, specifier: &str) -> Self {
        let importer = importer.replace('\\', "/");
        let rooted = importer.starts_with('/');

        let mut segments: Vec<String> = importer
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        // Drop the importing file's own name
        segments.pop();
        let importer_root = segments
            .iter()
            .rposition(|segment| segment == ALIAS_ROOT_DIR)
            .map(|idx| segments[..=idx].to_vec());

        for segment in specifier.replace('\\', "/").split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    let can_pop = segments.last().is_some_and(|last| last != "..");
                    if can_pop {
                        segments.pop();
                    } else if !rooted {
                        segments.push("..".to_string());
                    }
                }
                other => segments.push(other.to_string()),
            }
        }

        Self {
            rooted,
            segments,
            importer_root,
        }
    }

    fn to_path_string(&self) -> String {
        let joined = self.segments.join("/");
        if self.rooted {
            format!("/{joined}")
        } else {
            joined
        }
    }

    /// Segments following the alias root.
    ///
    /// The root is the `src` directory nearest the importer while the
    /// resolved path stays inside it. Otherwise it is the last `src` segment
    /// of the resolved path.
    fn after_alias_root(&self) -> Option<&[String]> {
        let idx = match &self.importer_root {
            Some(root) if self.segments.starts_with(root) => root.len() - 1,
            _ => self
                .segments
                .iter()
                .rposition(|segment| segment == ALIAS_ROOT_DIR)?,
        };
        Some(&self.segments[idx + 1..])
    }
}

/// Resolve `specifier` relative to the directory containing `importer`.
///
/// Separators are normalized to `/`; `.` and `..` segments are folded.
pub fn resolve_specifier(importer: &str, specifier: &str) -> String {
    ResolvedPath::resolve(importer, specifier).to_path_string()
}

/// Compute the `@/...` alias for a relative import.
///
/// Returns `None` when the specifier is not relative or when the resolved
/// path never passes through a `src` directory.
pub fn alias_for_import(importer: &str, specifier: &str) -> Option<String> {
    if !is_relative_specifier(specifier) {
        return None;
    }

    let resolved = ResolvedPath::resolve(importer, specifier);
    let rest = resolved.after_alias_root()?;
    if rest.is_empty() {
        Some(ALIAS_PREFIX.to_string())
    } else {
        Some(format!("{}/{}", ALIAS_PREFIX, rest.join("/")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_specifier() {
        assert!(is_relative_specifier("./a"));
        assert!(is_relative_specifier("../a"));
        assert!(!is_relative_specifier("lodash"));
        assert!(!is_relative_specifier("@/components/Button"));
    }

    #[test]
    fn test_resolve_posix() {
        assert_eq!(
            resolve_specifier("/project/src/pages/Home.tsx", "../components/Button"),
            "/project/src/components/Button"
        );
        assert_eq!(resolve_specifier("/a/b/c.ts", "../../d"), "/d");
        assert_eq!(resolve_specifier("/a/c.ts", "../../../d"), "/d");
    }

    #[test]
    fn test_resolve_windows() {
        assert_eq!(
            resolve_specifier("C:\\project\\src\\App.tsx", "./components/Button"),
            "C:/project/src/components/Button"
        );
    }

    #[test]
    fn test_resolve_relative_importer() {
        assert_eq!(resolve_specifier("page.tsx", "../x"), "../x");
        assert_eq!(resolve_specifier("src/a/b.ts", "./c"), "src/a/c");
    }

    #[test]
    fn test_alias_parent_directory() {
        assert_eq!(
            alias_for_import("/project/src/pages/Home.tsx", "../components/Button").as_deref(),
            Some("@/components/Button")
        );
        assert_eq!(
            alias_for_import("C:\\project\\src\\utils\\api\\index.ts", "../http/index").as_deref(),
            Some("@/utils/http/index")
        );
    }

    #[test]
    fn test_alias_same_directory() {
        assert_eq!(
            alias_for_import("C:\\project\\src\\App.tsx", "./components/Button").as_deref(),
            Some("@/components/Button")
        );
    }

    #[test]
    fn test_alias_root_itself() {
        assert_eq!(alias_for_import("/p/src/a/b.ts", "..").as_deref(), Some("@"));
    }

    #[test]
    fn test_alias_nearest_src() {
        assert_eq!(
            alias_for_import("/home/src/proj/src/pages/a.ts", "../x").as_deref(),
            Some("@/x")
        );
        // A nested `src` below the importer's root is part of the alias
        assert_eq!(
            alias_for_import("/p/src/a.ts", "./pkg/src/y").as_deref(),
            Some("@/pkg/src/y")
        );
        // Importers outside any `src` use the one the import lands in
        assert_eq!(
            alias_for_import("/project/lib/a.ts", "../src/x").as_deref(),
            Some("@/x")
        );
    }

    #[test]
    fn test_alias_requires_src() {
        assert_eq!(alias_for_import("/project/lib/a.ts", "../b"), None);
        assert_eq!(alias_for_import("/project/src/a.ts", "../b"), None);
    }

    #[test]
    fn test_alias_ignores_bare_specifiers() {
        assert_eq!(alias_for_import("/project/src/a.ts", "lodash"), None);
        assert_eq!(alias_for_import("/project/src/a.ts", "@/x"), None);
    }
}
