//! Line/column helpers over byte offsets

/// Zero-based column of `offset`, counted in characters from the start of its line.
///
/// Offsets past the end of `source` are clamped.
pub fn column_of(source: &str, offset: u32) -> usize {
    let offset = (offset as usize).min(source.len());
    let prefix = &source[..offset];
    let line_start = prefix.rfind('\n').map_or(0, |idx| idx + 1);
    prefix[line_start..].chars().count()
}

/// Indentation to reproduce the column of `offset` on a new line
pub fn indentation_at(source: &str, offset: u32) -> String {
    " ".repeat(column_of(source, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_first_line() {
        assert_eq!(column_of("function f() {}", 0), 0);
        assert_eq!(column_of("  function f() {}", 2), 2);
    }

    #[test]
    fn test_column_after_newline() {
        let source = "\n      function add() {}";
        assert_eq!(column_of(source, 7), 6);
        assert_eq!(indentation_at(source, 7), "      ");
    }

    #[test]
    fn test_column_counts_chars() {
        let source = "é; function f() {}";
        // `é` is two bytes, one column
        assert_eq!(column_of(source, 4), 3);
    }

    #[test]
    fn test_column_clamps() {
        assert_eq!(column_of("abc", 10), 3);
    }
}
