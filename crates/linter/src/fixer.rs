//! Applies the fixes carried by diagnostics to the original source
//!
//! Fixes are committed one diagnostic at a time, in the order the diagnostics
//! were reported. A diagnostic whose fixes touch an interval that is already
//! committed is skipped entirely, so a partially applied fix never reaches the
//! output. Running the linter again on the result picks up what was skipped.

use crate::diagnostic::{Diagnostic, Fix};

/// Source after fixing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    pub code: String,
    /// Diagnostics whose fixes were applied
    pub applied: usize,
    /// Diagnostics whose fixes were skipped because of a conflict
    pub suppressed: usize,
}

impl FixedSource {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Two fixes conflict when they overlap or start at the same offset.
/// Adjacent edits (`a.end == b.start`) are fine.
fn conflicts(a: &Fix, b: &Fix) -> bool {
    a.start == b.start || (a.start < b.end && b.start < a.end)
}

fn fits(fix: &Fix, source: &str) -> bool {
    let (start, end) = (fix.start as usize, fix.end as usize);
    start <= end
        && end <= source.len()
        && source.is_char_boundary(start)
        && source.is_char_boundary(end)
}

/// Apply the fixes of `diagnostics` to `source`
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> FixedSource {
    let mut committed: Vec<&Fix> = Vec::new();
    let mut applied = 0;
    let mut suppressed = 0;

    for diagnostic in diagnostics.iter().filter(|d| d.has_fix()) {
        let mut accepted = true;
        for (idx, fix) in diagnostic.fixes.iter().enumerate() {
            let clashes = !fits(fix, source)
                || committed.iter().any(|other| conflicts(other, fix))
                || diagnostic.fixes[..idx].iter().any(|other| conflicts(other, fix));
            if clashes {
                accepted = false;
                break;
            }
        }

        if !accepted {
            suppressed += 1;
            tracing::debug!(
                rule = %diagnostic.rule,
                start = diagnostic.start,
                end = diagnostic.end,
                "fix suppressed, it conflicts with an earlier fix"
            );
            continue;
        }

        committed.extend(diagnostic.fixes.iter());
        applied += 1;
    }

    committed.sort_by_key(|fix| (fix.start, fix.end));

    let mut code = String::with_capacity(source.len());
    let mut last = 0;
    for fix in committed {
        code.push_str(&source[last..fix.start as usize]);
        code.push_str(&fix.replacement);
        last = fix.end as usize;
    }
    code.push_str(&source[last..]);

    tracing::trace!(applied, suppressed, "fixes applied");

    FixedSource {
        code,
        applied,
        suppressed,
    }
}
