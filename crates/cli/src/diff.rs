//! Line-based unified diff for mismatch diagnostics.

use similar::TextDiff;

/// Render a unified diff between expected and actual content.
///
/// Returns `None` when the inputs are byte-identical.
pub fn unified(expected: &str, actual: &str) -> Option<String> {
    if expected == actual {
        return None;
    }

    let rendered = TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string();
    Some(rendered)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
