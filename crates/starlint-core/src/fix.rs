use crate::diagnostic::Diagnostic;

/// Splice every available fix into `contents`.
///
/// Fixes replace whole comment ranges, which never overlap, so applying them
/// back to front keeps the earlier byte offsets valid.
pub fn apply_fixes(diagnostics: &[Diagnostic], contents: &str) -> String {
    let mut fixes: Vec<_> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
    fixes.sort_by_key(|fix| fix.start);

    let mut new_content = contents.to_string();
    for fix in fixes.iter().rev() {
        new_content.replace_range(fix.start..fix.end, &fix.content);
    }

    new_content
}
