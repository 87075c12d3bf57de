//! Naming helpers for generated identifiers and files.

use std::path::{Path, PathBuf};

/// Extension of Go source units.
pub const GO_EXTENSION: &str = ".go";

/// Append a literal suffix to a name.
///
/// This is the whole pluralization rule: `Item` + `s` is `Items`, and
/// `Status` + `s` is `Statuss`. No grammar, no collapsing.
pub fn suffixed(name: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(name.len() + suffix.len());
    out.push_str(name);
    out.push_str(suffix);
    out
}

/// Whether `s` is a valid Go identifier (letters, digits, underscores; no leading digit).
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Path of the generated file for a source unit.
///
/// `dir/user.go` with suffix `_gen.go` becomes `dir/user_gen.go`. Paths that
/// don't end in `.go` get the suffix appended to the full file name.
pub fn output_path(source: &Path, suffix: &str) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(GO_EXTENSION).unwrap_or(&file_name);
    source.with_file_name(suffixed(stem, suffix))
}
