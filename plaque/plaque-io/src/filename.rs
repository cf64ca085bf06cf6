//! Filesystem-safe filename derivation.

/// Fallback base name when the input yields nothing usable.
pub const DEFAULT_FILE_BASE: &str = "braille_plaque";

/// Derive a conservative filesystem-safe base name from arbitrary text.
///
/// Trims surrounding whitespace, keeps the first 24 characters, and
/// collapses every run of characters outside `[A-Za-z0-9_-]` into a single
/// underscore. An empty result falls back to [`DEFAULT_FILE_BASE`].
///
/// # Example
///
/// ```
/// use plaque_io::sanitize_file_base;
///
/// assert_eq!(sanitize_file_base("Hello🙂 World!"), "Hello_World_");
/// assert_eq!(sanitize_file_base("  \t "), "braille_plaque");
/// assert_eq!(sanitize_file_base("already-safe_42"), "already-safe_42");
/// ```
#[must_use]
pub fn sanitize_file_base(text: &str) -> String {
    let mut base = String::new();
    let mut in_run = false;

    for ch in text.trim().chars().take(24) {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            base.push(ch);
            in_run = false;
        } else if !in_run {
            base.push('_');
            in_run = true;
        }
    }

    if base.is_empty() {
        DEFAULT_FILE_BASE.to_string()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_characters() {
        assert_eq!(sanitize_file_base("abc_DEF-123"), "abc_DEF-123");
    }

    #[test]
    fn collapses_runs_to_single_underscore() {
        assert_eq!(sanitize_file_base("a  !!  b"), "a_b");
        assert_eq!(sanitize_file_base("Hello🙂 World!"), "Hello_World_");
    }

    #[test]
    fn trims_before_truncating() {
        assert_eq!(sanitize_file_base("   spaced   "), "spaced");
    }

    #[test]
    fn truncates_to_24_characters() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        assert_eq!(sanitize_file_base(long), "abcdefghijklmnopqrstuvwx");
        assert_eq!(sanitize_file_base(long).chars().count(), 24);
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(sanitize_file_base(""), DEFAULT_FILE_BASE);
        assert_eq!(sanitize_file_base("   "), DEFAULT_FILE_BASE);
    }

    #[test]
    fn all_unsupported_input_keeps_the_underscore() {
        // a run of unsupported characters is one underscore, not empty
        assert_eq!(sanitize_file_base("🙂🙃"), "_");
    }
}
