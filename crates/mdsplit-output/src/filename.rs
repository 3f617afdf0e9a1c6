//! Filesystem-safe name derivation.

use crate::OutputError;

/// Reduces an arbitrary title to a filesystem-safe file name.
///
/// The name is trimmed, then every character that is not a letter or
/// digit (any script), hyphen, period, underscore, or space is stripped.
///
/// # Errors
///
/// Fails when nothing usable remains: an empty result, `.`, or `..`.
/// The caller treats this as fatal; there is no silent fallback name.
pub fn sanitize(name: &str) -> Result<String, OutputError> {
    let cleaned: String = name
        .trim()
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ' '))
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        return Err(OutputError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(sanitize("Overview").unwrap(), "Overview");
        assert_eq!(sanitize("chapter 1.2").unwrap(), "chapter 1.2");
        assert_eq!(sanitize("snake_case-name").unwrap(), "snake_case-name");
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(sanitize("  padded  ").unwrap(), "padded");
    }

    #[test]
    fn test_special_characters_stripped() {
        assert_eq!(sanitize("a/b\\c:d").unwrap(), "abcd");
        assert_eq!(sanitize("What? Why!").unwrap(), "What Why");
        assert_eq!(sanitize("The `Result` type").unwrap(), "The Result type");
    }

    #[test]
    fn test_letters_of_any_script_kept() {
        assert_eq!(sanitize("Héllo Wörld").unwrap(), "Héllo Wörld");
        assert_eq!(sanitize("日本語の見出し").unwrap(), "日本語の見出し");
        assert_eq!(sanitize("Глава 1").unwrap(), "Глава 1");
    }

    #[test]
    fn test_empty_results_rejected() {
        assert!(matches!(
            sanitize(""),
            Err(OutputError::InvalidName { .. })
        ));
        assert!(matches!(
            sanitize("!!!"),
            Err(OutputError::InvalidName { .. })
        ));
        assert!(matches!(
            sanitize("   "),
            Err(OutputError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_dot_names_rejected() {
        assert!(sanitize(".").is_err());
        assert!(sanitize("..").is_err());
        // A longer run of periods is an ordinary (if odd) file name.
        assert_eq!(sanitize("...").unwrap(), "...");
    }

    #[test]
    fn test_rejection_reports_original_name() {
        let err = sanitize("///").unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not derive file name from '///'"
        );
    }
}
