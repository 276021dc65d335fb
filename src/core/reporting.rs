//! Error formatting for user feedback and logs.

use crate::core::error::Error;

/// Format an error with full context for user display.
pub fn format_error_for_user(error: &Error) -> String {
    let mut output = String::new();

    output.push_str(&format!("Error: {}\n", error));
    output.push_str(&format!("Category: {}\n", error.category()));

    if let Some(suggestion) = error.suggestion() {
        output.push_str(&format!("\nSuggestion: {}\n", suggestion));
    }

    // Source chain
    let mut source = std::error::Error::source(error);
    if source.is_some() {
        output.push_str("\nCaused by:\n");
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("  {}: {}\n", depth, err));
            source = err.source();
            depth += 1;
        }
    }

    output
}

/// Format an error concisely for logging.
pub fn format_error_for_log(error: &Error) -> String {
    let category = error.category();

    if let Some(source) = std::error::Error::source(error) {
        format!("[{}] {}: {}", category, error, source)
    } else {
        format!("[{}] {}", category, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_user_format_includes_chain_and_suggestion() {
        let err = Error::file_write("/nope/report.txt", io::Error::other("disk full"));
        let text = format_error_for_user(&err);

        assert!(text.starts_with("Error: Unable to save file '/nope/report.txt'"));
        assert!(text.contains("Category: I/O"));
        assert!(text.contains("Suggestion:"));
        assert!(text.contains("  1: disk full"));
    }

    #[test]
    fn test_log_format() {
        let err = Error::MissingContactAddress;
        assert_eq!(
            format_error_for_log(&err),
            "[Configuration] Email report address is not configured"
        );
    }
}
