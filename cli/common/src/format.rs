//! Formatting utilities for CLI output.

/// Formats a result count in French.
///
/// # Examples
///
/// ```
/// use rf_cli_common::format_result_count;
///
/// assert_eq!(format_result_count(0), "0 résultat");
/// assert_eq!(format_result_count(1), "1 résultat");
/// assert_eq!(format_result_count(2), "2 résultats");
/// ```
pub fn format_result_count(count: usize) -> String {
    if count > 1 {
        format!("{count} résultats")
    } else {
        format!("{count} résultat")
    }
}
