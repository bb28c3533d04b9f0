//! Console summary formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

/// Format a batch-run summary for terminal display.
///
/// Returns a multi-line string: entry count, then any warnings the run
/// continued past, each one flagged for the curator to chase up.
pub fn format_run_summary(recorded: usize, warnings: &[String]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{} {}", "Recorded levels:".bold(), recorded);

    if warnings.is_empty() {
        let _ = writeln!(output, "{}", "No warnings".green());
    } else {
        let _ = writeln!(
            output,
            "{} ({})",
            "Needs review".yellow().bold(),
            warnings.len()
        );
        for warning in warnings {
            let _ = writeln!(output, "  {} {}", "!".yellow(), warning);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_warnings() {
        let warnings = vec!["Level 13 still has a gap after filling".to_string()];
        let summary = format_run_summary(42, &warnings);

        assert!(summary.contains("42"));
        assert!(summary.contains("Needs review"));
        assert!(summary.contains("gap"));
    }

    #[test]
    fn test_summary_without_warnings() {
        let summary = format_run_summary(0, &[]);
        assert!(summary.contains("No warnings"));
    }
}
