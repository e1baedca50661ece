//! Formatting utilities for terminal output

/// Format a count with the singular or plural noun
///
/// # Examples
/// ```
/// use lucky_number::output::formatters::pluralize;
///
/// assert_eq!(pluralize(1, "attempt", "attempts"), "1 attempt");
/// assert_eq!(pluralize(3, "attempt", "attempts"), "3 attempts");
/// ```
#[must_use]
pub fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
