//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Dollar amount with two decimals, e.g. "$50.00".
pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Shorten long note text for table cells. Counts characters, not bytes,
/// so multi-byte notes truncate cleanly.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}
