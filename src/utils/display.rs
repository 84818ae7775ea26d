//! Console output helpers.

/// Format a duration in milliseconds as a human-readable string.
pub fn format_duration(ms: u128) -> String {
    if ms < 1000 {
        return format!("{} ms", ms);
    }
    let seconds = ms as f64 / 1000.0;
    if seconds < 60.0 {
        return format!("{:.2} s", seconds);
    }
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else {
        format!("{}m {}s", minutes, secs)
    }
}

/// Color output utilities.
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if the terminal supports it).
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_tiers() {
        assert_eq!(format_duration(250), "250 ms");
        assert_eq!(format_duration(1500), "1.50 s");
        assert_eq!(format_duration(61_000), "1m 1s");
        assert_eq!(format_duration(3_661_000), "1h 1m 1s");
    }

    #[test]
    fn test_color_output_contains_text() {
        let colored = ColorOutput::colored("status", Color::Green);
        assert!(colored.contains("status"));
    }
}
