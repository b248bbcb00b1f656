// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing, this respects UTF-8 character boundaries and will
/// never panic on multi-byte characters in comment text.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Format a second count for display: "42.0s" below a minute, "3m 20s"
/// below an hour, "1h 02m" beyond.
pub fn format_seconds(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.1}s")
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0).floor();
        let rest = seconds - minutes * 60.0;
        format!("{minutes:.0}m {rest:.0}s")
    } else {
        let hours = (seconds / 3600.0).floor();
        let minutes = ((seconds - hours * 3600.0) / 60.0).floor();
        format!("{hours:.0}h {minutes:02.0}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds_ranges() {
        assert_eq!(format_seconds(0.0), "0.0s");
        assert_eq!(format_seconds(42.5), "42.5s");
        assert_eq!(format_seconds(200.0), "3m 20s");
        assert_eq!(format_seconds(3720.0), "1h 02m");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        assert_eq!(truncate_chars("café résumé", 4), "café...");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
