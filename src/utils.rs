use chrono::{DateTime, NaiveDateTime};
use unicode_segmentation::UnicodeSegmentation;

/// Render a server timestamp (RFC 3339, with or without offset) for display.
/// Unparseable input is shown as-is rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Time-of-day portion only, used for execution log lines.
pub fn format_time(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Grapheme-safe preview of knowledge-base content, mirroring the 100-char
/// excerpt shown in entry cards.
pub fn preview(content: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = content.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        content.to_string()
    } else {
        format!("{}...", graphemes[..max_graphemes].concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formats_rfc3339() {
        assert_eq!(
            format_timestamp("2026-03-01T14:05:09Z"),
            "2026-03-01 14:05:09"
        );
        assert_eq!(
            format_timestamp("2026-03-01T14:05:09.123456"),
            "2026-03-01 14:05:09"
        );
    }

    #[test]
    fn timestamp_passes_through_garbage() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn time_only() {
        assert_eq!(format_time("2026-03-01T14:05:09Z"), "14:05:09");
    }

    #[test]
    fn preview_truncates_on_grapheme_boundaries() {
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        // Family emoji is a single grapheme built from several code points.
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let text = format!("{}{}{}", family, family, family);
        assert_eq!(preview(&text, 2), format!("{}{}...", family, family));
    }
}
