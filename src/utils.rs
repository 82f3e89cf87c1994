//! Utility helpers shared across the layout core.

use chrono::{DateTime, Utc};
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{CHARS_PER_LINE, LINE_HEIGHT, PANEL_CHROME_HEIGHT};

/// Parse an ISO-8601 datetime string and return milliseconds since epoch.
/// Returns None when the string cannot be parsed.
pub fn parse_iso_ms(iso: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).timestamp_millis())
}

/// Estimate the rendered height of a panel from its text content, used
/// before the host has measured anything. Grapheme clusters rather than
/// bytes so multi-byte text does not inflate the estimate.
pub fn estimate_text_height(text: &str) -> f64 {
    let graphemes = text.graphemes(true).count();
    let lines = (graphemes as f64 / CHARS_PER_LINE as f64).ceil().max(1.0);
    lines * LINE_HEIGHT + PANEL_CHROME_HEIGHT
}

/// Cubic ease-out, the easing used by the reflow animator.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_ms() {
        assert_eq!(parse_iso_ms("1970-01-01T00:00:01Z"), Some(1000));
        assert!(parse_iso_ms("2024-06-01T12:00:00+00:00").is_some());
        assert_eq!(parse_iso_ms("not a date"), None);
    }

    #[test]
    fn test_estimate_text_height_grows_with_content() {
        let short = estimate_text_height("hi");
        let long = estimate_text_height(&"word ".repeat(200));
        assert!(long > short);
        assert_eq!(short, LINE_HEIGHT + PANEL_CHROME_HEIGHT);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5); // ease-out front-loads motion
    }
}
