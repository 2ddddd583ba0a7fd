//! Title extraction from receipt text.

use super::patterns::TITLE_NOISE;

/// Default title when no line qualifies.
pub const DEFAULT_TITLE: &str = "Receipt";

/// Candidate lines considered from the top of the receipt.
const CANDIDATE_LINES: usize = 3;

/// Width the title is truncated to for display.
const DISPLAY_WIDTH: usize = 30;

/// Pick a merchant title from the top of the receipt.
///
/// Considers the first three non-blank lines and takes the first one that
/// is between 2 and 50 characters (exclusive), does not start with a
/// digit, and is not a generic receipt word. Falls back to "Receipt".
pub fn extract_title(text: &str) -> String {
    let candidate = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(CANDIDATE_LINES)
        .find(|line| {
            let len = line.chars().count();
            len > 2
                && len < 50
                && !line.chars().next().is_some_and(|c| c.is_ascii_digit())
                && !TITLE_NOISE.is_match(line)
        });

    match candidate {
        Some(line) => truncate_title(line),
        None => DEFAULT_TITLE.to_string(),
    }
}

/// Truncate to the display width with a trailing ellipsis marker.
fn truncate_title(title: &str) -> String {
    if title.chars().count() > DISPLAY_WIDTH {
        let truncated: String = title.chars().take(DISPLAY_WIDTH).collect();
        format!("{}...", truncated)
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_wins() {
        assert_eq!(extract_title("Everest Cafe\nKathmandu\nTotal: 450"), "Everest Cafe");
    }

    #[test]
    fn test_skips_generic_receipt_words() {
        assert_eq!(extract_title("RECEIPT\nEverest Cafe"), "Everest Cafe");
        assert_eq!(extract_title("Tax Invoice\nLakeside Store"), "Lakeside Store");
    }

    #[test]
    fn test_skips_lines_starting_with_digit() {
        assert_eq!(extract_title("123 Main Street\nByanjan Kitchen"), "Byanjan Kitchen");
    }

    #[test]
    fn test_skips_too_short_lines() {
        // Two characters is not strictly greater than two.
        assert_eq!(extract_title("KC\nHimalayan Java"), "Himalayan Java");
    }

    #[test]
    fn test_skips_too_long_lines() {
        let long = "x".repeat(50);
        let text = format!("{}\nGorkha Store", long);
        assert_eq!(extract_title(&text), "Gorkha Store");
    }

    #[test]
    fn test_only_first_three_lines_considered() {
        // Line four would qualify but is never looked at.
        assert_eq!(extract_title("RECEIPT\n123\nBILL\nEverest Cafe"), DEFAULT_TITLE);
    }

    #[test]
    fn test_blank_lines_do_not_count() {
        assert_eq!(extract_title("\n\n  \nEverest Cafe"), "Everest Cafe");
    }

    #[test]
    fn test_default_on_empty_text() {
        assert_eq!(extract_title(""), DEFAULT_TITLE);
        assert_eq!(extract_title("   \n  "), DEFAULT_TITLE);
    }

    #[test]
    fn test_truncates_long_title() {
        let title = "Annapurna Organic Farmers Market and Cold Storage";
        let text = format!("{}\n450", title);
        let extracted = extract_title(&text);
        assert_eq!(extracted, "Annapurna Organic Farmers Mark...");
        assert_eq!(extracted.chars().count(), 33);
    }

    #[test]
    fn test_devanagari_title_counts_characters() {
        assert_eq!(extract_title("दरबार रेस्टुरेन्ट\n५००"), "दरबार रेस्टुरेन्ट");
    }
}
