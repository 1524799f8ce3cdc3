use super::options::collapse_whitespace;
use regex::Regex;
use std::sync::LazyLock;

/// Explanations shorter than this are extraction noise.
pub const MIN_EXPLANATION_CHARS: usize = 20;
/// Explanations are cut to this many characters.
pub const MAX_EXPLANATION_CHARS: usize = 3000;
pub const TRUNCATION_MARKER: &str = "...";

/// Leading "Explanation:" marker. Extraction sometimes drops the "E" or
/// leaves a stray letter token in front of it.
static EXPLANATION_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-g]\s+)?e?xplanation\s*:?\s*").expect("valid explanation marker regex")
});

/// Clean the text after the answer key into an explanation.
pub fn extract_explanation(after: &str) -> Option<String> {
    let stripped = EXPLANATION_MARKER_REGEX.replace(after.trim(), "");
    let text = collapse_whitespace(&stripped);

    let char_count = text.chars().count();
    if char_count < MIN_EXPLANATION_CHARS {
        return None;
    }
    if char_count > MAX_EXPLANATION_CHARS {
        let mut truncated: String = text.chars().take(MAX_EXPLANATION_CHARS).collect();
        truncated.push_str(TRUNCATION_MARKER);
        return Some(truncated);
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_marker_and_collapses_whitespace() {
        let e = extract_explanation("Explanation:\n  tcpdump   only listens\nto traffic.").unwrap();
        assert_eq!(e, "tcpdump only listens to traffic.");
    }

    #[test]
    fn test_marker_case_insensitive_and_missing_e() {
        let e = extract_explanation("xplanation: tcpdump only listens to traffic").unwrap();
        assert_eq!(e, "tcpdump only listens to traffic");
        let e = extract_explanation("EXPLANATION tcpdump only listens to traffic").unwrap();
        assert_eq!(e, "tcpdump only listens to traffic");
    }

    #[test]
    fn test_stray_letter_before_marker() {
        let e = extract_explanation("B Explanation: tcpdump only listens to traffic").unwrap();
        assert_eq!(e, "tcpdump only listens to traffic");
    }

    #[test]
    fn test_text_without_marker_kept() {
        let e = extract_explanation("Reference: https://example.com/nmap-book").unwrap();
        assert_eq!(e, "Reference: https://example.com/nmap-book");
    }

    #[test]
    fn test_short_explanation_absent() {
        assert!(extract_explanation("Explanation: 0123456789").is_none());
        assert!(extract_explanation("").is_none());
    }

    #[test]
    fn test_exactly_min_length_kept() {
        let text = "a".repeat(MIN_EXPLANATION_CHARS);
        assert_eq!(extract_explanation(&text), Some(text));
    }

    #[test]
    fn test_long_explanation_truncated() {
        let long = "x".repeat(5000);
        let e = extract_explanation(&format!("Explanation: {long}")).unwrap();
        assert_eq!(e.chars().count(), 3003);
        assert!(e.ends_with("..."));
    }

    #[test]
    fn test_exactly_max_length_not_marked() {
        let text = "y".repeat(MAX_EXPLANATION_CHARS);
        let e = extract_explanation(&text).unwrap();
        assert_eq!(e.chars().count(), MAX_EXPLANATION_CHARS);
        assert!(!e.ends_with("..."));
    }

    #[test]
    fn test_length_counted_in_chars() {
        // Eleven CJK characters are 33 bytes but still too short.
        assert!(extract_explanation("被動式網路封包分析工具").is_none());
        let long = "解".repeat(3500);
        let e = extract_explanation(&long).unwrap();
        assert_eq!(e.chars().count(), 3003);
    }
}
