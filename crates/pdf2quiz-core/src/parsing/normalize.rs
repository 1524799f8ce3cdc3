use crate::error::QuizError;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Running header of the ExamsVCE exports this tool was built for.
pub const DEFAULT_HEADER_PATTERN: &str = r"ECCouncil\s*-\s*312-50v13\s*";

/// "3 of 120", alone on a line or stuck to the end of a content line.
static PAGE_FOOTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s+)\d+\s+of\s+\d+\s*$").expect("valid page footer regex")
});

/// A line holding nothing but an option marker such as "C.", left behind
/// when a column break separates the marker from its text.
static STRAY_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-E]\.$").expect("valid stray marker regex"));

/// Removes page furniture from raw extracted text before segmentation.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    header: Option<Regex>,
}

impl TextNormalizer {
    /// Build a normalizer stripping the given running-header pattern.
    ///
    /// `None` or an empty pattern disables header stripping.
    pub fn new(header_pattern: Option<&str>) -> Result<Self, QuizError> {
        let header = match header_pattern.map(str::trim) {
            Some(p) if !p.is_empty() => {
                Some(Regex::new(p).map_err(|e| QuizError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })?)
            }
            _ => None,
        };
        Ok(TextNormalizer { header })
    }

    pub fn normalize(&self, raw: &str) -> String {
        let text = match &self.header {
            Some(re) => re.replace_all(raw, ""),
            None => raw.into(),
        };

        text.lines()
            .filter_map(strip_page_furniture)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        TextNormalizer {
            header: Some(Regex::new(DEFAULT_HEADER_PATTERN).expect("valid header regex")),
        }
    }
}

/// Drop a trailing page footer; None when nothing but furniture is left.
fn strip_page_furniture(line: &str) -> Option<Cow<'_, str>> {
    let stripped = PAGE_FOOTER_REGEX.replace(line, "");
    let had_footer = matches!(stripped, Cow::Owned(_));
    let rest = stripped.trim();
    if (had_footer && rest.is_empty()) || STRAY_MARKER_REGEX.is_match(rest) {
        return None;
    }
    Some(stripped)
}
