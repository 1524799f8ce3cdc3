use regex::Regex;
use std::sync::LazyLock;

/// "Question #:12 - (Exam Topic 3)". Digit runs are bounded so both numbers fit in u32.
static QUESTION_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Question\s*#\s*:\s*(\d{1,9})\s*-\s*\(Exam Topic\s*(\d{1,9})\)")
        .expect("valid question marker regex")
});

/// Text attributed to one question marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk<'a> {
    pub id: u32,
    pub topic: u32,
    pub body: &'a str,
}

/// Split normalized document text into per-question chunks.
///
/// Each body runs from the end of its marker to the start of the next marker
/// (or the end of the text). Anything before the first marker is dropped.
pub fn split_questions(text: &str) -> Vec<RawChunk<'_>> {
    let markers: Vec<(usize, usize, u32, u32)> = QUESTION_MARKER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.get(1)?.as_str().parse().ok()?;
            let topic = caps.get(2)?.as_str().parse().ok()?;
            Some((whole.start(), whole.end(), id, topic))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(_, body_start, id, topic))| {
            let body_end = markers
                .get(i + 1)
                .map(|&(next_start, ..)| next_start)
                .unwrap_or(text.len());
            RawChunk {
                id,
                topic,
                body: &text[body_start..body_end],
            }
        })
        .collect()
}
