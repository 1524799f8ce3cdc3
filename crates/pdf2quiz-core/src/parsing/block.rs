use crate::model::OptionLetter;
use regex::Regex;
use std::sync::LazyLock;

/// "Answer: A, C". Separators are horizontal only. The letter run ends on a
/// word boundary or runs straight into "xplanation", as in
/// "Answer: BExplanation:"; the second group marks that case.
static ANSWER_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)answer\s*:\s*([A-G](?:[ \t,]*[A-G])*)(?:\b|(xplanation))")
        .expect("valid answer key regex")
});

/// A question chunk split around its answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBlock<'a> {
    /// Prompt and options, trimmed.
    pub before: &'a str,
    /// Explanation text, trimmed.
    pub after: &'a str,
    /// Answer letters, deduplicated in first-seen order. Never empty.
    pub answer: Vec<OptionLetter>,
}

/// Locate the answer key in a chunk body.
///
/// Returns None when the chunk states no answer.
pub fn split_at_answer(body: &str) -> Option<AnswerBlock<'_>> {
    let caps = ANSWER_KEY_REGEX.captures(body)?;
    let whole = caps.get(0)?;
    let letters = caps.get(1)?;

    let (span, after_start) = match caps.get(2) {
        // The last letter is the "E" of a run-on "Explanation".
        Some(_) if letters.as_str().ends_with(['E', 'e']) => {
            (&letters.as_str()[..letters.len() - 1], letters.end() - 1)
        }
        Some(_) => (letters.as_str(), letters.end()),
        None => (letters.as_str(), whole.end()),
    };
    let answer = parse_answer_letters(span);
    if answer.is_empty() {
        return None;
    }

    Some(AnswerBlock {
        before: body[..whole.start()].trim(),
        after: body[after_start..].trim(),
        answer,
    })
}

/// Uppercase, drop separators, dedupe preserving first-seen order.
fn parse_answer_letters(span: &str) -> Vec<OptionLetter> {
    let mut letters = Vec::new();
    for letter in span.chars().filter_map(OptionLetter::from_char) {
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    letters
}
