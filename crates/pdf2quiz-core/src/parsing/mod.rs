pub mod assemble;
pub mod block;
pub mod explanation;
pub mod normalize;
pub mod options;
pub mod segment;

use crate::error::QuizError;
use crate::model::{ParsedBank, QuestionRecord, SkipReason, SkippedQuestion};
use assemble::{assemble, QuestionParts};
use block::split_at_answer;
use explanation::extract_explanation;
use normalize::{TextNormalizer, DEFAULT_HEADER_PATTERN};
use options::extract_prompt_and_options;
use segment::{split_questions, RawChunk};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Settings for one parse run.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Running-header regex removed from every page. None disables stripping.
    pub header_pattern: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            header_pattern: Some(DEFAULT_HEADER_PATTERN.to_string()),
        }
    }
}

/// Parse the full extracted text of an exam export into question records.
///
/// Chunks that fail validation are listed in `skipped`; they never abort the
/// run. The only error is an invalid header pattern.
pub fn parse_document(text: &str, options: &ParseOptions) -> Result<ParsedBank, QuizError> {
    let normalizer = TextNormalizer::new(options.header_pattern.as_deref())?;
    let cleaned = normalizer.normalize(text);

    let chunks = split_questions(&cleaned);
    if chunks.is_empty() {
        warn!("no 'Question #:' markers found in document");
    }

    let mut bank = ParsedBank {
        text_chars: text.chars().count(),
        ..ParsedBank::default()
    };
    let mut accepted_ids = HashSet::new();
    let mut last_accepted: Option<u32> = None;

    for chunk in &chunks {
        if accepted_ids.contains(&chunk.id) {
            skip(&mut bank, chunk, SkipReason::DuplicateId);
            continue;
        }

        match parse_chunk(chunk) {
            Ok(record) => {
                if let Some(prev) = last_accepted.filter(|&prev| record.id < prev) {
                    let msg = format!(
                        "question {} appears after question {} (kept in document order)",
                        record.id, prev
                    );
                    warn!("{msg}");
                    bank.warnings.push(msg);
                }
                accepted_ids.insert(record.id);
                last_accepted = Some(record.id);
                bank.records.push(record);
            }
            Err(reason) => skip(&mut bank, chunk, reason),
        }
    }

    info!(
        accepted = bank.records.len(),
        skipped = bank.skipped.len(),
        "document parsed"
    );
    Ok(bank)
}

/// Turn one raw chunk into a validated record.
pub fn parse_chunk(chunk: &RawChunk<'_>) -> Result<QuestionRecord, SkipReason> {
    let block = split_at_answer(chunk.body).ok_or(SkipReason::MissingAnswerKey)?;
    let (question, options) = extract_prompt_and_options(block.before);
    let explanation = extract_explanation(block.after);

    assemble(QuestionParts {
        id: chunk.id,
        topic: chunk.topic,
        question,
        options,
        answer: block.answer,
        explanation,
    })
}

fn skip(bank: &mut ParsedBank, chunk: &RawChunk<'_>, reason: SkipReason) {
    debug!(id = chunk.id, topic = chunk.topic, %reason, "skipped question");
    bank.skipped.push(SkippedQuestion {
        id: chunk.id,
        topic: chunk.topic,
        reason,
    });
}
