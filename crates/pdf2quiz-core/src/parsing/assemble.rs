use crate::model::{OptionLetter, OptionMap, QuestionRecord, SkipReason};

/// Minimum number of options for a usable question.
pub const MIN_OPTIONS: usize = 2;

/// Parts of one question, ready for validation.
#[derive(Debug, Clone)]
pub struct QuestionParts {
    pub id: u32,
    pub topic: u32,
    pub question: String,
    pub options: OptionMap,
    pub answer: Vec<OptionLetter>,
    pub explanation: Option<String>,
}

/// Validate the parts and build the record.
///
/// Answer letters without a matching option are dropped; the question is
/// rejected only when none remain.
pub fn assemble(parts: QuestionParts) -> Result<QuestionRecord, SkipReason> {
    if parts.options.len() < MIN_OPTIONS {
        return Err(SkipReason::TooFewOptions {
            found: parts.options.len(),
        });
    }

    let valid: Vec<OptionLetter> = parts
        .answer
        .iter()
        .copied()
        .filter(|letter| parts.options.contains_key(letter))
        .collect();
    if valid.is_empty() {
        return Err(SkipReason::AnswerNotInOptions {
            answer: parts.answer,
        });
    }

    Ok(QuestionRecord {
        id: parts.id,
        topic: parts.topic,
        question: parts.question,
        options: parts.options,
        answer: valid,
        explanation: parts.explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use OptionLetter::*;

    fn parts(option_count: usize, answer: Vec<OptionLetter>) -> QuestionParts {
        let options = OptionLetter::ALL
            .iter()
            .take(option_count)
            .map(|l| (*l, format!("option {l}")))
            .collect();
        QuestionParts {
            id: 1,
            topic: 1,
            question: "Which?".into(),
            options,
            answer,
            explanation: None,
        }
    }

    #[test]
    fn test_valid_record() {
        let rec = assemble(parts(4, vec![B])).unwrap();
        assert_eq!(rec.answer, vec![B]);
        assert_eq!(rec.options.len(), 4);
    }

    #[test]
    fn test_single_option_rejected() {
        assert_eq!(
            assemble(parts(1, vec![A])).unwrap_err(),
            SkipReason::TooFewOptions { found: 1 }
        );
    }

    #[test]
    fn test_answer_outside_options_rejected() {
        assert_eq!(
            assemble(parts(3, vec![E, F])).unwrap_err(),
            SkipReason::AnswerNotInOptions { answer: vec![E, F] }
        );
    }

    #[test]
    fn test_partial_answer_kept() {
        let rec = assemble(parts(4, vec![E, C, A])).unwrap();
        assert_eq!(rec.answer, vec![C, A]);
    }
}
