use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum number of options a question can carry (A through G).
pub const MAX_OPTIONS: usize = 7;

/// Letter identifying one answer choice.
///
/// Letters are assigned by position when options are extracted, never read
/// back from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; MAX_OPTIONS] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
        OptionLetter::E,
        OptionLetter::F,
        OptionLetter::G,
    ];

    /// Letter for the zero-based option position, if within A..=G.
    pub fn from_index(index: usize) -> Option<OptionLetter> {
        Self::ALL.get(index).copied()
    }

    /// Case-insensitive conversion from a single character.
    pub fn from_char(c: char) -> Option<OptionLetter> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            'E' => Some(OptionLetter::E),
            'F' => Some(OptionLetter::F),
            'G' => Some(OptionLetter::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
            OptionLetter::E => 'E',
            OptionLetter::F => 'F',
            OptionLetter::G => 'G',
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Option texts keyed by letter. Keys always form the prefix A..=A+k-1.
pub type OptionMap = BTreeMap<OptionLetter, String>;

/// One accepted question, as persisted to the JSONL bank.
///
/// Field order here is the field order of the written JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub topic: u32,
    pub question: String,
    pub options: OptionMap,
    pub answer: Vec<OptionLetter>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionRecord {
    /// Texts of the options named in `answer`, in answer order.
    pub fn answer_texts(&self) -> Vec<&str> {
        self.answer
            .iter()
            .filter_map(|letter| self.options.get(letter).map(|s| s.as_str()))
            .collect()
    }

    /// Answer letters joined for display, e.g. "A, C".
    pub fn answer_label(&self) -> String {
        self.answer
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Why a question chunk produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SkipReason {
    /// No "Answer:" key in the chunk.
    MissingAnswerKey,
    /// Fewer than two options could be extracted.
    TooFewOptions { found: usize },
    /// None of the answer letters names an extracted option.
    AnswerNotInOptions { answer: Vec<OptionLetter> },
    /// A record with the same id was already accepted earlier in the document.
    DuplicateId,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAnswerKey => write!(f, "no answer key"),
            SkipReason::TooFewOptions { found } => {
                write!(f, "only {found} option(s) found, need at least 2")
            }
            SkipReason::AnswerNotInOptions { answer } => {
                let letters: Vec<String> = answer.iter().map(|l| l.to_string()).collect();
                write!(f, "answer {} matches no option", letters.join(", "))
            }
            SkipReason::DuplicateId => write!(f, "duplicate question id"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedQuestion {
    pub id: u32,
    pub topic: u32,
    pub reason: SkipReason,
}

/// Result of parsing one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedBank {
    /// Accepted records in document order.
    pub records: Vec<QuestionRecord>,
    /// Chunks that were dropped, in document order.
    pub skipped: Vec<SkippedQuestion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Length of the extracted document text, in characters.
    pub text_chars: usize,
}
