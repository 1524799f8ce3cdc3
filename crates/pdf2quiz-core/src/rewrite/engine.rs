use super::compile_pattern;
use super::schema::{FallbackDef, MatchTarget, RewriteRuleSetDef, RuleStage};
use crate::error::QuizError;
use crate::model::QuestionRecord;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

struct CompiledRule {
    regex: Regex,
    stage: RuleStage,
    match_on: MatchTarget,
    text: String,
}

struct CompiledPreserve {
    min_chars: usize,
    generated_markers: Vec<Regex>,
}

/// A compiled rule set, ready to rewrite explanations.
pub struct RewriteEngine {
    name: String,
    rules: Vec<CompiledRule>,
    preserve: Option<CompiledPreserve>,
    fallback: Option<FallbackDef>,
}

/// Counts reported after rewriting a bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteSummary {
    pub processed: usize,
    pub updated: usize,
}

impl RewriteEngine {
    pub fn new(def: &RewriteRuleSetDef) -> Result<Self, QuizError> {
        let rules = def
            .rules
            .iter()
            .map(|r| {
                Ok(CompiledRule {
                    regex: compile_pattern(&r.pattern)?,
                    stage: r.stage,
                    match_on: r.match_on,
                    text: r.text.clone(),
                })
            })
            .collect::<Result<Vec<_>, QuizError>>()?;

        let preserve = match &def.preserve {
            Some(p) => Some(CompiledPreserve {
                min_chars: p.min_chars,
                generated_markers: p
                    .generated_markers
                    .iter()
                    .map(|m| compile_pattern(m))
                    .collect::<Result<Vec<_>, QuizError>>()?,
            }),
            None => None,
        };

        Ok(RewriteEngine {
            name: def.name.clone(),
            rules,
            preserve,
            fallback: def.fallback.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decide the explanation for one record.
    ///
    /// Returns the explanation the record should carry, which may be the
    /// current one unchanged.
    pub fn explanation_for(&self, record: &QuestionRecord) -> Option<String> {
        if let Some(text) = self.match_stage(record, RuleStage::Override) {
            return Some(text.to_string());
        }

        if let Some(current) = record.explanation.as_deref() {
            if self.should_preserve(current) {
                return Some(current.to_string());
            }
        }

        if let Some(text) = self.match_stage(record, RuleStage::Keyword) {
            return Some(text.to_string());
        }

        match &self.fallback {
            Some(fallback) => Some(render_fallback(fallback, record)),
            None => record.explanation.clone(),
        }
    }

    /// Rewrite explanations in place, in record order.
    pub fn rewrite_all(&self, records: &mut [QuestionRecord]) -> RewriteSummary {
        let mut summary = RewriteSummary {
            processed: records.len(),
            updated: 0,
        };

        for record in records.iter_mut() {
            let new = self.explanation_for(record);
            if new != record.explanation {
                debug!(id = record.id, ruleset = %self.name, "explanation rewritten");
                record.explanation = new;
                summary.updated += 1;
            }
        }

        summary
    }

    /// Correct-answer texts are tried before the question, each in rule order.
    fn match_stage(&self, record: &QuestionRecord, stage: RuleStage) -> Option<&str> {
        let in_stage = move || self.rules.iter().filter(move |r| r.stage == stage);

        for answer_text in record.answer_texts() {
            if let Some(rule) = in_stage()
                .filter(|r| r.match_on.includes_answer())
                .find(|r| r.regex.is_match(answer_text))
            {
                return Some(rule.text.as_str());
            }
        }

        in_stage()
            .filter(|r| r.match_on.includes_question())
            .find(|r| r.regex.is_match(&record.question))
            .map(|r| r.text.as_str())
    }

    fn should_preserve(&self, current: &str) -> bool {
        match &self.preserve {
            Some(p) => {
                current.chars().count() > p.min_chars
                    && !p.generated_markers.iter().any(|m| m.is_match(current))
            }
            None => false,
        }
    }
}

fn render_fallback(fallback: &FallbackDef, record: &QuestionRecord) -> String {
    let answer = record.answer_label();
    match record.answer_texts().first().filter(|t| !t.is_empty()) {
        Some(answer_text) => fallback
            .with_answer_text
            .replace("{answer}", &answer)
            .replace("{answer_text}", answer_text),
        None => fallback.without_answer_text.replace("{answer}", &answer),
    }
}
