pub mod builtin;
pub mod engine;
pub mod schema;

use crate::error::QuizError;
use regex::{Regex, RegexBuilder};
use schema::RewriteRuleSetDef;
use std::path::Path;

pub use engine::{RewriteEngine, RewriteSummary};

/// Load a rewrite rule set from a JSON file.
pub fn load_ruleset(path: &Path) -> Result<RewriteRuleSetDef, QuizError> {
    let content = std::fs::read_to_string(path).map_err(|e| QuizError::RulesetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_ruleset(&content, path)
}

/// Parse a rewrite rule set from a JSON string.
pub fn parse_ruleset(json: &str, source: &Path) -> Result<RewriteRuleSetDef, QuizError> {
    let ruleset: RewriteRuleSetDef =
        serde_json::from_str(json).map_err(|e| QuizError::RulesetLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Parse a rewrite rule set from a JSON string (no file path context).
pub fn parse_ruleset_str(json: &str) -> Result<RewriteRuleSetDef, QuizError> {
    let ruleset: RewriteRuleSetDef = serde_json::from_str(json).map_err(QuizError::Json)?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Validate that a rule set is well-formed and all its patterns compile.
pub fn validate_ruleset(ruleset: &RewriteRuleSetDef) -> Result<(), QuizError> {
    if ruleset.rules.is_empty() {
        return Err(QuizError::RulesetInvalid("rules must not be empty".into()));
    }

    for (i, rule) in ruleset.rules.iter().enumerate() {
        if rule.pattern.trim().is_empty() {
            return Err(QuizError::RulesetInvalid(format!(
                "rule {} has an empty pattern",
                i + 1
            )));
        }
        if rule.text.trim().is_empty() {
            return Err(QuizError::RulesetInvalid(format!(
                "rule {} ('{}') has no replacement text",
                i + 1,
                rule.pattern
            )));
        }
        compile_pattern(&rule.pattern)?;
    }

    if let Some(ref preserve) = ruleset.preserve {
        for marker in &preserve.generated_markers {
            compile_pattern(marker)?;
        }
    }

    if let Some(ref fallback) = ruleset.fallback {
        if fallback.with_answer_text.trim().is_empty()
            || fallback.without_answer_text.trim().is_empty()
        {
            return Err(QuizError::RulesetInvalid(
                "fallback templates must not be empty".into(),
            ));
        }
    }

    Ok(())
}

/// Compile a rule pattern; all rule patterns are case-insensitive.
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, QuizError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| QuizError::RulesetInvalid(format!("invalid pattern '{}': {}", pattern, e)))
}
