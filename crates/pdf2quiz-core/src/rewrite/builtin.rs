use super::parse_ruleset_str;
use super::schema::RewriteRuleSetDef;
use crate::error::QuizError;

const CEH_ZH_TW_JSON: &str = include_str!("../../../../rules/ceh-zh-tw.json");

/// Rule sets compiled into the binary.
pub const PRESETS: &[&str] = &["ceh-zh-tw"];

/// Load a predefined rule set by name.
pub fn load_preset(name: &str) -> Result<RewriteRuleSetDef, QuizError> {
    match name {
        "ceh-zh-tw" => parse_ruleset_str(CEH_ZH_TW_JSON),
        _ => Err(QuizError::RulesetInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
