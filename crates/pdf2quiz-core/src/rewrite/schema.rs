use serde::{Deserialize, Serialize};

/// A table of explanation rewrite rules, as stored in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRuleSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Evaluated in list order within each stage; first hit wins.
    pub rules: Vec<RewriteRuleDef>,
    /// When set, a substantial existing explanation survives the keyword stage.
    #[serde(default)]
    pub preserve: Option<PreserveDef>,
    #[serde(default)]
    pub fallback: Option<FallbackDef>,
}

/// A single pattern -> replacement rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRuleDef {
    /// Case-insensitive regular expression.
    pub pattern: String,
    #[serde(default)]
    pub stage: RuleStage,
    #[serde(default)]
    pub match_on: MatchTarget,
    /// Replacement explanation.
    pub text: String,
}

/// When a rule is consulted relative to the preserve check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStage {
    /// Before the preserve check; replaces even a detailed explanation.
    Override,
    #[default]
    Keyword,
}

/// Which record text a rule pattern is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTarget {
    Question,
    /// Text of the correct option(s).
    Answer,
    #[default]
    Any,
}

impl MatchTarget {
    pub fn includes_answer(self) -> bool {
        matches!(self, MatchTarget::Answer | MatchTarget::Any)
    }

    pub fn includes_question(self) -> bool {
        matches!(self, MatchTarget::Question | MatchTarget::Any)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreserveDef {
    /// Explanations longer than this (in characters) are kept...
    pub min_chars: usize,
    /// ...unless they match one of these patterns (earlier generated text).
    #[serde(default)]
    pub generated_markers: Vec<String>,
}

/// Templates used when no rule matches. `{answer}` is the answer letters,
/// `{answer_text}` the text of the first correct option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackDef {
    pub with_answer_text: String,
    pub without_answer_text: String,
}
