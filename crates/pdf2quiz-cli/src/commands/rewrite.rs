use pdf2quiz_core::error::QuizError;
use pdf2quiz_core::rewrite::{builtin, load_ruleset};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input: PathBuf,
    output_file: Option<PathBuf>,
    preset: &str,
    rules: Option<PathBuf>,
) -> Result<(), QuizError> {
    if !input.is_file() {
        return Err(QuizError::InputNotFound(input));
    }

    let ruleset = match rules {
        Some(path) => load_ruleset(&path)?,
        None => builtin::load_preset(preset)?,
    };

    let out_path = output_file.unwrap_or_else(|| pdf2quiz_core::default_rewrite_output(&input));
    let summary = pdf2quiz_core::rewrite_bank(&input, &out_path, &ruleset)?;

    output::table::print_rewrite_summary(&ruleset.name, &summary, &out_path);
    Ok(())
}
