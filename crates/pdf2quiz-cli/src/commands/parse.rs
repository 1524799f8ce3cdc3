use pdf2quiz_core::error::QuizError;
use pdf2quiz_core::extraction::pdftotext::PdftotextExtractor;
use pdf2quiz_core::jsonl::write_jsonl;
use pdf2quiz_core::parsing::ParseOptions;
use pdf2quiz_core::stats::BankStats;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::output;

pub fn run(
    input: PathBuf,
    output_file: Option<PathBuf>,
    header_pattern: Option<String>,
    verbose: bool,
) -> Result<(), QuizError> {
    if !input.is_file() {
        return Err(QuizError::InputNotFound(input));
    }

    let mut options = ParseOptions::default();
    if header_pattern.is_some() {
        options.header_pattern = header_pattern;
    }

    let bank = if is_text_input(&input) {
        info!(input = %input.display(), "reading pre-extracted text");
        let text = std::fs::read_to_string(&input)?;
        pdf2quiz_core::parse_text(&text, &options)?
    } else {
        if !PdftotextExtractor::is_available() {
            return Err(QuizError::PdftotextNotFound);
        }
        let pdf_bytes = std::fs::read(&input)?;
        let extractor = PdftotextExtractor::new();
        pdf2quiz_core::parse_pdf(&pdf_bytes, &extractor, &options)?
    };

    let out_path = output_file.unwrap_or_else(|| input.with_extension("jsonl"));
    write_jsonl(&out_path, &bank.records)?;

    output::table::print_parse_summary(&bank, &out_path);
    if verbose {
        output::table::print_stats(&BankStats::from_records(&bank.records));
        output::table::print_skipped(&bank);
    }

    Ok(())
}

fn is_text_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}
