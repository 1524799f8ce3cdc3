pub mod error;
pub mod extraction;
pub mod index;
pub mod jsonl;
pub mod model;
pub mod parsing;
pub mod rewrite;
pub mod stats;

use error::QuizError;
use extraction::PdfExtractor;
use model::ParsedBank;
use parsing::ParseOptions;
use rewrite::schema::RewriteRuleSetDef;
use rewrite::{RewriteEngine, RewriteSummary};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main API entry point: parse an exam export PDF into question records.
///
/// Pages are joined in page order and handed to the text pipeline.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<ParsedBank, QuizError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "pages extracted"
    );
    let text = extraction::join_pages(&pages);
    parsing::parse_document(&text, options)
}

/// Parse already-extracted document text.
pub fn parse_text(text: &str, options: &ParseOptions) -> Result<ParsedBank, QuizError> {
    parsing::parse_document(text, options)
}

/// Rewrite the explanations of a JSONL bank and write the result to `output`.
pub fn rewrite_bank(
    input: &Path,
    output: &Path,
    ruleset: &RewriteRuleSetDef,
) -> Result<RewriteSummary, QuizError> {
    let engine = RewriteEngine::new(ruleset)?;
    let mut records = jsonl::read_jsonl(input)?;
    let summary = engine.rewrite_all(&mut records);
    jsonl::write_jsonl(output, &records)?;
    info!(
        ruleset = engine.name(),
        processed = summary.processed,
        updated = summary.updated,
        "bank rewritten"
    );
    Ok(summary)
}

/// `bank.jsonl` -> `bank.rewritten.jsonl`, in the same directory.
pub fn default_rewrite_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bank".into());
    input.with_file_name(format!("{stem}.rewritten.jsonl"))
}
