use pdf2quiz_core::error::QuizError;
use pdf2quiz_core::index;
use std::path::PathBuf;

use crate::output;

pub fn run(dir: PathBuf, output_file: Option<PathBuf>) -> Result<(), QuizError> {
    if !dir.is_dir() {
        return Err(QuizError::InputNotFound(dir));
    }

    let manifest = output_file.unwrap_or_else(|| index::default_manifest_path(&dir));
    let names = index::write_manifest(&dir, &manifest)?;

    output::table::print_index_summary(&names, &manifest);
    Ok(())
}
