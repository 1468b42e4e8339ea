//! Results file loading and parsing
//!
//! First stage of the pipeline: check that the input path exists, read it
//! fully, and parse it into a [`ResultsDocument`]. There is no fallback path
//! search and no retry; a missing or malformed file aborts the run.

use crate::{
    error::{AppError, Result},
    models::ResultsDocument,
};
use std::fs;
use std::path::Path;

/// Load and parse a results document from disk
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<ResultsDocument> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(AppError::file_not_found(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("failed to read '{}': {}", path.display(), e)))?;

    let document: ResultsDocument = serde_json::from_str(&contents)?;
    Ok(document)
}
