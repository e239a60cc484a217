use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use crate::datastructures::{LOG, LOG_FILE_PATH, MODEL};

/// Return the log name.
///
/// If the log stem contains the model name, everything to the left of it is
/// the name. Otherwise the log stem is returned as is.
///
/// i.e. with model `glass4`:
///     `data/912-Cuts0-glass4-0.log` -> `912-Cuts0`
///     `data/some-log.log` -> `some-log`
pub fn strip_model_and_seed(log_file_path: &str, model: &str) -> String {
    let log_stem = log_stem(Path::new(log_file_path));
    if model.is_empty() {
        return log_stem;
    }
    match log_stem.split_once(model) {
        Some((run, _)) if !run.is_empty() => run.trim_end_matches('-').to_string(),
        _ => log_stem,
    }
}

/// File name without its extension. A name ending in `.` has no extension
/// and is kept whole.
fn log_stem(path: &Path) -> String {
    let Some(file_name) = path.file_name() else {
        return String::new();
    };
    let file_name = file_name.to_string_lossy();
    if file_name.ends_with('.') {
        return file_name.into_owned();
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Add a `Log` column named after each row's log file and model.
pub fn add_log_names(mut summary: DataFrame) -> Result<DataFrame> {
    let names: Utf8Chunked = summary
        .column(LOG_FILE_PATH)?
        .utf8()?
        .into_iter()
        .zip(summary.column(MODEL)?.utf8()?.into_iter())
        .map(|(path, model)| {
            path.map(|path| strip_model_and_seed(path, model.unwrap_or_default()))
        })
        .collect();
    let mut names = names.into_series();
    names.rename(LOG);
    summary.with_column(names)?;
    Ok(summary)
}
