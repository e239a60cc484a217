use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};
use polars::prelude::*;

use crate::{
    datastructures::{LOG_FILE_PATH, MODEL, VERSION},
    defaults::DefaultStore,
    descriptions::add_categorical_descriptions,
    log_names::add_log_names,
    parameters::{fill_default_parameters, fill_default_parameters_nosuffix},
};

/// Read and concatenate summary CSVs produced by the log parser.
pub fn read_summary_csvs(paths: &[PathBuf]) -> Result<DataFrame> {
    let read_df = |path: &PathBuf| -> Result<LazyFrame> {
        Ok(CsvReader::from_path(path)
            .with_context(|| format!("Failed to open summary {path:?}"))?
            .with_comment_char(Some(b'#'))
            .has_header(true)
            .with_dtypes(Some(&Schema::from(
                [Field::new(VERSION, DataType::Utf8)].into_iter(),
            )))
            .finish()?
            .lazy())
    };
    let dataframes = paths.iter().map(read_df).collect::<Result<Vec<_>>>()?;
    if dataframes.is_empty() {
        anyhow::bail!("No summary files provided");
    }
    Ok(concat(dataframes, true, true)?.collect()?)
}

/// Fill parameter defaults, describe categorical parameters and name the
/// logs of a summary.
pub fn process_summary(
    summary: DataFrame,
    store: &DefaultStore,
    nosuffix: bool,
) -> Result<DataFrame> {
    let summary = if nosuffix {
        fill_default_parameters_nosuffix(summary, store)?
    } else {
        fill_default_parameters(summary, store)?
    };
    let summary = add_categorical_descriptions(summary)?;
    let columns = summary.get_column_names();
    if columns.contains(&LOG_FILE_PATH) && columns.contains(&MODEL) {
        add_log_names(summary)
    } else {
        warn!("Summary has no {LOG_FILE_PATH} or {MODEL} column, skipping log names");
        Ok(summary)
    }
}

/// Write a summary as CSV, categorical columns as plain strings.
pub fn write_summary_csv(summary: DataFrame, path: &Path) -> Result<()> {
    let categorical = summary
        .get_columns()
        .iter()
        .filter(|s| matches!(s.dtype(), DataType::Categorical(_)))
        .map(|s| col(s.name()).cast(DataType::Utf8))
        .collect_vec();
    let mut summary = if categorical.is_empty() {
        summary
    } else {
        summary.lazy().with_columns(categorical).collect()?
    };
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create {path:?}"))?;
    CsvWriter::new(&mut file).finish(&mut summary)?;
    info!("Wrote {} rows to {:?}", summary.height(), path);
    Ok(())
}
