use std::sync::Arc;

use anyhow::{Context, Result};
use itertools::Itertools;
use polars::prelude::*;

use crate::{
    datastructures::{PARAMETER_SUFFIX, VERSION},
    defaults::{normalize_version, DefaultStore, DefaultTable},
};

/// Version of a row group together with the defaults of that version.
pub type VersionDefaults = (String, Arc<DefaultTable>);

/// Base name of a `"<base> (Parameter)"` column.
pub fn parameter_base_name(column: &str) -> Option<&str> {
    column.strip_suffix(PARAMETER_SUFFIX)
}

/// Replace NaN by null in the float columns selected by `predicate`.
pub fn nan_to_null(
    mut df: DataFrame,
    predicate: impl Fn(&str) -> bool,
) -> Result<DataFrame> {
    let float_columns = df
        .get_columns()
        .iter()
        .filter(|s| matches!(s.dtype(), DataType::Float64))
        .filter(|s| predicate(s.name()))
        .filter(|s| s.is_nan().map(|nan| nan.any()).unwrap_or(false))
        .map(|s| s.name().to_string())
        .collect_vec();
    for column in float_columns {
        let cleaned: Float64Chunked = df
            .column(&column)?
            .f64()?
            .into_iter()
            .map(|v| v.filter(|v| !v.is_nan()))
            .collect();
        let mut cleaned = cleaned.into_series();
        cleaned.rename(&column);
        df.with_column(cleaned)?;
    }
    Ok(df)
}

/// Distinct non-null versions in order of first appearance.
pub fn version_groups(df: &DataFrame) -> Result<Vec<String>> {
    Ok(df
        .column(VERSION)
        .context("summary has no Version column")?
        .utf8()?
        .into_iter()
        .flatten()
        .unique()
        .map(str::to_string)
        .collect())
}

/// Whether every row has a version and so belongs to a version group.
pub fn every_row_grouped(df: &DataFrame) -> Result<bool> {
    Ok(df
        .column(VERSION)
        .context("summary has no Version column")?
        .null_count()
        == 0)
}

pub fn load_version_defaults(
    df: &DataFrame,
    store: &DefaultStore,
) -> Result<Vec<VersionDefaults>> {
    version_groups(df)?
        .into_iter()
        .map(|version| -> Result<VersionDefaults> {
            let defaults = store
                .load_defaults(&normalize_version(&version))
                .with_context(|| {
                    format!("Failed to load defaults for version {version}")
                })?;
            Ok((version, defaults))
        })
        .collect()
}

/// Expression filling the nulls of `column` per version group with the
/// default of `parameter`. `None` if no group has such a default.
///
/// Rows outside every group keep their value, so the column only takes the
/// default's dtype as a whole when `every_row_grouped` holds.
pub fn fill_expr(
    column: &str,
    parameter: &str,
    groups: &[VersionDefaults],
    every_row_grouped: bool,
) -> Option<Expr> {
    let defaults = groups
        .iter()
        .filter_map(|(version, table)| Some((version, table.get(parameter)?)))
        .collect_vec();
    if defaults.is_empty() {
        return None;
    }
    let mut dtypes = defaults.iter().map(|(_, d)| d.dtype()).collect_vec();
    dtypes.dedup();
    let filled = defaults.iter().fold(col(column), |acc, (version, default)| {
        when(col(VERSION).eq(lit(version.as_str())))
            .then(col(column).fill_null(default.lit()).cast(default.dtype()))
            .otherwise(acc)
    });
    // a single dtype over all rows types the whole column
    let filled = match (
        dtypes.len(),
        defaults.len() == groups.len() && every_row_grouped,
    ) {
        (1, true) => filled.cast(dtypes.remove(0)),
        _ => filled,
    };
    Some(filled.alias(column))
}

pub fn apply_fills(df: DataFrame, fills: Vec<Expr>) -> Result<DataFrame> {
    if fills.is_empty() {
        return Ok(df);
    }
    Ok(df.lazy().with_columns(fills).collect()?)
}
