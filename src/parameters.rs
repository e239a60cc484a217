use anyhow::Result;
use itertools::Itertools;
use log::debug;
use polars::prelude::*;

use crate::defaults::DefaultStore;

mod utils;
pub use utils::parameter_base_name;
use utils::*;

/// Fill missing `"<name> (Parameter)"` values with the defaults of each
/// row's solver version.
///
/// Only parameter columns with at least one missing value are touched. A
/// filled column takes the type of its default value; columns without a
/// default for their base name keep their missing values.
pub fn fill_default_parameters(
    summary: DataFrame,
    store: &DefaultStore,
) -> Result<DataFrame> {
    let summary =
        nan_to_null(summary, |column| parameter_base_name(column).is_some())?;
    let parameter_columns = summary
        .get_columns()
        .iter()
        .filter(|s| parameter_base_name(s.name()).is_some())
        .filter(|s| s.null_count() > 0)
        .map(|s| s.name().to_string())
        .collect_vec();
    if parameter_columns.is_empty() {
        return Ok(summary);
    }
    let groups = load_version_defaults(&summary, store)?;
    let grouped = every_row_grouped(&summary)?;
    let fills = parameter_columns
        .iter()
        .filter_map(|column| {
            fill_expr(column, parameter_base_name(column)?, &groups, grouped)
        })
        .collect_vec();
    debug!(
        "Filling {} of {} incomplete parameter columns for {} versions",
        fills.len(),
        parameter_columns.len(),
        groups.len()
    );
    apply_fills(summary, fills)
}

/// Fill defaults for parameter columns named without the `" (Parameter)"`
/// suffix. Every column whose name has a default is filled and cast.
pub fn fill_default_parameters_nosuffix(
    parameters: DataFrame,
    store: &DefaultStore,
) -> Result<DataFrame> {
    let groups = load_version_defaults(&parameters, store)?;
    let has_default =
        |column: &str| groups.iter().any(|(_, table)| table.get(column).is_some());
    let parameters = nan_to_null(parameters, has_default)?;
    let grouped = every_row_grouped(&parameters)?;
    let fills = parameters
        .get_column_names()
        .into_iter()
        .filter_map(|column| fill_expr(column, column, &groups, grouped))
        .collect_vec();
    debug!(
        "Filling {} parameter columns for {} versions",
        fills.len(),
        groups.len()
    );
    apply_fills(parameters, fills)
}
