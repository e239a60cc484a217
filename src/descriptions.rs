use std::collections::HashMap;

use anyhow::Result;
use itertools::Itertools;
use log::debug;
use once_cell::sync::Lazy;
use polars::prelude::*;

static PARAMETER_DESCRIPTIONS: Lazy<HashMap<&'static str, HashMap<i64, &'static str>>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "Method (Parameter)",
                HashMap::from([
                    (-1, "-1: Default"),
                    (0, "0: Primal Simplex"),
                    (1, "1: Dual Simplex"),
                    (2, "2: Barrier"),
                    (3, "3: Nondeterministic Concurrent"),
                    (4, "4: Deterministic Concurrent"),
                    (5, "5: Deterministic Concurrent Simplex"),
                ]),
            ),
            (
                "Presolve (Parameter)",
                HashMap::from([
                    (-1, "-1: Automatic"),
                    (0, "0: Off"),
                    (1, "1: Conservative"),
                    (2, "2: Aggressive"),
                ]),
            ),
            (
                "Cuts (Parameter)",
                HashMap::from([
                    (-1, "-1: Automatic"),
                    (0, "0: Off"),
                    (1, "1: Moderate"),
                    (2, "2: Aggressive"),
                    (3, "3: Very aggressive"),
                ]),
            ),
            (
                "MIPFocus (Parameter)",
                HashMap::from([
                    (0, "0: Balanced"),
                    (1, "1: Feasibility"),
                    (2, "2: Optimality"),
                    (3, "3: Bound"),
                ]),
            ),
        ])
    });

/// Description of a categorical parameter value, e.g. `"1: Dual Simplex"`
/// for code 1 of `Method (Parameter)`.
pub fn describe(column: &str, code: i64) -> Option<&'static str> {
    PARAMETER_DESCRIPTIONS.get(column)?.get(&code).copied()
}

/// Integral codes of a column, booleans counting as 0 and 1. Anything else
/// maps to `None`.
fn parameter_codes(series: &Series) -> Result<Vec<Option<i64>>> {
    let codes = match series.dtype() {
        DataType::Float32 | DataType::Float64 => {
            let floats = series.cast(&DataType::Float64)?;
            let codes: Vec<Option<i64>> = floats
                .f64()?
                .into_iter()
                .map(|v| v.filter(|v| v.fract() == 0.0).map(|v| v as i64))
                .collect();
            codes
        }
        DataType::Boolean
        | DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => {
            let ints = series.cast(&DataType::Int64)?;
            let codes: Vec<Option<i64>> = ints.i64()?.into_iter().collect();
            codes
        }
        _ => vec![None; series.len()],
    };
    Ok(codes)
}

/// Replace the codes of the known categorical parameter columns by their
/// descriptions.
///
/// The summary is taken by value and returned with the described columns
/// rewritten as `Categorical`. Codes without a description become null.
pub fn add_categorical_descriptions(mut summary: DataFrame) -> Result<DataFrame> {
    let parameter_columns = summary
        .get_column_names()
        .into_iter()
        .filter(|column| PARAMETER_DESCRIPTIONS.contains_key(*column))
        .map(str::to_string)
        .collect_vec();
    for column in parameter_columns {
        let codes = parameter_codes(summary.column(&column)?)?;
        let descriptions: Utf8Chunked = codes
            .into_iter()
            .map(|code| describe(&column, code?))
            .collect();
        let mut described = descriptions
            .into_series()
            .cast(&DataType::Categorical(None))?;
        described.rename(&column);
        debug!(
            "Described {column}, {} values without description",
            described.null_count()
        );
        summary.with_column(described)?;
    }
    Ok(summary)
}
