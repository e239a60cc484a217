use std::{fs, path::Path};

use polars::prelude::*;
use tempfile::TempDir;

use crate::defaults::DefaultStore;

pub fn write_defaults(dir: &Path, version: &str, content: &str) {
    fs::write(dir.join(format!("{version}.json")), content).unwrap();
}

/// Store over a temporary directory holding the given `(version, json)` files.
pub fn store_with(files: &[(&str, &str)]) -> (TempDir, DefaultStore) {
    let dir = tempfile::tempdir().unwrap();
    for (version, content) in files {
        write_defaults(dir.path(), version, content);
    }
    let store = DefaultStore::new(dir.path());
    (dir, store)
}

pub fn i64_values(df: &DataFrame, column: &str) -> Vec<Option<i64>> {
    df.column(column).unwrap().i64().unwrap().into_iter().collect()
}

pub fn f64_values(df: &DataFrame, column: &str) -> Vec<Option<f64>> {
    df.column(column).unwrap().f64().unwrap().into_iter().collect()
}

pub fn str_values(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    let strings = df.column(column).unwrap().cast(&DataType::Utf8).unwrap();
    strings
        .utf8()
        .unwrap()
        .into_iter()
        .map(|s| s.map(str::to_string))
        .collect()
}
