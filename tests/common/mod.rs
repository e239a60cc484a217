use std::{fs, path::Path};

use polars::prelude::*;
use solver_log_tools::defaults::DefaultStore;
use tempfile::TempDir;

#[allow(dead_code)]
pub fn store_with(files: &[(&str, &str)]) -> (TempDir, DefaultStore) {
    let dir = tempfile::tempdir().unwrap();
    for (version, content) in files {
        fs::write(dir.path().join(format!("{version}.json")), content)
            .unwrap();
    }
    let store = DefaultStore::new(dir.path());
    (dir, store)
}

#[allow(dead_code)]
pub fn str_values(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    let strings = df.column(column).unwrap().cast(&DataType::Utf8).unwrap();
    strings
        .utf8()
        .unwrap()
        .into_iter()
        .map(|s| s.map(str::to_string))
        .collect()
}

#[allow(dead_code)]
pub fn data_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/test").join(name)
}
