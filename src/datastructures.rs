use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Column holding the dot separated solver version of a run.
pub const VERSION: &str = "Version";
/// Column holding the model name of a run.
pub const MODEL: &str = "Model";
/// Column holding the path of the parsed log file.
pub const LOG_FILE_PATH: &str = "LogFilePath";
/// Column added by [`crate::log_names::add_log_names`].
pub const LOG: &str = "Log";
/// Marker appended to parameter columns in a summary table.
pub const PARAMETER_SUFFIX: &str = " (Parameter)";

/// A single default value of a solver parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean parameter
    Bool(bool),
    /// Integer parameter
    Int(i64),
    /// Floating point parameter
    Float(f64),
    /// String parameter
    Str(String),
}

impl DefaultValue {
    /// Data type a column takes after being filled with this value.
    pub fn dtype(&self) -> DataType {
        match self {
            DefaultValue::Bool(_) => DataType::Boolean,
            DefaultValue::Int(_) => DataType::Int64,
            DefaultValue::Float(_) => DataType::Float64,
            DefaultValue::Str(_) => DataType::Utf8,
        }
    }

    /// The value as a literal expression.
    pub fn lit(&self) -> Expr {
        match self {
            DefaultValue::Bool(v) => lit(*v),
            DefaultValue::Int(v) => lit(*v),
            DefaultValue::Float(v) => lit(*v),
            DefaultValue::Str(v) => lit(v.as_str()),
        }
    }
}

/// Settings of the `summary` binary, read from json and overridden by [`Args`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Summary CSVs to process
    pub files: Vec<PathBuf>,
    /// Path of the processed summary
    pub out: PathBuf,
    /// Directory of the `<version>.json` defaults
    #[serde(default = "default_defaults_dir")]
    pub defaults_dir: PathBuf,
    /// Parameter columns carry no `" (Parameter)"` suffix
    #[serde(default)]
    pub nosuffix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: vec![],
            out: PathBuf::from("summary.csv"),
            defaults_dir: default_defaults_dir(),
            nosuffix: false,
        }
    }
}

impl Config {
    /// Read the config file given in `args`, if any, and apply the command line overrides.
    pub fn from_cli(args: &Args) -> Result<Config> {
        let mut config: Config = match &args.config {
            Some(config_path) => {
                let config_str = fs::read_to_string(config_path)?;
                serde_json::from_str(&config_str)?
            }
            None => Config::default(),
        };
        if let Some(files) = &args.files {
            config.files = files.to_vec();
        }
        if let Some(out) = &args.out {
            config.out = out.to_path_buf();
        }
        if let Some(defaults_dir) = &args.defaults_dir {
            config.defaults_dir = defaults_dir.to_path_buf();
        }
        if args.nosuffix {
            config.nosuffix = true;
        }
        if config.files.is_empty() {
            anyhow::bail!("No summary files provided");
        }
        Ok(config)
    }
}

/// Directory of the default parameter files shipped with this crate.
pub fn default_defaults_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults"))
}

/// Command line arguments of the `summary` binary.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the json config
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// List of CSV summaries produced by the log parser
    #[arg(short, long, value_delimiter = ' ', num_args = 0..)]
    pub files: Option<Vec<PathBuf>>,
    /// Path of the processed summary
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
    /// Directory containing the <version>.json parameter defaults
    #[arg(short, long, value_name = "DIR")]
    pub defaults_dir: Option<PathBuf>,
    /// Parameter columns carry no " (Parameter)" suffix
    #[arg(long)]
    pub nosuffix: bool,
    /// Log level
    #[command(flatten)]
    pub verbosity: Verbosity,
}
