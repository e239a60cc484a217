use anyhow::Result;
use clap::Parser;
use log::{error, info};

use solver_log_tools::datastructures::*;
use solver_log_tools::defaults::DefaultStore;
use solver_log_tools::summary;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let config = match Config::from_cli(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };
    let store = DefaultStore::new(&config.defaults_dir);
    info!("Reading parameter defaults from {:?}", store.dir());
    let df = summary::read_summary_csvs(&config.files)?;
    info!("Read {} runs from {} files", df.height(), config.files.len());
    let df = summary::process_summary(df, &store, config.nosuffix)?;
    summary::write_summary_csv(df, &config.out)?;
    Ok(())
}
