//! Command-line tool generating API documentation descriptions from decorators.
//!
//! Scans one folder of controller sources for `@Api...Response`, `@ApiParam`,
//! `@ApiQuery` and `@ApiCookieAuth()` decorators and writes one documentation
//! file per annotated source plus an `index` file rolling them up.
//!
//! # Usage
//!
//! ```bash
//! apidoc-from-decorators [OPTIONS] [DIRECTORY]
//! ```
//!
//! # Examples
//!
//! Prompt for the folder and document `./src/<folder>` into `./documentation/<folder>`:
//! ```bash
//! apidoc-from-decorators
//! ```
//!
//! Document `./src/users` and keep the index in processing order:
//! ```bash
//! apidoc-from-decorators users --index-order insertion
//! ```
//!
//! Enable verbose logging and write a JSON run report:
//! ```bash
//! apidoc-from-decorators users -v --report run.json --report-format json
//! ```

use anyhow::Result;
use apidoc_from_decorators::cli;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    // Logger level depends on the verbose flag, so arguments are parsed first
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("API documentation generator starting...");

    let args = cli::parse_args_from_parsed(args)?;

    cli::run(args)?;

    info!("Documentation generation completed successfully");

    Ok(())
}
