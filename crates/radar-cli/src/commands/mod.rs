//! Subcommand implementations
//!
//! Each command writes its report to the given writers so it can be driven
//! from tests as well as from `main`.

pub mod export;
pub mod generate;
pub mod list;
pub mod validate;

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::PathBuf;

pub(crate) fn required_path(args: &ArgMatches, name: &str) -> Result<PathBuf> {
    args.get_one::<PathBuf>(name)
        .cloned()
        .with_context(|| format!("--{name} is required"))
}

pub(crate) fn optional_path(args: &ArgMatches, name: &str) -> Option<PathBuf> {
    args.get_one::<PathBuf>(name).cloned()
}
