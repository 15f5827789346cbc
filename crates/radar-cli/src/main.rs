use anyhow::Result;
use radar_cli::commands::generate::{self, GenerateArgs};
use radar_cli::commands::list::{self, ListArgs};
use radar_cli::commands::validate::{self, ValidateArgs};
use radar_cli::commands::export;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<bool> {
    let matches = radar_cli::command().get_matches();
    let (name, args) = match matches.subcommand() {
        Some(pair) => pair,
        None => return Ok(true),
    };

    let verbose = args
        .try_get_one::<bool>("verbose")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);
    init_tracing(verbose);

    let mut stdout = std::io::stdout().lock();
    match name {
        "generate" => {
            generate::run(&GenerateArgs::from_matches(args)?, &mut stdout)?;
        }
        "list" => list::run(&ListArgs::from_matches(args)?, &mut stdout)?,
        "validate" => {
            let mut stderr = std::io::stderr().lock();
            let args = ValidateArgs::from_matches(args)?;
            let summary = validate::run(&args, &mut stdout, &mut stderr)?;
            return Ok(summary.is_ok());
        }
        "export-template" => {
            if let Some(path) = args.get_one::<PathBuf>("output") {
                export::run(path, &mut stdout)?;
            }
        }
        "version" => writeln!(stdout, "{}", radar_core::VERSION)?,
        _ => {}
    }
    Ok(true)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
