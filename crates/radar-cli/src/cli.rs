//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory containing snapshot YAML files")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .default_value("output")
        .value_parser(value_parser!(PathBuf))
        .help("Directory for generated HTML")
}

fn meta_arg() -> Arg {
    Arg::new("meta")
        .long("meta")
        .value_parser(value_parser!(PathBuf))
        .help("Path to meta file (defaults to <input>/meta.yaml)")
}

fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .long("verbose")
        .short('v')
        .action(ArgAction::SetTrue)
        .help("Show per-file details")
}

/// Build the `tech-radar` command
#[must_use]
pub fn command() -> Command {
    Command::new("tech-radar")
        .version(radar_core::VERSION)
        .about("Technology radar generator: interactive HTML radars from dated YAML snapshots")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Render one HTML radar per snapshot")
                .arg(input_arg())
                .arg(output_arg())
                .arg(
                    Arg::new("template")
                        .long("template")
                        .value_parser(value_parser!(PathBuf))
                        .help("Custom template file (defaults to the embedded template)"),
                )
                .arg(meta_arg())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Regenerate existing HTML files"),
                )
                .arg(verbose_arg())
                .arg(
                    Arg::new("include-links")
                        .long("include-links")
                        .action(ArgAction::SetTrue)
                        .help("Link entries to /<quadrant>/<name>/"),
                )
                .arg(
                    Arg::new("add-changes")
                        .long("add-changes")
                        .action(ArgAction::SetTrue)
                        .help("Add a table of new, moved and deleted technologies"),
                )
                .arg(
                    Arg::new("skip-first-radar-changes")
                        .long("skip-first-radar-changes")
                        .default_value("true")
                        .value_parser(value_parser!(bool))
                        .help("Omit the changes table for the earliest radar"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Show which snapshots have been rendered")
                .arg(input_arg())
                .arg(output_arg())
                .arg(meta_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check snapshot files without rendering")
                .arg(input_arg())
                .arg(meta_arg())
                .arg(verbose_arg()),
        )
        .subcommand(
            Command::new("export-template")
                .about("Write the embedded template for customization")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Destination file"),
                ),
        )
        .subcommand(Command::new("version").about("Print version"))
}
