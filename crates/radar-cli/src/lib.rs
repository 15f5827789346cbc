//! Tech Radar CLI
//!
//! Library half of the `tech-radar` binary: the command definition and one
//! module per subcommand.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;

pub use cli::command;
