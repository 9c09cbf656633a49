//! Command-line argument parsing for sls.
//!
//! `-h` means human readable sizes here, like `ls -h`, so help is only reachable as `--help`.
//! When invoked with no args (sls), the current directory is listed.

use crate::config::Options;

use clap::{ArgAction, Parser};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sls",
    version,
    about = "List information about a file (the current directory by default)",
    disable_help_flag = true,
    after_help = "sls is a long-format ls with icons and colors (super ls)."
)]
pub struct Cli {
    /// Directory/file path
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Show hidden files and directories, plus . and ..
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Print file sizes in human readable format (1.5K, 3.0M)
    #[arg(short = 'h', long = "human-readable")]
    human_readable: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options {
            path: cli.path,
            show_hidden: cli.all,
            human_readable: cli.human_readable,
        }
    }
}

/// Parses the process arguments. Prints help/version or a usage error and exits when asked to.
pub fn handle_args() -> Options {
    Cli::parse().into()
}
