use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fmk-server")]
#[command(about = "Forget-Me-Knots project store backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config directory (overrides FMK_CONFIG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Answer JSON requests on stdin, one per line (default)
    #[default]
    Serve,

    /// Write every project to a JSON backup file
    Export {
        /// Output file (defaults to the configured backup file name)
        file: Option<PathBuf>,
    },

    /// Load projects from a JSON backup file
    Import {
        /// Backup file to read
        file: PathBuf,
    },
}
