use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{cfg_path_command, link_args_command};

/// Report build configuration for bundled third-party libraries
#[derive(Parser, Debug)]
#[command(name = "buildenv")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the unique config path for the re2 build
    #[command(name = "cfg-path")]
    CfgPath,
    /// Print the linker arguments needed to link against re2
    #[command(name = "link-args")]
    LinkArgs {
        /// Emit the full library report as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::CfgPath => cfg_path_command(),
            Commands::LinkArgs { json } => link_args_command(json),
        }
    }
}
