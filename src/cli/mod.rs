//! CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "taskdeck",
    about = "Terminal to-do list with search and manual reordering",
    version
)]
pub struct Cli {
    /// Color theme (overrides the config file)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
