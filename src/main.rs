//! Taskdeck - terminal to-do list with search and manual reordering

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{Cli, Commands};
use taskdeck::config::Config;
use taskdeck::tui;

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(
            shell,
            &mut Cli::command(),
            "taskdeck",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        Config::default()
    });
    let theme_name = cli.theme.unwrap_or(config.theme.name);

    tui::run(&theme_name)
}
