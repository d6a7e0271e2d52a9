mod cli;
mod error;
mod latest;
mod list;
mod logging;
mod notes;
mod ui;

use changelog::{Changelog, ChangelogConfig};
use clap::Parser;
use cli::{Cli, Commands};
use error::Result;
use std::process;

async fn run(cli: Cli) -> Result<()> {
    let config = ChangelogConfig::new(cli.file);
    let changelog = Changelog::load(config).await?;

    match cli.command.unwrap_or(Commands::Latest) {
        Commands::Latest => latest::execute(&changelog),
        Commands::Notes { version } => notes::execute(&changelog, &version),
        Commands::List { json } => list::execute(&changelog, json),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli).await {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
