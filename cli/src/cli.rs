use changelog::DEFAULT_CHANGELOG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relnote")]
#[command(
    author,
    version,
    about = "Report the latest release and its notes from a CHANGELOG.md"
)]
pub struct Cli {
    /// Path to the changelog document
    #[clap(short, long, global = true, default_value = DEFAULT_CHANGELOG_PATH)]
    pub file: PathBuf,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the topmost version label (default)
    Latest,

    /// Print the release notes recorded under a version label
    Notes {
        /// Version label exactly as written after "## "
        version: String,
    },

    /// List every version label in document order
    List {
        /// Print all versions with their notes as a JSON object
        #[clap(long, default_value_t = false)]
        json: bool,
    },
}
