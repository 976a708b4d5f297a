use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    bin_name = "mdd",
    name = "mdd",
    version = env!("CARGO_PKG_VERSION"),
    about = "A searchable multi-select dropdown for the terminal",
    long_about = None,
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the config file (defaults to ~/.config/multi-dropdown/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive dropdown demo
    #[command(visible_alias = "demo")]
    Ui,

    /// Print the configured items, optionally filtered by a search query
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive text the item title must contain
        query: Option<String>,
    },

    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
