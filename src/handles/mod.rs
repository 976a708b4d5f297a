use crate::cli::Cli;
use crate::cli::Commands::{Init, List, Ui};
use crate::error::Result;

mod init;
mod list;
mod ui;

pub fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Init { force } => init::handle(global, force),
        List { query } => list::handle(global, query),
        Ui => ui::handle(global),
    }
}
