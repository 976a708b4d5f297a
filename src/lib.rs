pub mod cli;
pub mod config;
pub mod error;
pub mod handles;
pub mod logging;
pub mod output;
pub mod tui;
