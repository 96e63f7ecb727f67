//! Command-line interface for pentago.

use clap::{Parser, Subcommand};

/// Pentago - rules engine with a console front end
#[derive(Parser, Debug)]
#[command(name = "pentago")]
#[command(about = "Play pentago in the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the console
    Play,

    /// Run a short scripted game and print the resulting state
    Demo {
        /// Print the final status as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
