// CLI module - server and administrative commands

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Foo API server
#[derive(Parser, Debug)]
#[command(name = "fooapi")]
#[command(about = "Foo resource REST API", long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations and start the HTTP server
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

impl Cli {
    pub fn command_or_default(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}
