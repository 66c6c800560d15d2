use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Gatecheck workspace tasks", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Subcommand)]
pub enum AppCommands {
    /// Run tests for the workspace or a specific crate
    Test {
        /// Crate name (short form allowed, e.g. `intake`) or `all`
        project: Option<String>,
    },
    /// Run doc tests for the workspace or a specific crate
    Doctest {
        /// Crate name (short form allowed, e.g. `intake`) or `all`
        project: Option<String>,
    },
    /// Run rustfmt and clippy over the workspace
    Lint {
        /// Apply formatting fixes instead of checking
        #[arg(long)]
        fix: bool,
    },
}
