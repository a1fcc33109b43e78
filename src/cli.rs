use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{self, Global, Runnable};

/// 📈 Lines added and deleted, per commit, day, month and author
#[derive(Parser)]
#[command(
    name = "gitlc",
    version,
    about = "✨ Count the lines each commit, day, month and person changed in a Git repo",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📜 Every commit with its line counts
    Log(commands::Log),

    /// 👥 Line changes per author
    People(commands::People),

    /// 🗓 Line changes per day
    Dates(commands::Dates),

    /// 📅 Line changes per month
    Months(commands::Months),

    /// ✨ People, months and days in one go
    Summary(commands::Summary),
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn execute(self) -> Result<()> {
        let g = Global { json: self.json };
        match self.command {
            Commands::Log(c) => c.run(&g),
            Commands::People(c) => c.run(&g),
            Commands::Dates(c) => c.run(&g),
            Commands::Months(c) => c.run(&g),
            Commands::Summary(c) => c.run(&g),
        }
    }
}
