use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::domain::{
    aliases::{self, AuthorAliasMap},
    commit::CommitCollection,
    extract::extract,
    git::LogQuery,
};

#[derive(Debug, Clone, Default)]
pub struct Global {
    /// Print JSON instead of tables
    pub json: bool,
}

pub trait Runnable {
    fn run(self, g: &Global) -> Result<()>;
}

/// Flags shared by every command: which history to read and how to name
/// its authors.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Path to the Git repo
    #[arg(short, long, default_value = ".")]
    pub repo: PathBuf,

    /// Number of most recent commits to investigate (0 = all)
    #[arg(short, long, default_value = "0")]
    pub count: usize,

    /// Only commits more recent than this date (any git date, e.g. "2 weeks ago")
    #[arg(short, long)]
    pub since: Option<String>,

    /// Only commits whose author matches this pattern
    #[arg(short, long)]
    pub author: Option<String>,

    /// YAML file mapping each author to their aliases
    #[arg(short = 'A', long)]
    pub aliases: Option<PathBuf>,
}

impl LogArgs {
    pub fn query(&self) -> LogQuery {
        LogQuery {
            repo: self.repo.clone(),
            count: self.count,
            since: self.since.clone(),
            author: self.author.clone(),
        }
    }

    pub fn aliases(&self) -> Result<AuthorAliasMap> {
        match &self.aliases {
            Some(path) => aliases::load(path),
            None => Ok(AuthorAliasMap::new()),
        }
    }

    /// Load aliases first so a bad alias file fails before git runs.
    pub fn load(&self) -> Result<(CommitCollection, AuthorAliasMap)> {
        let aliases = self.aliases()?;
        Ok((extract(&self.query()), aliases))
    }
}

pub mod dates;
pub mod log;
pub mod months;
pub mod people;
pub mod summary;

pub use dates::Dates;
pub use log::Log;
pub use months::Months;
pub use people::People;
pub use summary::Summary;
