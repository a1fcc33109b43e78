use anyhow::Result;
use clap::Args;

use crate::commands::{Global, LogArgs};
use crate::domain::reduce::Reducer;
use crate::presentation::{json, table};

/// List every commit with its line counts.
#[derive(Debug, Args)]
pub struct Log {
    #[command(flatten)]
    pub log: LogArgs,
}

impl super::Runnable for Log {
    fn run(self, g: &Global) -> Result<()> {
        let (commits, aliases) = self.log.load()?;
        let r = Reducer::new(&commits, &aliases);

        if g.json {
            println!("{}", serde_json::to_string_pretty(&json::commits(r.by_commit()))?);
        } else {
            println!("📜 {} commits", commits.len());
            println!("{}", table::commits(r.by_commit()));
        }
        Ok(())
    }
}
