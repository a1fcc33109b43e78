use anyhow::Result;
use clap::Args;

use crate::commands::{Global, LogArgs};
use crate::domain::reduce::Reducer;
use crate::presentation::{json, table};

/// Line changes per calendar month, newest first.
#[derive(Debug, Args)]
pub struct Months {
    #[command(flatten)]
    pub log: LogArgs,
}

impl super::Runnable for Months {
    fn run(self, g: &Global) -> Result<()> {
        let (commits, aliases) = self.log.load()?;
        let rows = Reducer::new(&commits, &aliases).by_month();

        if g.json {
            println!("{}", serde_json::to_string_pretty(&json::grouped(&rows))?);
        } else {
            println!("📅 Lines by month");
            println!("{}", table::grouped("Month", &rows));
        }
        Ok(())
    }
}
