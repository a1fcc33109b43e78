use anyhow::Result;
use clap::Args;

use crate::commands::{Global, LogArgs};
use crate::domain::reduce::Reducer;
use crate::presentation::{json, table};

/// Line changes per day, newest first.
#[derive(Debug, Args)]
pub struct Dates {
    #[command(flatten)]
    pub log: LogArgs,
}

impl super::Runnable for Dates {
    fn run(self, g: &Global) -> Result<()> {
        let (commits, aliases) = self.log.load()?;
        let rows = Reducer::new(&commits, &aliases).by_date();

        if g.json {
            println!("{}", serde_json::to_string_pretty(&json::grouped(&rows))?);
        } else {
            println!("🗓  Lines by date");
            println!("{}", table::grouped("Date", &rows));
        }
        Ok(())
    }
}
