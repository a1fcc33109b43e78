use anyhow::Result;
use clap::Args;

use crate::commands::{Global, LogArgs};
use crate::domain::reduce::Reducer;
use crate::presentation::{json, table};

/// People, dates and months from a single `git log` run.
#[derive(Debug, Args)]
pub struct Summary {
    #[command(flatten)]
    pub log: LogArgs,
}

impl super::Runnable for Summary {
    fn run(self, g: &Global) -> Result<()> {
        let (commits, aliases) = self.log.load()?;
        let r = Reducer::new(&commits, &aliases);

        // the groupings share nothing but the read-only collection
        let (people, (dates, months)) =
            rayon::join(|| r.by_person(), || rayon::join(|| r.by_date(), || r.by_month()));

        if g.json {
            let payload = serde_json::json!({
                "commits": commits.len(),
                "people": json::grouped(&people),
                "dates": json::grouped(&dates),
                "months": json::grouped(&months),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        println!("✨ {} commits", commits.len());
        println!();
        println!("👥 Lines by person");
        println!("{}", table::grouped("Author", &people));
        println!();
        println!("📅 Lines by month");
        println!("{}", table::grouped("Month", &months));
        println!();
        println!("🗓  Lines by date");
        println!("{}", table::grouped("Date", &dates));
        Ok(())
    }
}
