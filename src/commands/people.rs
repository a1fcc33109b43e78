use anyhow::Result;
use clap::Args;

use crate::commands::{Global, LogArgs};
use crate::domain::reduce::Reducer;
use crate::presentation::{json, table};

/// Line changes per author, highest net first.
///
/// Pair-programmed commits (`alice+bob`, `alice.and.bob`) count fully for
/// every author involved.
#[derive(Debug, Args)]
pub struct People {
    #[command(flatten)]
    pub log: LogArgs,
}

impl super::Runnable for People {
    fn run(self, g: &Global) -> Result<()> {
        let (commits, aliases) = self.log.load()?;
        let rows = Reducer::new(&commits, &aliases).by_person();

        if g.json {
            println!("{}", serde_json::to_string_pretty(&json::grouped(&rows))?);
        } else {
            println!("👥 Lines by person");
            println!("{}", table::grouped("Author", &rows));
        }
        Ok(())
    }
}
