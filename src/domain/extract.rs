use crate::domain::commit::CommitCollection;
use crate::domain::git::LogQuery;
use crate::domain::parse::parse_log;

/// Run `git log` for `query` and parse what it printed.
///
/// Never fails: when git cannot run, or prints nothing recognisable, the
/// collection is simply empty.
pub fn extract(query: &LogQuery) -> CommitCollection {
    let commits = query
        .run()
        .map(|text| parse_log(&text))
        .unwrap_or_default();
    tracing::info!(commits = commits.len(), repo = %query.repo.display(), "parsed git log");
    commits
}
