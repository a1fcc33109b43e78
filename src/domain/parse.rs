use regex::Regex;
use std::sync::LazyLock;

use crate::domain::commit::{CommitCollection, CommitRecord};

static COMMIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^commit ([0-9a-f]+)").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Date:\s+(.*)").unwrap());
// local part only, minus a leading `pair+` mailbox prefix
static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Author: .*<(pair\+)?(.*)@.*>").unwrap());
static STAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+ files changed, (\d+) insertions\(\+\), (\d+) deletions\(-\)").unwrap()
});

/// Fields gathered for the commit currently being scanned.
#[derive(Debug, Default)]
struct Pending {
    id: Option<String>,
    author: Option<String>,
    date: Option<String>,
    // kept as captured text until the record is emitted
    adds: Option<String>,
    deletes: Option<String>,
}

impl Pending {
    fn starting(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// Turn the accumulator into a record, if a commit boundary was seen.
    fn finish(self) -> Option<CommitRecord> {
        let id = self.id?;
        Some(CommitRecord {
            id,
            author: self.author,
            date: self.date.unwrap_or_default(),
            adds: count(self.adds.as_deref()),
            deletes: count(self.deletes.as_deref()),
        })
    }
}

/// Counts beyond `i64::MAX` are treated as unparsable and become 0.
fn count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .map_or(0, i64::unsigned_abs)
}

/// Scan `git log --stat --date=short` output into commit records.
///
/// Lines are matched in a fixed order: commit boundary, date, author, stat
/// summary. Anything else is skipped, so the scan never fails. A stat line
/// missing either the insertions or the deletions clause does not match and
/// leaves the counts at zero.
pub fn parse_log(text: &str) -> CommitCollection {
    let mut commits = CommitCollection::new();
    let mut emit = |pending: Pending| {
        if let Some(record) = pending.finish() {
            commits.insert(record.id.clone(), record);
        }
    };

    let mut pending = Pending::default();
    for line in text.lines() {
        if let Some(c) = COMMIT_RE.captures(line) {
            emit(std::mem::replace(&mut pending, Pending::starting(&c[1])));
        } else if let Some(c) = DATE_RE.captures(line) {
            pending.date = Some(c[1].to_string());
        } else if let Some(c) = AUTHOR_RE.captures(line) {
            pending.author = Some(c[2].to_string());
        } else if let Some(c) = STAT_RE.captures(line) {
            pending.adds = Some(c[1].to_string());
            pending.deletes = Some(c[2].to_string());
        } else {
            tracing::trace!(line, "ignored log line");
        }
    }
    emit(pending);

    commits
}
