use serde::Serialize;
use std::collections::BTreeMap;

/// One commit as reconstructed from `git log --stat` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    pub id: String,
    /// Local part of the author email; may hold several pair-programmers
    /// joined by `+` or `.and.`.
    pub author: Option<String>,
    /// `YYYY-MM-DD`, empty when the log carried no date line.
    pub date: String,
    pub adds: u64,
    pub deletes: u64,
}

impl CommitRecord {
    /// adds - deletes, saturating at the `i64` bounds.
    pub fn net(&self) -> i64 {
        let adds = i64::try_from(self.adds).unwrap_or(i64::MAX);
        let deletes = i64::try_from(self.deletes).unwrap_or(i64::MAX);
        adds.saturating_sub(deletes)
    }
}

/// Commits keyed by hash.
pub type CommitCollection = BTreeMap<String, CommitRecord>;
