use serde_json::{json, Value};

use crate::domain::commit::CommitCollection;
use crate::domain::reduce::Grouped;
use crate::presentation::table::newest_first;

pub fn grouped(rows: &Grouped) -> Value {
    Value::Array(
        rows.iter()
            .map(|(key, a)| json!({ "key": key, "net": a.net, "adds": a.adds, "deletes": a.deletes }))
            .collect(),
    )
}

pub fn commits(commits: &CommitCollection) -> Value {
    json!(newest_first(commits))
}
