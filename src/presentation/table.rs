use comfy_table::{presets::UTF8_HORIZONTAL_ONLY, CellAlignment, Table};

use crate::domain::commit::{CommitCollection, CommitRecord};
use crate::domain::reduce::Grouped;

/// Render grouped aggregates; `key` names the first column.
pub fn grouped(key: &str, rows: &Grouped) -> String {
    let mut t = Table::new();
    t.load_preset(UTF8_HORIZONTAL_ONLY)
        .set_header(vec![key, "Net", "Adds", "Deletes"]);
    for (k, a) in rows {
        t.add_row(vec![
            k.clone(),
            format!("{:+}", a.net),
            a.adds.to_string(),
            a.deletes.to_string(),
        ]);
    }
    align_numbers(&mut t, 1..4);
    t.to_string()
}

/// Render raw commits, newest date first.
pub fn commits(commits: &CommitCollection) -> String {
    let mut t = Table::new();
    t.load_preset(UTF8_HORIZONTAL_ONLY)
        .set_header(vec!["Commit", "Date", "Author", "Adds", "Deletes"]);
    for c in newest_first(commits) {
        t.add_row(vec![
            c.id.chars().take(10).collect::<String>(),
            c.date.clone(),
            c.author.clone().unwrap_or_else(|| "-".into()),
            c.adds.to_string(),
            c.deletes.to_string(),
        ]);
    }
    align_numbers(&mut t, 3..5);
    t.to_string()
}

pub fn newest_first(commits: &CommitCollection) -> Vec<&CommitRecord> {
    let mut v: Vec<_> = commits.values().collect();
    v.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    v
}

fn align_numbers(t: &mut Table, cols: std::ops::Range<usize>) {
    for i in cols {
        if let Some(col) = t.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}
