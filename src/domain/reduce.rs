use serde::Serialize;
use std::collections::HashMap;

use crate::domain::aliases::AuthorAliasMap;
use crate::domain::commit::{CommitCollection, CommitRecord};

/// Summed line changes for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub net: i64,
    pub adds: u64,
    pub deletes: u64,
}

impl Aggregate {
    fn add(&mut self, c: &CommitRecord) {
        self.net = self.net.saturating_add(c.net());
        self.adds = self.adds.saturating_add(c.adds);
        self.deletes = self.deletes.saturating_add(c.deletes);
    }
}

pub type Grouped = Vec<(String, Aggregate)>;

/// Read-only views over a parsed commit collection.
pub struct Reducer<'a> {
    commits: &'a CommitCollection,
    aliases: &'a AuthorAliasMap,
}

impl<'a> Reducer<'a> {
    pub fn new(commits: &'a CommitCollection, aliases: &'a AuthorAliasMap) -> Self {
        Self { commits, aliases }
    }

    pub fn by_commit(&self) -> &'a CommitCollection {
        self.commits
    }

    /// Newest date first. Commits without an author are included.
    pub fn by_date(&self) -> Grouped {
        self.by_key(|c| c.date.clone())
    }

    /// `YYYY-MM` buckets, newest first.
    pub fn by_month(&self) -> Grouped {
        self.by_key(|c| c.date.chars().take(7).collect())
    }

    /// Per canonical author, highest net first.
    ///
    /// Every author of a pair-programmed commit is credited with the whole
    /// commit. Commits without an author are skipped.
    pub fn by_person(&self) -> Grouped {
        let mut people: HashMap<String, Aggregate> = HashMap::new();
        for c in self.commits.values() {
            let Some(author) = c.author.as_deref().filter(|a| !a.is_empty()) else {
                continue;
            };
            for name in split_authors(author) {
                people
                    .entry(self.canonical_name(name).to_string())
                    .or_default()
                    .add(c);
            }
        }

        let mut v: Grouped = people.into_iter().collect();
        // ties broken by name so output is stable
        v.sort_by(|a, b| b.1.net.cmp(&a.1.net).then_with(|| a.0.cmp(&b.0)));
        v
    }

    fn by_key(&self, key: impl Fn(&CommitRecord) -> String) -> Grouped {
        let mut groups: HashMap<String, Aggregate> = HashMap::new();
        for c in self.commits.values() {
            groups.entry(key(c)).or_default().add(c);
        }

        let mut v: Grouped = groups.into_iter().collect();
        v.sort_by(|a, b| b.0.cmp(&a.0));
        v
    }

    fn canonical_name<'n>(&'n self, name: &'n str) -> &'n str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }
}

/// Split `alice+bob` or `alice.and.bob` into its authors.
pub fn split_authors(author: &str) -> impl Iterator<Item = &str> {
    author
        .split('+')
        .flat_map(|part| part.split(".and."))
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse::parse_log;
    use pretty_assertions::assert_eq;

    fn record(id: &str, author: Option<&str>, date: &str, adds: u64, deletes: u64) -> CommitRecord {
        CommitRecord {
            id: id.into(),
            author: author.map(str::to_string),
            date: date.into(),
            adds,
            deletes,
        }
    }

    fn collection(records: Vec<CommitRecord>) -> CommitCollection {
        records.into_iter().map(|r| (r.id.clone(), r)).collect()
    }

    fn agg(net: i64, adds: u64, deletes: u64) -> Aggregate {
        Aggregate { net, adds, deletes }
    }

    fn sample() -> CommitCollection {
        collection(vec![
            record("a", Some("alice"), "2023-01-05", 10, 2),
            record("b", Some("bob"), "2023-01-05", 1, 1),
            record("c", None, "2023-02-01", 4, 0),
            record("d", Some("alice+bob"), "2022-12-31", 0, 9),
        ])
    }

    #[test]
    fn end_to_end_two_commits() {
        let log = "\
commit aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa
Author: X <x@y.com>
Date:   2023-01-05

    first

 3 files changed, 10 insertions(+), 2 deletions(-)

commit bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb
Author: X <x@y.com>
Date:   2023-01-06

    second

 1 files changed, 0 insertions(+), 5 deletions(-)
";
        let commits = parse_log(log);
        assert_eq!(commits.len(), 2);

        let aliases = AuthorAliasMap::new();
        let r = Reducer::new(&commits, &aliases);
        assert_eq!(
            r.by_date(),
            vec![
                ("2023-01-06".to_string(), agg(-5, 0, 5)),
                ("2023-01-05".to_string(), agg(8, 10, 2)),
            ]
        );
        assert_eq!(r.by_person(), vec![("x".to_string(), agg(3, 10, 7))]);
    }

    #[test]
    fn by_date_is_newest_first_and_keeps_authorless_commits() {
        let commits = sample();
        let aliases = AuthorAliasMap::new();
        let keys: Vec<_> = Reducer::new(&commits, &aliases)
            .by_date()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["2023-02-01", "2023-01-05", "2022-12-31"]);
    }

    #[test]
    fn by_month_truncates_dates() {
        let commits = sample();
        let aliases = AuthorAliasMap::new();
        assert_eq!(
            Reducer::new(&commits, &aliases).by_month(),
            vec![
                ("2023-02".to_string(), agg(4, 4, 0)),
                ("2023-01".to_string(), agg(8, 11, 3)),
                ("2022-12".to_string(), agg(-9, 0, 9)),
            ]
        );
    }

    #[test]
    fn date_and_month_preserve_totals() {
        let commits = sample();
        let aliases = AuthorAliasMap::new();
        let r = Reducer::new(&commits, &aliases);
        let adds: u64 = commits.values().map(|c| c.adds).sum();
        let deletes: u64 = commits.values().map(|c| c.deletes).sum();
        for grouped in [r.by_date(), r.by_month()] {
            assert_eq!(grouped.iter().map(|(_, a)| a.adds).sum::<u64>(), adds);
            assert_eq!(grouped.iter().map(|(_, a)| a.deletes).sum::<u64>(), deletes);
        }
    }

    #[test]
    fn pair_commit_counts_fully_for_each_author() {
        let commits = collection(vec![record("p", Some("alice+bob"), "2023-01-01", 10, 2)]);
        let aliases = AuthorAliasMap::new();
        assert_eq!(
            Reducer::new(&commits, &aliases).by_person(),
            vec![
                ("alice".to_string(), agg(8, 10, 2)),
                ("bob".to_string(), agg(8, 10, 2)),
            ]
        );
    }

    #[test]
    fn aliases_fold_into_canonical_name() {
        let commits = collection(vec![
            record("1", Some("al"), "2023-01-01", 5, 0),
            record("2", Some("alice"), "2023-01-02", 3, 0),
        ]);
        let aliases = AuthorAliasMap::from([("al".to_string(), "alice".to_string())]);
        assert_eq!(
            Reducer::new(&commits, &aliases).by_person(),
            vec![("alice".to_string(), agg(8, 8, 0))]
        );
    }

    #[test]
    fn by_person_sorts_by_net_and_skips_authorless() {
        let commits = sample();
        let aliases = AuthorAliasMap::new();
        assert_eq!(
            Reducer::new(&commits, &aliases).by_person(),
            vec![
                ("alice".to_string(), agg(-1, 10, 11)),
                ("bob".to_string(), agg(-9, 1, 10)),
            ]
        );
    }

    #[test]
    fn groupings_are_repeatable_and_leave_input_alone() {
        let commits = sample();
        let before = commits.clone();
        let aliases = AuthorAliasMap::new();
        let r = Reducer::new(&commits, &aliases);
        assert_eq!(r.by_date(), r.by_date());
        assert_eq!(r.by_month(), r.by_month());
        assert_eq!(r.by_person(), r.by_person());
        assert_eq!(r.by_commit(), &before);
    }

    #[test]
    fn empty_collection_groups_to_nothing() {
        let commits = CommitCollection::new();
        let aliases = AuthorAliasMap::new();
        let r = Reducer::new(&commits, &aliases);
        assert!(r.by_date().is_empty());
        assert!(r.by_month().is_empty());
        assert!(r.by_person().is_empty());
    }

    #[test]
    fn sums_saturate_instead_of_wrapping() {
        let big = i64::MAX as u64;
        let commits = collection(vec![
            record("1", Some("x"), "2023-01-01", big, 0),
            record("2", Some("x"), "2023-01-01", big, 0),
            record("3", Some("x"), "2023-01-01", big, 0),
        ]);
        let aliases = AuthorAliasMap::new();
        assert_eq!(
            Reducer::new(&commits, &aliases).by_date(),
            vec![("2023-01-01".to_string(), agg(i64::MAX, u64::MAX, 0))]
        );
    }

    #[test]
    fn splits_on_plus_and_dot_and() {
        assert_eq!(split_authors("a+b.and.c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(split_authors("solo").collect::<Vec<_>>(), vec!["solo"]);
        assert_eq!(split_authors("a+").collect::<Vec<_>>(), vec!["a"]);
    }
}
