use std::collections::HashSet;
use std::str::FromStr;

use karyakarta_db::Record;
use uuid::Uuid;

/// A query-string filter value. Values that do not parse (an unknown
/// category, `verified=maybe`) select nothing rather than failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    Any,
    Only(T),
    Unmatchable,
}

impl<T: FromStr> Filter<T> {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Filter::Any,
            Some(raw) => raw.parse().map_or(Filter::Unmatchable, Filter::Only),
        }
    }
}

impl<T> Filter<T> {
    /// Keeps only the records also present in `select(value)`.
    pub fn narrow<R, F>(self, records: &mut Vec<R>, select: F)
    where
        R: Record,
        F: FnOnce(T) -> Vec<R>,
    {
        match self {
            Filter::Any => {}
            Filter::Only(value) => retain_ids(records, &select(value)),
            Filter::Unmatchable => records.clear(),
        }
    }
}

/// Order-preserving intersection by identity.
pub fn retain_ids<R: Record>(records: &mut Vec<R>, allowed: &[R]) {
    let ids: HashSet<Uuid> = allowed.iter().map(Record::id).collect();
    records.retain(|r| ids.contains(&r.id()));
}

/// Removes every record present in `excluded`.
pub fn drop_ids<R: Record>(records: &mut Vec<R>, excluded: &[R]) {
    let ids: HashSet<Uuid> = excluded.iter().map(Record::id).collect();
    records.retain(|r| !ids.contains(&r.id()));
}

/// Narrows by a boolean flag whose `true` side is `matching`.
pub fn narrow_flag<R: Record>(records: &mut Vec<R>, flag: Filter<bool>, matching: impl FnOnce() -> Vec<R>) {
    match flag {
        Filter::Any => {}
        Filter::Only(true) => retain_ids(records, &matching()),
        Filter::Only(false) => drop_ids(records, &matching()),
        Filter::Unmatchable => records.clear(),
    }
}
