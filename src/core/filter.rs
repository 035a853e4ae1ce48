use crate::domain::model::{DirectoryRecord, QuerySet};

/// Keeps records whose number was requested and whose status equals the
/// target exactly. Document order is preserved.
pub fn find_matches<I>(records: I, numbers: &QuerySet, target_status: &str) -> Vec<DirectoryRecord>
where
    I: IntoIterator<Item = DirectoryRecord>,
{
    records
        .into_iter()
        .filter(|record| numbers.contains(record.number.trim()))
        .filter(|record| record.status.trim() == target_status)
        .collect()
}

/// Stable lexicographic sort by number.
pub fn sort_matches(matches: &mut [DirectoryRecord]) {
    matches.sort_by(|a, b| a.number.cmp(&b.number));
}
