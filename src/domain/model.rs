use serde::Serialize;
use std::collections::HashSet;

/// One `user` entry of the directory document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryRecord {
    pub number: String,
    pub status: String,
    pub name: String,
}

/// Extension numbers the operator asked about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    numbers: HashSet<String>,
}

impl QuerySet {
    /// Trims every candidate and drops the ones left empty.
    pub fn from_candidates<I, T>(candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let numbers = candidates
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        Self { numbers }
    }

    pub fn contains(&self, number: &str) -> bool {
        self.numbers.contains(number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Sorted matches together with the status they were selected by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub target_status: String,
    pub matches: Vec<DirectoryRecord>,
}
