use crate::config::StatusConfig;
use crate::core::filter::{find_matches, sort_matches};
use crate::core::parser::parse_directory;
use crate::domain::model::{QuerySet, StatusReport};
use crate::domain::ports::DirectorySource;
use crate::utils::error::Result;

/// Runs fetch, parse, filter and sort in order. The first failing stage ends
/// the run.
pub struct StatusChecker<S: DirectorySource> {
    source: S,
    target_status: String,
}

impl<S: DirectorySource> StatusChecker<S> {
    pub fn new(source: S, config: &StatusConfig) -> Self {
        Self {
            source,
            target_status: config.target_status.clone(),
        }
    }

    pub async fn run(&self, numbers: &QuerySet) -> Result<StatusReport> {
        let body = self.source.fetch().await?;

        let records = parse_directory(&body)?;
        tracing::debug!("Directory lists {} users", records.len());

        let mut matches = find_matches(records, numbers, &self.target_status);
        sort_matches(&mut matches);
        tracing::debug!(
            "{} of {} requested numbers have status '{}'",
            matches.len(),
            numbers.len(),
            self.target_status
        );

        Ok(StatusReport {
            target_status: self.target_status.clone(),
            matches,
        })
    }
}
