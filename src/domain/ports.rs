use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the raw directory document.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}
