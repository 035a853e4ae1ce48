pub mod checker;
pub mod filter;
pub mod input;
pub mod parser;
pub mod report;

pub use crate::domain::model::{DirectoryRecord, QuerySet, StatusReport};
pub use crate::domain::ports::DirectorySource;
pub use crate::utils::error::Result;
