pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpDirectorySource;
pub use config::{OutputFormat, StatusConfig};
pub use core::checker::StatusChecker;
pub use utils::error::{CheckError, Result};
