use crate::config::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "check_status")]
#[command(about = "Report which internal extensions are currently in the office")]
#[command(
    after_help = "With no NUMBERS, numbers are read from stdin separated by whitespace or commas.\n\
                  Example: echo '101 102,103' | check_status"
)]
pub struct CliConfig {
    /// Extension numbers to check
    pub numbers: Vec<String>,

    #[arg(long, help = "Directory endpoint (overrides API_URL)")]
    pub api_url: Option<String>,

    #[arg(long, help = "Status value that counts as in the office (overrides TARGET_STATUS)")]
    pub status: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_numbers() {
        let config = CliConfig::parse_from(["check_status", "101", "102"]);
        assert_eq!(config.numbers, vec!["101", "102"]);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_options() {
        let config = CliConfig::parse_from([
            "check_status",
            "--api-url",
            "https://dir.example.com/users",
            "--status",
            "In Office",
            "--format",
            "json",
            "-v",
        ]);
        assert!(config.numbers.is_empty());
        assert_eq!(config.api_url.as_deref(), Some("https://dir.example.com/users"));
        assert_eq!(config.status.as_deref(), Some("In Office"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
    }
}
