use check_status::config::{API_URL_ENV, TARGET_STATUS_ENV};
use check_status::core::{input::collect_numbers, report::render};
use check_status::utils::logger;
use check_status::{CliConfig, HttpDirectorySource, Result, StatusChecker, StatusConfig};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        // --help prints to stdout and exits 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Check failed: {} (Category: {:?})", e, e.category());
            eprintln!("{}", e.user_friendly_message());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: CliConfig) -> Result<()> {
    let api_url_env = std::env::var(API_URL_ENV).ok();
    let status_env = std::env::var(TARGET_STATUS_ENV).ok();
    let config = StatusConfig::resolve(
        cli.api_url.as_deref(),
        api_url_env.as_deref(),
        cli.status.as_deref(),
        status_env.as_deref(),
    )?;

    let numbers = collect_numbers(&cli.numbers, std::io::stdin().lock())?;

    let source = HttpDirectorySource::new(&config)?;
    let checker = StatusChecker::new(source, &config);
    let report = checker.run(&numbers).await?;

    let mut stdout = std::io::stdout().lock();
    render(&report, cli.format, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
