use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use triplog_cli::commands::report;
use triplog_cli::error::AppError;
use triplog_cli::{Cli, Config};

fn run(cli: &Cli) -> Result<(), AppError> {
    let config =
        Config::load_from(cli.config.as_deref()).map_err(|err| AppError::Config(Box::new(err)))?;
    tracing::debug!(?config, "loaded configuration");

    let input = cli.input.as_deref().ok_or(AppError::MissingInputPath)?;

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    report::run(&mut writer, &config, input, cli.json)?;
    writer.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(err.exit_code())
        }
    }
}
