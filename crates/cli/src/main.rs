//! `queuewatch` -- broker queue depth check for monitoring daemons.
//!
//! Prints the report on stdout and exits with the monitoring status:
//!
//! | Code | Meaning                                           |
//! |------|---------------------------------------------------|
//! | `0`  | OK                                                |
//! | `1`  | WARNING: a queue reached the warning threshold    |
//! | `2`  | CRITICAL: a queue reached the error threshold     |
//! | `3`  | The check could not run (config, network, decode) |
//!
//! Logs go to stderr; set `RUST_LOG=queuewatch=debug` to trace requests.

use std::process::ExitCode;

use clap::error::ErrorKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use queuewatch::check::{self, EXIT_FATAL};
use queuewatch::config::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "queuewatch=warn,queuewatch_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            print!("{}", e.render());
            return ExitCode::from(EXIT_FATAL);
        }
    };

    match check::run(cli).await {
        Ok(evaluation) => {
            print!("{}", evaluation.report);
            ExitCode::from(evaluation.severity.exit_code())
        }
        Err(e) => {
            tracing::error!(error = %e, "Check failed");
            println!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
