//! Single check run: fetch the queue snapshot, then evaluate it.

use queuewatch_client::{ApiError, ManagementApi};
use queuewatch_core::error::CoreError;
use queuewatch_core::evaluator::{self, Evaluation};

use crate::config::{CheckConfig, Cli};

/// Exit code for any failure that prevented a check from completing.
pub const EXIT_FATAL: u8 = 3;

/// Errors that abort a check run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Invalid configuration (bad pattern or arguments).
    #[error(transparent)]
    Config(#[from] CoreError),

    /// Fetching or decoding the queue list failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CheckError {
    /// Every abort maps to the same fatal exit code; severities 0-2 are
    /// reserved for completed checks.
    pub fn exit_code(&self) -> u8 {
        EXIT_FATAL
    }
}

/// Validate parsed arguments, then run the check they describe.
///
/// Invalid patterns are rejected here, before any request is sent.
pub async fn run(cli: Cli) -> Result<Evaluation, CheckError> {
    let config = cli.into_config()?;

    tracing::debug!(
        host = %config.host,
        vhost = %config.vhost,
        include = config.filter.include_pattern(),
        exclude = config.filter.exclude_pattern().unwrap_or(""),
        warn = config.thresholds.warning,
        error = config.thresholds.error,
        "Loaded check configuration",
    );

    run_check(&config).await
}

/// Fetch the configured vhost's queues and evaluate them.
pub async fn run_check(config: &CheckConfig) -> Result<Evaluation, CheckError> {
    let api = ManagementApi::new(config.host.clone(), config.credentials.clone());
    let queues = api.list_queues(&config.vhost).await?;

    let evaluation = evaluator::evaluate(&queues, &config.filter, config.thresholds);
    tracing::info!(
        vhost = %config.vhost,
        queues = queues.len(),
        severity = %evaluation.severity,
        "Check complete",
    );

    Ok(evaluation)
}
