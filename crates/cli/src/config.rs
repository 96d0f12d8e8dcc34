//! Command-line and environment configuration.
//!
//! Every flag can also be supplied through a `QUEUEWATCH_*` environment
//! variable (or a `.env` file loaded at startup). Flags win over the
//! environment.
//!
//! Long flags are accepted with one dash as well as two (`-warn 5`,
//! `-host=http://broker:15672`), so command lines written for older
//! checks keep working.

use std::ffi::OsString;

use clap::Parser;

use queuewatch_client::Credentials;
use queuewatch_core::error::CoreError;
use queuewatch_core::evaluator::{Thresholds, DEFAULT_ERROR_THRESHOLD, DEFAULT_WARNING_THRESHOLD};
use queuewatch_core::filter::{QueueFilter, DEFAULT_INCLUDE};

/// Default management API root.
pub const DEFAULT_HOST: &str = "http://localhost:15672";
/// Default virtual host.
pub const DEFAULT_VHOST: &str = "/";
/// Default Basic-auth account.
pub const DEFAULT_USER: &str = "guest";

/// Long flags that may also be spelled with a single dash.
const LONG_FLAGS: &[&str] = &[
    "host", "vhost", "queue", "exclude", "warn", "error", "user", "password", "help", "version",
];

/// Check queue depths on a broker management API and report a
/// monitoring status (0 OK, 1 WARNING, 2 CRITICAL, 3 failure).
#[derive(Debug, Clone, Parser)]
#[command(name = "queuewatch", version)]
pub struct Cli {
    /// Management API root URL
    #[arg(long, env = "QUEUEWATCH_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Virtual host
    #[arg(long, env = "QUEUEWATCH_VHOST", default_value = DEFAULT_VHOST)]
    pub vhost: String,

    /// Pattern selecting the queues to check
    #[arg(long = "queue", env = "QUEUEWATCH_QUEUE", default_value = DEFAULT_INCLUDE)]
    pub queue_pattern: String,

    /// Pattern excluding queues from the check (empty excludes nothing)
    #[arg(long = "exclude", env = "QUEUEWATCH_EXCLUDE", default_value = "")]
    pub exclude_pattern: String,

    /// Ready-message count at which a queue is WARNING
    #[arg(long, env = "QUEUEWATCH_WARN", default_value_t = DEFAULT_WARNING_THRESHOLD)]
    pub warn: u64,

    /// Ready-message count at which a queue is CRITICAL
    #[arg(long, env = "QUEUEWATCH_ERROR", default_value_t = DEFAULT_ERROR_THRESHOLD)]
    pub error: u64,

    /// Management API username
    #[arg(long, env = "QUEUEWATCH_USER", default_value = DEFAULT_USER)]
    pub user: String,

    /// Management API password
    #[arg(long, env = "QUEUEWATCH_PASSWORD", default_value = DEFAULT_USER, hide_env_values = true)]
    pub password: String,
}

/// Validated settings for one check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub host: String,
    pub vhost: String,
    pub credentials: Credentials,
    pub filter: QueueFilter,
    pub thresholds: Thresholds,
}

impl Cli {
    /// Parse an argument list, accepting single-dash long flags.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Compile the patterns and assemble a [`CheckConfig`].
    pub fn into_config(self) -> Result<CheckConfig, CoreError> {
        let filter = QueueFilter::new(&self.queue_pattern, &self.exclude_pattern)?;

        Ok(CheckConfig {
            host: self.host,
            vhost: self.vhost,
            credentials: Credentials::new(self.user, self.password),
            filter,
            thresholds: Thresholds::new(self.warn, self.error),
        })
    }
}

/// Rewrite `-name` / `-name=value` to `--name...` for known long flags.
///
/// The program name is kept as-is, and nothing after a `--` terminator is
/// touched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut flags_ended = false;

    for (idx, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if idx == 0 || flags_ended {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            flags_ended = true;
            normalized.push(arg);
            continue;
        }
        match arg.to_str().and_then(single_dash_long_flag) {
            Some(rewritten) => normalized.push(rewritten.into()),
            None => normalized.push(arg),
        }
    }

    normalized
}

fn single_dash_long_flag(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name).then(|| format!("-{arg}"))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "queuewatch",
            "--host",
            "http://broker:15672",
            "--vhost",
            "prod",
            "--queue",
            "^task",
            "--exclude",
            "dlq",
            "--warn",
            "100",
            "--error",
            "1000",
            "--user",
            "monitor",
            "--password",
            "secret",
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.host, "http://broker:15672");
        assert_eq!(config.vhost, "prod");
        assert_eq!(config.filter.include_pattern(), "^task");
        assert_eq!(config.filter.exclude_pattern(), Some("dlq"));
        assert_eq!(config.thresholds, Thresholds::new(100, 1000));
        assert_eq!(config.credentials.username, "monitor");
        assert_eq!(config.credentials.password, "secret");
    }

    #[test]
    fn single_dash_long_flags_are_rewritten() {
        let args = normalize_args([
            "queuewatch",
            "-host",
            "http://b:15672",
            "-warn=5",
            "-h",
            "--user",
            "u",
        ]);
        assert_eq!(
            args,
            ["queuewatch", "--host", "http://b:15672", "--warn=5", "-h", "--user", "u"]
                .map(OsString::from)
        );
    }

    #[test]
    fn unknown_single_dash_args_are_untouched() {
        let args = normalize_args(["queuewatch", "-hosts", "-1", "-"]);
        assert_eq!(args, ["queuewatch", "-hosts", "-1", "-"].map(OsString::from));
    }

    #[test]
    fn nothing_after_terminator_is_rewritten() {
        let args = normalize_args(["queuewatch", "-warn", "4", "--", "-error"]);
        assert_eq!(args, ["queuewatch", "--warn", "4", "--", "-error"].map(OsString::from));
    }

    #[test]
    fn single_dash_command_line_parses() {
        let cli = Cli::try_parse_args([
            "queuewatch",
            "-host",
            "http://broker:15672",
            "-vhost",
            "prod",
            "-queue",
            "^task",
            "-exclude=dlq",
            "-warn",
            "10",
            "-error",
            "20",
            "-user",
            "monitor",
            "-password",
            "secret",
        ])
        .unwrap();

        assert_eq!(cli.host, "http://broker:15672");
        assert_eq!(cli.vhost, "prod");
        assert_eq!(cli.queue_pattern, "^task");
        assert_eq!(cli.exclude_pattern, "dlq");
        assert_eq!((cli.warn, cli.error), (10, 20));
        assert_eq!(cli.user, "monitor");
        assert_eq!(cli.password, "secret");
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let result = Cli::try_parse_from(["queuewatch", "--warn=-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let cli = Cli::try_parse_from(["queuewatch", "--queue", "(oops"]).unwrap();
        assert_matches!(
            cli.into_config(),
            Err(CoreError::InvalidPattern { field: "queue", .. })
        );
    }
}
