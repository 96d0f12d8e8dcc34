/// Configuration errors raised before a check can run.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid {field} pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}
