//! Queue name selection by include/exclude pattern.
//!
//! Both patterns are unanchored: a name is matched when the pattern occurs
//! anywhere in it. Anchor explicitly (`^task`, `-dlq$`) to match prefixes
//! or suffixes. POSIX ERE constructs, bracket classes such as
//! `[[:digit:]]` included, are accepted as-is.

use regex::Regex;

use crate::error::CoreError;

/// Include pattern used when none is configured: any non-empty name.
pub const DEFAULT_INCLUDE: &str = ".+";

/// Compiled include/exclude matchers, built once per run.
#[derive(Debug, Clone)]
pub struct QueueFilter {
    include: Regex,
    /// `None` when the exclude pattern is empty. An empty pattern would
    /// match every name, so it is treated as "exclude nothing" instead.
    exclude: Option<Regex>,
}

impl QueueFilter {
    /// Compile both patterns. An empty `exclude` disables exclusion.
    pub fn new(include: &str, exclude: &str) -> Result<Self, CoreError> {
        let include = Regex::new(include).map_err(|source| CoreError::InvalidPattern {
            field: "queue",
            source,
        })?;

        let exclude = if exclude.is_empty() {
            None
        } else {
            Some(
                Regex::new(exclude).map_err(|source| CoreError::InvalidPattern {
                    field: "exclude",
                    source,
                })?,
            )
        };

        Ok(Self { include, exclude })
    }

    /// Whether a queue with this name takes part in the check.
    ///
    /// Exclusion wins over inclusion.
    pub fn admits(&self, name: &str) -> bool {
        if self.is_excluded(name) {
            return false;
        }
        self.include.is_match(name)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.as_ref().is_some_and(|re| re.is_match(name))
    }

    pub fn include_pattern(&self) -> &str {
        self.include.as_str()
    }

    pub fn exclude_pattern(&self) -> Option<&str> {
        self.exclude.as_ref().map(Regex::as_str)
    }
}

impl Default for QueueFilter {
    fn default() -> Self {
        Self {
            include: Regex::new(DEFAULT_INCLUDE).expect("valid regex"),
            exclude: None,
        }
    }
}
