//! Severity evaluator: pure logic, no I/O.
//!
//! Folds a queue snapshot into one [`Evaluation`]. Queues rejected by the
//! [`QueueFilter`] are skipped entirely; every admitted queue is classified
//! against the [`Thresholds`], and the non-OK ones are listed in the report
//! in snapshot order.

use crate::filter::QueueFilter;
use crate::queue::QueueRecord;
use crate::severity::Severity;

/// Report emitted when no admitted queue is above the warning threshold.
pub const OK_REPORT: &str = "OK\n";

/// Default warning threshold (ready messages).
pub const DEFAULT_WARNING_THRESHOLD: u64 = 2;
/// Default error threshold (ready messages).
pub const DEFAULT_ERROR_THRESHOLD: u64 = 3;

/// Ready-message thresholds, both inclusive.
///
/// `error` is expected to be at least `warning`; this is not enforced. With
/// an inverted pair every queue at or above `error` is CRITICAL and the
/// WARNING band is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: u64,
    pub error: u64,
}

impl Thresholds {
    pub fn new(warning: u64, error: u64) -> Self {
        Self { warning, error }
    }

    /// Severity of a single ready-message count.
    pub fn classify(&self, messages_ready: u64) -> Severity {
        if messages_ready >= self.error {
            Severity::Critical
        } else if messages_ready >= self.warning {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_WARNING_THRESHOLD, DEFAULT_ERROR_THRESHOLD)
    }
}

/// Outcome of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub severity: Severity,
    /// One line per non-OK queue, or exactly [`OK_REPORT`].
    pub report: String,
}

/// Evaluate a queue snapshot.
pub fn evaluate(
    queues: &[QueueRecord],
    filter: &QueueFilter,
    thresholds: Thresholds,
) -> Evaluation {
    let mut severity = Severity::Ok;
    let mut report = String::new();

    for queue in queues.iter().filter(|q| filter.admits(&q.name)) {
        let level = thresholds.classify(queue.messages_ready);
        if level == Severity::Ok {
            continue;
        }
        report.push_str(&format!("{queue}\n"));
        severity = severity.max(level);
    }

    if report.is_empty() {
        report.push_str(OK_REPORT);
    }

    Evaluation { severity, report }
}
