//! Queue depth evaluation for broker health checks.
//!
//! Pure domain logic only: queue records as reported by the management
//! API, the three-level [`Severity`](severity::Severity) ordering, name
//! filtering, and the evaluator that folds a queue snapshot into a single
//! status plus report. Nothing in this crate performs I/O.

pub mod error;
pub mod evaluator;
pub mod filter;
pub mod queue;
pub mod severity;
