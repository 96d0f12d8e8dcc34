//! `queuewatch` library crate.
//!
//! Exposes configuration and the check runner for integration testing.
//! The binary entrypoint lives in `main.rs`.

pub mod check;
pub mod config;
