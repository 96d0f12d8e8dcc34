//! Broker management API client.
//!
//! Fetches the queue listing for one virtual host and decodes it into
//! [`QueueRecord`](queuewatch_core::queue::QueueRecord)s for the evaluator.

pub mod api;

pub use api::{queues_url, ApiError, Credentials, ManagementApi};
