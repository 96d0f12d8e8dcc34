//! Queue records decoded from the management API.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// One queue as reported by the broker's `/api/queues/<vhost>` listing.
///
/// Only the fields the check needs are decoded; everything else in the
/// broker's payload is ignored. Brokers omit or null out the counters for
/// queues whose statistics have not been collected yet; absent and `null`
/// fields decode as zero (or an empty name).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages_ready: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consumers: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl QueueRecord {
    pub fn new(name: impl Into<String>, messages_ready: u64, consumers: u64) -> Self {
        Self {
            name: name.into(),
            messages_ready,
            consumers,
        }
    }
}

/// Report line format. Existing monitoring setups grep for these labels,
/// so the casing is fixed.
impl fmt::Display for QueueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Name:{} Messages_Ready:{} Consumers:{}}}",
            self.name, self.messages_ready, self.consumers
        )
    }
}
