//! Event record type produced by the finite event source.

use serde::{Deserialize, Serialize};

/// Highest level an event can carry. Levels are always in `1..=MAX_LEVEL`.
pub const MAX_LEVEL: u8 = 20;

/// Minimum level counted as "high level" by the stream analyzer.
pub const HIGH_LEVEL_THRESHOLD: u8 = 10;

/// A single synthetic game event.
///
/// Records are derived deterministically from their `sequence_id` and are
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRecord {
    /// 1-based position of the event in its stream.
    pub sequence_id: u64,
    /// The player that produced the event.
    pub actor: String,
    /// Player level at the time of the event, in `1..=20`.
    pub level: u8,
    /// What the player did.
    pub action: String,
}

impl EventRecord {
    /// Returns `true` when `level >= HIGH_LEVEL_THRESHOLD`.
    pub fn is_high_level(&self) -> bool {
        self.level >= HIGH_LEVEL_THRESHOLD
    }
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Event {}: Player {} (level {}) {}",
            self.sequence_id, self.actor, self.level, self.action
        )
    }
}
