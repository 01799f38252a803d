use std::time::SystemTime;

use uuid::Uuid;

use crate::{EnvelopeId, ParticipantId};

/// Metadata attached to every envelope.
///
/// - `id`: unique identifier for the envelope.
/// - `timestamp`: creation time in nanoseconds since Unix epoch (truncated to `u64`).
/// - `source`: participant that raised the signal. Absent only on null envelopes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meta {
    id: EnvelopeId,
    timestamp: u64,
    source: Option<ParticipantId>,
}

impl Meta {
    pub fn new(source: Option<ParticipantId>) -> Self {
        Self {
            id: Uuid::new_v4().as_u128(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default(),
            source,
        }
    }

    /// Unique identifier for this envelope.
    pub fn id(&self) -> EnvelopeId {
        self.id
    }

    /// Timestamp in nanoseconds since Unix epoch (u64 truncation).
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn source(&self) -> Option<&ParticipantId> {
        self.source.as_ref()
    }
}
