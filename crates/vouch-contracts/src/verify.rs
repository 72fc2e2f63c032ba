//! Confirmation types produced by a successful verification pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for one verification pass.
///
/// Every call to `VerificationEngine::verify` gets a fresh id, so two passes
/// over the same entity can be told apart in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassId(pub uuid::Uuid);

impl PassId {
    /// Create a new, unique pass id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for PassId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The confirmation value returned when every rule of an entity passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verified {
    /// The pass that produced this confirmation.
    pub pass_id: PassId,
    /// Display name of the verified entity.
    pub entity: String,
    /// Number of rules evaluated. Zero for an entity with no rules.
    pub rules_checked: usize,
    /// When the pass completed.
    pub verified_at: DateTime<Utc>,
}

impl Verified {
    /// Stamp a confirmation for `entity` with a fresh pass id and the current time.
    pub fn new(pass_id: PassId, entity: impl Into<String>, rules_checked: usize) -> Self {
        Self {
            pass_id,
            entity: entity.into(),
            rules_checked,
            verified_at: Utc::now(),
        }
    }
}
