//! Request identifiers.
//!
//! Every dispatched HTTP call gets a fresh [`RequestId`]. It is recorded on the
//! request's tracing span so all events emitted for one call can be correlated,
//! including when many calls run concurrently on the same client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a single analysis request sent to the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generates a new random request identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a [`RequestId`] from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
