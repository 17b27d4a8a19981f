//! Identity types for documents under comparison
//!
//! Document identity is assigned by the calling harness, not generated
//! here. The identifier participates in the canonical ordering as the
//! final tie-break, so it carries a total order of its own.

use serde::{Deserialize, Serialize};

/// Unique identifier for a single document within a batch
///
/// Compares byte-wise on the underlying string, which makes the
/// canonical ordering stable for documents that agree on every
/// sort field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(String);

impl DocId {
    /// Create an identifier from harness-assigned text
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
