use approvex_core_types::DocId;
use serde_json::Value;

use crate::errors::{AxError, AxErrorKind, Result};
use crate::path::FieldPath;

/// A single captured event document under comparison
///
/// Each document:
/// - Carries a harness-assigned identity used as the final ordering tie-break
/// - Holds its event payload as an arbitrary JSON tree
/// - Is treated as immutable; normalization produces a new document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Unique identity within the batch
    pub id: DocId,

    /// The JSON tree carrying the event payload
    pub body: Value,
}

impl Document {
    /// Create a document from harness-captured parts
    pub fn new(id: impl Into<DocId>, body: Value) -> Self {
        Self {
            id: id.into(),
            body,
        }
    }

    /// Parse a document body from raw JSON bytes
    ///
    /// Fails with `ERR_INVALID_DOCUMENT` when the bytes are not valid JSON.
    pub fn from_json_bytes(id: impl Into<DocId>, bytes: &[u8]) -> Result<Self> {
        let id = id.into();
        let body: Value = serde_json::from_slice(bytes).map_err(|err| {
            AxError::new(AxErrorKind::InvalidDocument)
                .with_op("parse_document")
                .with_doc_id(id.as_str())
                .with_message(err.to_string())
        })?;
        Ok(Self { id, body })
    }

    /// Resolve a field path against the document body
    pub fn field(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve(&self.body)
    }
}
