//! Dynamic field masking
//!
//! Fields whose values legitimately differ between runs are overwritten
//! with a fixed sentinel before comparison. Masking preserves presence:
//! a masked field still proves the capture produced it, while its
//! run-specific value no longer participates in the comparison.

use serde_json::Value;

use crate::fields::{self, MASK_SENTINEL};
use crate::model::Document;
use crate::path::FieldPath;

/// Union of the built-in dynamic fields and harness extras
///
/// Built-in entries come first, then extras in caller order, with
/// duplicates dropped.
pub fn effective_dynamic_fields(extra: &[FieldPath]) -> Vec<FieldPath> {
    let mut merged: Vec<FieldPath> = fields::default_dynamic_fields().to_vec();
    for path in extra {
        if !merged.contains(path) {
            merged.push(path.clone());
        }
    }
    merged
}

/// Produce a copy of the document with every dynamic field masked
///
/// A present field keeps its key with the value replaced by the
/// sentinel, whatever type the value had. An absent field stays absent.
/// No other part of the document is touched.
pub fn normalize_document(doc: &Document, dynamic: &[FieldPath]) -> Document {
    let mut body = doc.body.clone();
    for path in dynamic {
        if let Some(slot) = path.resolve_mut(&mut body) {
            *slot = Value::String(MASK_SENTINEL.to_string());
        }
    }
    Document::new(doc.id.clone(), body)
}
