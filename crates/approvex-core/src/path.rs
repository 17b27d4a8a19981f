//! Field path expressions for addressing values inside documents
//!
//! Paths use the dot-separated notation shared by the sort key table and
//! the dynamic field defaults, e.g. `span.destination.service.resource`.
//! Each segment names an object key; numeric segments also index into
//! arrays. Segments cannot contain literal dots.

use crate::errors::{PathError, Result};
use serde_json::Value;

/// A validated dot-separated field path
///
/// Parsing normalizes the expression into an RFC 6901 JSON Pointer once,
/// so repeated resolution during sorting does not re-tokenize the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    expr: String,
    pointer: String,
}

impl FieldPath {
    /// Parse a dot-separated path expression
    ///
    /// Fails with `ERR_INVALID_PATH` when the expression is empty or
    /// contains an empty segment (leading, trailing, or doubled dot).
    pub fn parse(expr: &str) -> Result<Self> {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return Err(PathError::Empty.into());
        }

        let mut pointer = String::with_capacity(trimmed.len() + 1);
        for (index, segment) in trimmed.split('.').enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    expr: trimmed.to_string(),
                    index,
                }
                .into());
            }
            // RFC 6901 escaping: '~' -> '~0', '/' -> '~1'
            pointer.push('/');
            pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        }

        Ok(Self {
            expr: trimmed.to_string(),
            pointer,
        })
    }

    /// Get the original dot-separated expression
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Get the equivalent JSON Pointer
    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    /// Resolve the path against a JSON tree
    ///
    /// Returns `None` when any segment is absent, which the canonical
    /// ordering treats as lower than every present value.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        root.pointer(&self.pointer)
    }

    /// Resolve the path against a mutable JSON tree
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        root.pointer_mut(&self.pointer)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}
