//! ApproveX Core - Deterministic normalization and comparison engine
//!
//! This crate provides the pure comparison pipeline for approval testing
//! of captured event batches, including:
//! - Document model with harness-assigned identity
//! - Canonical batch ordering over a prioritized sort key table
//! - Presence-preserving masking of run-varying (dynamic) fields
//! - Canonical line-framed serialization with content digests
//! - Comparison against approved references resolved through injected
//!   collaborators
//!
//! Reference storage, received-file handling, and test-failure reporting
//! live in `approvex-store`; this crate performs no I/O of its own.

pub mod approve;
pub mod digest;
pub mod errors;
pub mod fields;
pub mod logging_facility;
pub mod mask;
pub mod model;
pub mod ordering;
pub mod path;
pub mod render;
pub mod sort;

// Re-export commonly used types
pub use approve::{
    approve_batch, compare_batch, Comparison, MismatchSink, NoopMismatchSink, ReferenceSource,
    Verdict,
};
pub use approvex_core_types::DocId;
pub use errors::{AxError, AxErrorKind, Result};
pub use mask::{effective_dynamic_fields, normalize_document};
pub use model::Document;
pub use path::FieldPath;
pub use sort::{canonical_sort, compare_documents};
