//! Core types shared across ApproveX facilities
//!
//! This crate provides foundational types used by both the comparison
//! engine and the logging facility:
//!
//! - **Identity types**: DocId, the per-document tie-break identity
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::DocId;
