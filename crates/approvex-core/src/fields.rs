//! Built-in field tables for sorting and masking
//!
//! The tables mirror the event schema the harnesses capture: trace,
//! transaction, span, error, and metricset documents. Tables are parsed
//! into [`FieldPath`] values once and reused for every comparison.

use crate::path::FieldPath;
use std::sync::OnceLock;

/// Prioritized sort key expressions, highest priority first
///
/// Earlier entries decide the order before later entries are consulted;
/// documents equal under every entry fall back to the document ID.
pub const SORT_KEY_EXPRS: &[&str] = &[
    "processor.event",
    "trace.id",
    "transaction.id",
    "span.id",
    "error.id",
    "transaction.name",
    "span.destination.service.resource",
    "transaction.type",
    "span.type",
    "service.name",
    "service.environment",
    "message",
    "metricset.interval",
    "@timestamp",
];

/// Field expressions masked in every comparison
///
/// These carry values that legitimately differ between runs: version
/// stamps, ingest timestamps, and per-process observer identity.
pub const DEFAULT_DYNAMIC_EXPRS: &[&str] = &[
    "ecs.version",
    "event.ingested",
    "observer.ephemeral_id",
    "observer.hostname",
    "observer.id",
    "observer.version",
];

/// Sentinel written over every masked field value
pub const MASK_SENTINEL: &str = "dynamic";

static SORT_KEYS: OnceLock<Vec<FieldPath>> = OnceLock::new();
static DEFAULT_DYNAMIC_FIELDS: OnceLock<Vec<FieldPath>> = OnceLock::new();

/// Parsed sort key table, in priority order
pub fn sort_keys() -> &'static [FieldPath] {
    SORT_KEYS.get_or_init(|| parse_table(SORT_KEY_EXPRS))
}

/// Parsed default dynamic field table
pub fn default_dynamic_fields() -> &'static [FieldPath] {
    DEFAULT_DYNAMIC_FIELDS.get_or_init(|| parse_table(DEFAULT_DYNAMIC_EXPRS))
}

fn parse_table(exprs: &[&str]) -> Vec<FieldPath> {
    exprs
        .iter()
        .map(|expr| FieldPath::parse(expr).expect("built-in field table entry is valid"))
        .collect()
}
