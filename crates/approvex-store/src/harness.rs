//! Approval harness entry point
//!
//! Wires the canonical comparison pipeline to a filesystem store
//! configured through environment variables. A divergent batch panics
//! with a rendered report after writing a received file, unless update
//! mode is on, in which case the approved reference is rewritten in
//! place.

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::fs_store::FsReferenceStore;
use crate::report::render_mismatch_summary;
use approvex_core::{approve_batch, Document, FieldPath, MismatchSink};
use approvex_core::{log_op_end, log_op_error, log_op_start};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Instant;

/// Overrides the approvals root directory
pub const ENV_APPROVALS_DIR: &str = "APPROVEX_APPROVALS_DIR";

/// Enables update mode when set to `1` or `true`
pub const ENV_UPDATE: &str = "APPROVEX_UPDATE";

const DEFAULT_APPROVALS_DIR: &str = "approvals";

/// Approvals root directory for this process
pub fn approvals_root() -> PathBuf {
    root_from(env::var_os(ENV_APPROVALS_DIR))
}

fn root_from(value: Option<OsString>) -> PathBuf {
    match value {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_APPROVALS_DIR),
    }
}

/// Whether divergence should rewrite references instead of failing
pub fn update_mode() -> bool {
    update_from(env::var(ENV_UPDATE).ok().as_deref())
}

fn update_from(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1") | Some("true"))
}

/// Sink with approval-test semantics over a filesystem store.
///
/// In update mode a mismatch rewrites the approved reference. Otherwise
/// the received output is written next to the reference and the report
/// is raised as a panic, failing the surrounding test.
pub struct FsMismatchSink<'a> {
    store: &'a FsReferenceStore,
    update: bool,
}

impl<'a> FsMismatchSink<'a> {
    pub fn new(store: &'a FsReferenceStore, update: bool) -> Self {
        Self { store, update }
    }
}

impl MismatchSink for FsMismatchSink<'_> {
    fn report_mismatch(&self, name: &str, got: &[u8], want: &[u8]) {
        if self.update {
            match self.store.write_approved(name, got) {
                Ok(path) => {
                    tracing::info!(
                        component = module_path!(),
                        name,
                        path = %path.display(),
                        update = true,
                        "approved reference updated"
                    );
                }
                Err(e) => {
                    panic!("failed to update approved reference for '{}': {}", name, e)
                }
            }
            return;
        }

        let received = match self.store.write_received(name, got) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::error!(
                    component = module_path!(),
                    name,
                    error = %e,
                    "received file not written"
                );
                None
            }
        };

        panic!(
            "{}",
            render_mismatch_summary(name, got, want, received.as_deref())
        );
    }
}

/// Compare a batch against its approved reference on disk.
///
/// The approvals root comes from [`ENV_APPROVALS_DIR`] and update mode
/// from [`ENV_UPDATE`]. On a mismatch outside update mode this panics
/// with a rendered report, so tests fail at the call site. A stale
/// received file from an earlier run is removed once the comparison
/// passes.
///
/// # Errors
///
/// Returns `ERR_IO` when the store cannot be read, `ERR_INVALID_INPUT`
/// for names that escape the approvals root, and propagates
/// serialization failures from rendering.
pub fn approve_events(name: &str, batch: Vec<Document>, extra_dynamic: &[FieldPath]) -> Result<()> {
    log_op_start!("approve_events", name, doc_count = batch.len());
    let start = Instant::now();

    let update = update_mode();
    let store = FsReferenceStore::new(approvals_root());
    let sink = FsMismatchSink::new(&store, update);

    let verdict = approve_batch(name, batch, extra_dynamic, &store, &sink).map_err(|e| {
        log_op_error!(
            "approve_events",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            name
        );
        e
    })?;

    // Reaching this point means the batch matched, or update mode just
    // rewrote the reference; a leftover received file is stale either way.
    if let Err(e) = store.remove_received(name) {
        tracing::warn!(
            component = module_path!(),
            name,
            error = %e,
            "stale received file not removed"
        );
    }

    log_op_end!(
        "approve_events",
        duration_ms = start.elapsed().as_millis() as u64,
        name,
        update,
        verdict = ?verdict
    );

    Ok(())
}
