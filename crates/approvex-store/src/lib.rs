//! ApproveX Store - Reference persistence and harness wiring
//!
//! Filesystem-backed storage for approved references and received
//! files. Provides:
//! - `FsReferenceStore`: `<name>.approved.json` / `<name>.received.json`
//!   files under an approvals root, written atomically
//! - `report`: human-readable mismatch rendering and a panicking sink
//! - `harness::approve_events`: environment-configured entry point with
//!   approval-test semantics for use inside tests

pub mod atomic;
pub mod errors;
pub mod fs_store;
pub mod harness;
pub mod report;

pub use errors::Result;
pub use fs_store::FsReferenceStore;
pub use harness::{approve_events, approvals_root, update_mode, FsMismatchSink};
pub use harness::{ENV_APPROVALS_DIR, ENV_UPDATE};
pub use report::{render_line_diff, render_mismatch_summary, PanicSink};
