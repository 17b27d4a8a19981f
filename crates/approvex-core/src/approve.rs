//! Batch comparison against approved references.
//!
//! The core entry points are [`compare_batch`], which reduces a batch to
//! its canonical comparable form, and [`approve_batch`], which resolves
//! the approved reference through an injected [`ReferenceSource`] and
//! hands any divergence to an injected [`MismatchSink`]. Reference
//! storage and failure reporting live behind those traits so this crate
//! stays free of filesystem and test-framework concerns.

use std::time::Instant;

use crate::digest::{content_digest, short_digest};
use crate::errors::Result;
use crate::mask::{effective_dynamic_fields, normalize_document};
use crate::model::Document;
use crate::path::FieldPath;
use crate::render::render_batch;
use crate::sort::canonical_sort;
use crate::{log_op_end, log_op_error, log_op_start};

/// Source of approved reference content, injected by the harness layer
#[allow(clippy::result_large_err)]
pub trait ReferenceSource: Send + Sync {
    /// Load the approved reference registered under `name`.
    ///
    /// Returns `Ok(None)` when no reference has been registered yet;
    /// that is an expected state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ERR_IO` when the backing store cannot be read, or
    /// `ERR_REFERENCE_CORRUPT` when content exists but cannot be
    /// interpreted as canonical text.
    fn load_reference(&self, name: &str) -> Result<Option<Vec<u8>>>;
}

/// Consumer of mismatch reports, injected by the harness layer
pub trait MismatchSink: Send + Sync {
    /// Report a comparison that did not match its reference.
    ///
    /// `got` is the canonical text produced by this run; `want` is the
    /// reference text, empty when no reference exists yet.
    fn report_mismatch(&self, name: &str, got: &[u8], want: &[u8]);
}

/// Sink that drops mismatch reports.
/// Used when callers only need the returned verdict.
pub struct NoopMismatchSink;

impl MismatchSink for NoopMismatchSink {
    fn report_mismatch(&self, _: &str, _: &[u8], _: &[u8]) {}
}

/// Outcome of comparing canonical content against a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Canonical content equals the reference byte-for-byte
    Match,
    /// Content differs from the reference, or no reference exists yet
    Mismatch,
}

/// Canonical form of a batch, ready for comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Comparison name, scoping reference resolution
    pub name: String,

    /// Canonical line-framed text
    pub canonical: Vec<u8>,

    /// SHA256 digest of the canonical text
    pub digest: String,

    /// Number of documents in the batch
    pub doc_count: usize,
}

/// Reduce a batch to its canonical comparable form
///
/// Sorting happens before masking, on the raw captured values, so a
/// sort key that is also listed as dynamic still orders documents by
/// what the capture produced. The canonical bytes are independent of
/// submission order.
///
/// # Errors
///
/// Returns `ERR_SERIALIZATION` if the normalized batch cannot be
/// rendered.
pub fn compare_batch(
    name: &str,
    batch: Vec<Document>,
    extra_dynamic: &[FieldPath],
) -> Result<Comparison> {
    log_op_start!("compare_batch", name, doc_count = batch.len());
    let start = Instant::now();

    let result = compare_batch_impl(name, batch, extra_dynamic).map_err(|e| {
        log_op_error!(
            "compare_batch",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            name
        );
        e
    })?;

    log_op_end!(
        "compare_batch",
        duration_ms = start.elapsed().as_millis() as u64,
        name,
        digest = short_digest(&result.digest)
    );

    Ok(result)
}

fn compare_batch_impl(
    name: &str,
    mut batch: Vec<Document>,
    extra_dynamic: &[FieldPath],
) -> Result<Comparison> {
    let doc_count = batch.len();
    canonical_sort(&mut batch);

    let dynamic = effective_dynamic_fields(extra_dynamic);
    let normalized: Vec<Document> = batch
        .iter()
        .map(|doc| normalize_document(doc, &dynamic))
        .collect();

    let canonical =
        render_batch(&normalized).map_err(|e| e.with_op("compare_batch").with_name(name))?;
    let digest = content_digest(&canonical);

    Ok(Comparison {
        name: name.to_string(),
        canonical,
        digest,
        doc_count,
    })
}

/// Compare a batch against its approved reference and report the verdict
///
/// A divergent or missing reference is a [`Verdict::Mismatch`], not an
/// error; the sink receives the canonical text of both sides so the
/// harness layer can persist or surface it. Hard failures (unreadable
/// store, unserializable batch) surface as `Err`.
///
/// # Errors
///
/// Propagates failures from [`compare_batch`] and from
/// [`ReferenceSource::load_reference`].
pub fn approve_batch(
    name: &str,
    batch: Vec<Document>,
    extra_dynamic: &[FieldPath],
    source: &dyn ReferenceSource,
    sink: &dyn MismatchSink,
) -> Result<Verdict> {
    log_op_start!("approve_batch", name, doc_count = batch.len());
    let start = Instant::now();

    let result = approve_batch_impl(name, batch, extra_dynamic, source, sink).map_err(|e| {
        log_op_error!(
            "approve_batch",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            name
        );
        e
    })?;

    log_op_end!(
        "approve_batch",
        duration_ms = start.elapsed().as_millis() as u64,
        name,
        verdict = ?result
    );

    Ok(result)
}

fn approve_batch_impl(
    name: &str,
    batch: Vec<Document>,
    extra_dynamic: &[FieldPath],
    source: &dyn ReferenceSource,
    sink: &dyn MismatchSink,
) -> Result<Verdict> {
    let comparison = compare_batch_impl(name, batch, extra_dynamic)?;

    match source.load_reference(name)? {
        Some(want) if want == comparison.canonical => Ok(Verdict::Match),
        Some(want) => {
            tracing::warn!(
                component = module_path!(),
                name,
                got_digest = short_digest(&comparison.digest),
                want_digest = short_digest(&content_digest(&want)),
                "canonical content diverged from approved reference"
            );
            sink.report_mismatch(name, &comparison.canonical, &want);
            Ok(Verdict::Mismatch)
        }
        None => {
            tracing::warn!(
                component = module_path!(),
                name,
                got_digest = short_digest(&comparison.digest),
                "no approved reference registered"
            );
            sink.report_mismatch(name, &comparison.canonical, &[]);
            Ok(Verdict::Mismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AxError, AxErrorKind};
    use serde_json::json;
    use std::sync::Mutex;

    struct StaticSource(Option<Vec<u8>>);

    impl ReferenceSource for StaticSource {
        fn load_reference(&self, _: &str) -> Result<Option<Vec<u8>>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl ReferenceSource for FailingSource {
        fn load_reference(&self, name: &str) -> Result<Option<Vec<u8>>> {
            Err(AxError::new(AxErrorKind::Io)
                .with_op("load_reference")
                .with_name(name)
                .with_message("disk on fire"))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        reports: Mutex<Vec<(String, Vec<u8>, Vec<u8>)>>,
    }

    impl MismatchSink for RecordingSink {
        fn report_mismatch(&self, name: &str, got: &[u8], want: &[u8]) {
            self.reports
                .lock()
                .map(|mut r| r.push((name.to_string(), got.to_vec(), want.to_vec())))
                .ok();
        }
    }

    fn batch() -> Vec<Document> {
        vec![Document::new("1", json!({"message": "stable"}))]
    }

    #[test]
    fn test_compare_batch_produces_canonical_text() {
        let comparison = compare_batch("ComparisonSmoke", batch(), &[]).unwrap();
        assert_eq!(comparison.name, "ComparisonSmoke");
        assert_eq!(comparison.canonical, b"{\"message\":\"stable\"}\n");
        assert_eq!(comparison.digest, content_digest(&comparison.canonical));
        assert_eq!(comparison.doc_count, 1);
    }

    #[test]
    fn test_approve_batch_match() {
        let source = StaticSource(Some(b"{\"message\":\"stable\"}\n".to_vec()));
        let sink = RecordingSink::default();

        let verdict = approve_batch("ApproveMatch", batch(), &[], &source, &sink).unwrap();
        assert_eq!(verdict, Verdict::Match);
        assert!(sink.reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_approve_batch_mismatch_reports_both_sides() {
        let source = StaticSource(Some(b"{\"message\":\"older\"}\n".to_vec()));
        let sink = RecordingSink::default();

        let verdict = approve_batch("ApproveDiverged", batch(), &[], &source, &sink).unwrap();
        assert_eq!(verdict, Verdict::Mismatch);

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        let (name, got, want) = &reports[0];
        assert_eq!(name, "ApproveDiverged");
        assert_eq!(got.as_slice(), b"{\"message\":\"stable\"}\n");
        assert_eq!(want.as_slice(), b"{\"message\":\"older\"}\n");
    }

    #[test]
    fn test_approve_batch_missing_reference_is_mismatch() {
        let source = StaticSource(None);
        let sink = RecordingSink::default();

        let verdict = approve_batch("ApproveMissing", batch(), &[], &source, &sink).unwrap();
        assert_eq!(verdict, Verdict::Mismatch);

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].2.is_empty(), "want side should be empty");
    }

    #[test]
    fn test_approve_batch_propagates_source_failure() {
        let sink = RecordingSink::default();
        let err = approve_batch("ApproveIoFail", batch(), &[], &FailingSource, &sink).unwrap_err();
        assert_eq!(err.kind(), AxErrorKind::Io);
        assert!(sink.reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_noop_sink_drops_reports() {
        // Compiles against the trait and does nothing observable.
        NoopMismatchSink.report_mismatch("AnyName", b"got", b"want");
    }
}
