//! Human-readable mismatch rendering
//!
//! Canonical output is line-oriented, so divergence reports are built
//! from a line diff with shared leading and trailing runs collapsed
//! into matching-line markers.

use approvex_core::digest::{content_digest, short_digest};
use approvex_core::MismatchSink;
use std::fmt::Write as _;
use std::path::Path;

fn lines_of(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// Render a line diff between received and approved canonical text.
///
/// Lines only present in the approved reference are prefixed with `-`,
/// lines only present in the received output with `+`.
pub fn render_line_diff(got: &[u8], want: &[u8]) -> String {
    let got_lines = lines_of(got);
    let want_lines = lines_of(want);

    let prefix = got_lines
        .iter()
        .zip(want_lines.iter())
        .take_while(|(g, w)| g == w)
        .count();

    let mut suffix = 0;
    while suffix < got_lines.len().saturating_sub(prefix)
        && suffix < want_lines.len().saturating_sub(prefix)
        && got_lines[got_lines.len() - 1 - suffix] == want_lines[want_lines.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let mut out = String::new();
    if prefix > 0 {
        let _ = writeln!(out, "  [{} matching line(s)]", prefix);
    }
    for line in &want_lines[prefix..want_lines.len() - suffix] {
        let _ = writeln!(out, "- {}", line);
    }
    for line in &got_lines[prefix..got_lines.len() - suffix] {
        let _ = writeln!(out, "+ {}", line);
    }
    if suffix > 0 {
        let _ = writeln!(out, "  [{} matching line(s)]", suffix);
    }
    out
}

/// Render the full mismatch report shown when a comparison diverges
pub fn render_mismatch_summary(
    name: &str,
    got: &[u8],
    want: &[u8],
    received_path: Option<&Path>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "approval mismatch for '{}'", name);

    if want.is_empty() {
        let _ = writeln!(out, "no approved reference exists yet");
    }

    let got_digest = content_digest(got);
    let _ = writeln!(
        out,
        "got:  {} line(s), digest {}",
        lines_of(got).len(),
        short_digest(&got_digest)
    );
    if !want.is_empty() {
        let want_digest = content_digest(want);
        let _ = writeln!(
            out,
            "want: {} line(s), digest {}",
            lines_of(want).len(),
            short_digest(&want_digest)
        );
    }

    let _ = writeln!(out);
    out.push_str(&render_line_diff(got, want));

    if let Some(path) = received_path {
        let _ = writeln!(out);
        let _ = writeln!(out, "received output written to {}", path.display());
        let _ = writeln!(
            out,
            "review and approve with APPROVEX_UPDATE=1, or promote the received file manually"
        );
    }

    out
}

/// Sink that panics with a rendered report, for in-memory harnesses
pub struct PanicSink;

impl MismatchSink for PanicSink {
    fn report_mismatch(&self, name: &str, got: &[u8], want: &[u8]) {
        panic!("{}", render_mismatch_summary(name, got, want, None));
    }
}
