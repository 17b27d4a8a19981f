//! Digest computation for canonical batch text.
//!
//! Digests identify canonical content in logs and mismatch summaries
//! without reproducing the full text. They are derived from the rendered
//! bytes, so anything that changes the comparison outcome changes the
//! digest.
//!
//! ## Determinism Guarantees
//!
//! - Same canonical bytes → same digest
//! - Any byte difference → different digest

use sha2::{Digest, Sha256};

/// Compute the SHA256 digest of canonical batch bytes.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
pub fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Truncate a digest to twelve characters for log and summary lines.
pub fn short_digest(digest: &str) -> &str {
    match digest.char_indices().nth(12) {
        Some((boundary, _)) => &digest[..boundary],
        None => digest,
    }
}
