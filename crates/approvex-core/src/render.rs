//! Canonical serialization of normalized batches
//!
//! The rendered form is the unit of comparison and the on-disk reference
//! format: one compact JSON document per line, in batch order, with
//! object keys sorted and a trailing newline after every line. Equal
//! batches render to identical bytes, so comparison is a byte compare.

use crate::errors::Result;
use crate::model::Document;

/// Serialize a batch into canonical line-framed JSON
///
/// Document IDs are ordering metadata and do not appear in the rendered
/// form; only document bodies are serialized. Key order inside each
/// document comes from the sorted map representation, so construction
/// order never leaks into the output.
pub fn render_batch(batch: &[Document]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for doc in batch {
        serde_json::to_writer(&mut out, &doc.body)?;
        out.push(b'\n');
    }
    Ok(out)
}
