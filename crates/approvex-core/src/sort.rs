//! Canonical ordering of document batches
//!
//! Capture order depends on flush timing and transport scheduling, so a
//! batch is sorted into a canonical order before it is compared against
//! a reference. The comparator walks the prioritized sort key table and
//! falls back to the document ID, which makes the order independent of
//! submission order.

use std::cmp::Ordering;

use crate::fields;
use crate::model::Document;
use crate::ordering::field_cmp;

/// Compare two documents under the canonical order
///
/// Sort keys are consulted in priority order; the first key on which the
/// documents differ decides. Documents equal under every key order by ID.
pub fn compare_documents(a: &Document, b: &Document) -> Ordering {
    for key in fields::sort_keys() {
        let ord = field_cmp(a.field(key), b.field(key));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.id.cmp(&b.id)
}

/// Sort a batch into the canonical order, in place
pub fn canonical_sort(batch: &mut [Document]) {
    batch.sort_by(compare_documents);
}
