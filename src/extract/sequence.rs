//! Ordering and concatenation of an attempt's payload chunks.

use crate::fragment::FragmentRecord;

/// Order `fragments` by sequence index, keeping input order among equal
/// indices.
#[must_use]
pub fn sequence<'a>(fragments: &[&'a FragmentRecord]) -> Vec<&'a FragmentRecord> {
    let mut ordered = fragments.to_vec();
    ordered.sort_by_key(|fragment| fragment.sequence_index());
    ordered
}

/// Concatenate payload chunks in sequence-index order.
///
/// No gap or duplicate detection happens here; a malformed attempt yields
/// whatever the ordered chunks spell out.
///
/// # Examples
///
/// ```
/// use bundleframe::{extract::concatenate, fragment::FragmentRecord};
///
/// let tail = FragmentRecord::new("B", 1, 1, 100, "a\":1}");
/// let head = FragmentRecord::new("B", 0, 1, 100, "{\"");
/// assert_eq!(concatenate(&[&tail, &head]), "{\"a\":1}");
/// ```
#[must_use]
pub fn concatenate(fragments: &[&FragmentRecord]) -> String {
    let ordered = sequence(fragments);
    let len = ordered
        .iter()
        .map(|fragment| fragment.payload_chunk().len())
        .sum();
    ordered
        .iter()
        .fold(String::with_capacity(len), |mut payload, fragment| {
            payload.push_str(fragment.payload_chunk());
            payload
        })
}
