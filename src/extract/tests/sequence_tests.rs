//! Tests for ordering and concatenating payload chunks.

use crate::{
    extract::{concatenate, sequence},
    test_helpers::fragment,
};

#[test]
fn chunks_are_joined_in_sequence_order() {
    let c = fragment("B", 2, 2, 1, "c");
    let a = fragment("B", 0, 2, 1, "a");
    let b = fragment("B", 1, 2, 1, "b");

    assert_eq!(concatenate(&[&c, &a, &b]), "abc");
}

#[test]
fn equal_indices_keep_input_order() {
    let first = fragment("B", 0, 0, 1, "first");
    let second = fragment("B", 0, 0, 1, "second");

    let ordered = sequence(&[&first, &second]);

    assert_eq!(ordered[0].payload_chunk(), "first");
    assert_eq!(ordered[1].payload_chunk(), "second");
    assert_eq!(concatenate(&[&second, &first]), "secondfirst");
}

#[test]
fn gaps_are_concatenated_without_complaint() {
    let tail = fragment("B", 2, 1, 1, "\"b\"]");
    let head = fragment("B", 0, 1, 1, "[\"a\",");

    assert_eq!(concatenate(&[&tail, &head]), "[\"a\",\"b\"]");
}

#[test]
fn nothing_concatenates_to_empty_text() {
    assert_eq!(concatenate(&[]), "");
}
