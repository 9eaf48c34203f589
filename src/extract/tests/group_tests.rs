//! Tests for stable grouping by group identifier.

use crate::{
    extract::group_fragments,
    fragment::{FragmentRecord, GroupId},
    test_helpers::fragment,
};

#[test]
fn groups_follow_first_occurrence_order() {
    let records = [
        fragment("Y", 0, 0, 1, "a"),
        fragment("X", 0, 0, 1, "b"),
        fragment("Y", 0, 0, 2, "c"),
        fragment("Z", 0, 0, 1, "d"),
        fragment("X", 0, 0, 2, "e"),
    ];

    let groups = group_fragments(&records);

    let ids: Vec<_> = groups.iter().map(|group| group.group_id().as_str()).collect();
    assert_eq!(ids, ["Y", "X", "Z"]);
    assert_eq!(groups.len(), 3);
}

#[test]
fn groups_preserve_input_order_within_group() {
    let records = [
        fragment("X", 1, 1, 5, "second"),
        fragment("Y", 0, 0, 5, "other"),
        fragment("X", 0, 1, 5, "first"),
    ];

    let groups = group_fragments(&records);

    let group = groups.get(&GroupId::new("X")).expect("group X present");
    let chunks: Vec<_> = group
        .fragments()
        .iter()
        .map(|fragment| fragment.payload_chunk())
        .collect();
    assert_eq!(chunks, ["second", "first"]);
}

#[test]
fn grouping_empty_input_yields_no_groups() {
    let records: Vec<FragmentRecord> = Vec::new();

    let groups = group_fragments(&records);

    assert!(groups.is_empty());
    assert!(groups.get(&GroupId::new("missing")).is_none());
}

#[test]
fn every_record_lands_in_exactly_one_group() {
    let records = [
        fragment("A", 0, 1, 1, "a0"),
        fragment("B", 0, 0, 1, "b0"),
        fragment("A", 1, 1, 1, "a1"),
    ];

    let groups = group_fragments(&records);

    let total: usize = (&groups)
        .into_iter()
        .map(|group| group.fragments().len())
        .sum();
    assert_eq!(total, records.len());
    assert!(
        groups
            .iter()
            .all(|group| group.fragments().iter().all(|f| f.group_id() == group.group_id()))
    );
}
