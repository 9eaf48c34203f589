//! End-to-end checks: fragment values on the way out, extract them on the
//! way back in.

use std::{borrow::Cow, num::NonZeroUsize, ops::RangeInclusive};

use bundleframe::{
    AttemptTimestamp,
    BundleExtractor,
    ExtractionConfig,
    FragmentRecord,
    Fragmenter,
    GroupId,
    extract_bundles,
    extract_logical_messages,
};
use proptest::{
    collection::vec,
    prelude::Strategy,
    prop_assert_eq,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};
use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Post {
    author: String,
    body: String,
    tags: Vec<String>,
}

#[fixture]
fn fragmenter() -> Fragmenter { Fragmenter::new(NonZeroUsize::new(27).expect("non-zero")) }

fn post(author: &str, body: &str) -> Post {
    Post {
        author: author.to_owned(),
        body: body.to_owned(),
        tags: vec!["ledger".to_owned(), "日記".to_owned()],
    }
}

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

/// Printable text without backslashes, which JSON escapes and the codec
/// would then misread, across every plane.
const JSON_SAFE_TEXT: &[RangeInclusive<char>] = &[
    ' '..='[',
    ']'..='~',
    '\u{a0}'..='\u{d7ff}',
    '\u{e000}'..='\u{10ffff}',
];

#[rstest]
fn fragmented_posts_are_reconstructed_in_submission_order(fragmenter: Fragmenter) {
    let first = post("Zoë", "Grüße aus Köln ✓");
    let second = post("Ana", "plain ascii body");

    let mut records: Vec<FragmentRecord> = Vec::new();
    for (id, value) in [("FIRST", &first), ("SECOND", &second)] {
        let batch = fragmenter
            .fragment_value(&GroupId::new(id), AttemptTimestamp::new(1_000), value)
            .expect("fragment post");
        assert!(batch.is_fragmented());
        records.extend(batch);
    }
    records.reverse();

    let posts: Vec<Post> = extract_bundles(&records).expect("extract posts");

    assert_eq!(posts, [second, first]);
}

#[rstest]
fn reattached_bundles_resolve_to_the_original_attempt(fragmenter: Fragmenter) {
    let group = GroupId::new("REATTACHED");
    let original = fragmenter
        .fragment_value(&group, AttemptTimestamp::new(100), &json!({ "v": "original" }))
        .expect("fragment original");
    let replacement = fragmenter
        .fragment_value(&group, AttemptTimestamp::new(300), &json!({ "v": "edited" }))
        .expect("fragment replacement");
    let reattachment = original.reattach(AttemptTimestamp::new(200));

    let mut records = replacement.into_fragments();
    records.extend(reattachment);
    records.extend(original);

    let strict = BundleExtractor::new(ExtractionConfig::strict());
    let messages = strict
        .extract::<Value, _>(&records)
        .expect("earliest attempt is well formed");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].group_id(), &group);
    assert_eq!(messages[0].value(), &json!({ "v": "original" }));
}

#[test]
fn records_fetched_as_json_are_extracted() {
    let response = json!([
        {
            "bundle": "FETCHED",
            "currentIndex": 1,
            "lastIndex": 1,
            "attachmentTimestamp": 1_526_000_000_001_u64,
            "signatureMessageFragment": "\\u00e9\"}"
        },
        {
            "bundle": "FETCHED",
            "currentIndex": 0,
            "lastIndex": 1,
            "attachmentTimestamp": 1_526_000_000_001_u64,
            "signatureMessageFragment": "{\"name\":\"caf"
        }
    ]);
    let records: Vec<FragmentRecord> =
        serde_json::from_value(response).expect("deserialise records");

    let messages = extract_logical_messages(&records).expect("extract fetched records");

    assert_eq!(messages[0].value(), &json!({ "name": "café" }));
}

#[test]
fn generated_text_survives_fragmentation_and_extraction() {
    let mut runner = deterministic_runner(128);
    let text = vec(proptest::char::ranges(Cow::Borrowed(JSON_SAFE_TEXT)), 0..48)
        .prop_map(|chars| chars.into_iter().collect::<String>());
    let chunk_len = 1_usize..16;

    runner
        .run(&(text, chunk_len), |(text, chunk_len)| {
            let fragmenter = Fragmenter::new(NonZeroUsize::new(chunk_len).expect("non-zero"));
            let batch = fragmenter
                .fragment_value(&GroupId::new("P"), AttemptTimestamp::new(1), &text)
                .expect("fragment text");
            let mut records = batch.reattach(AttemptTimestamp::new(2)).into_fragments();
            records.extend(batch.into_fragments().into_iter().rev());

            let extracted: Vec<String> = extract_bundles(&records).expect("extract text");

            prop_assert_eq!(extracted, vec![text]);
            Ok(())
        })
        .expect("fragmented text should reassemble unchanged");
}
