// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests over resolution + artifact assembly + hit-testing.

use alloc::vec::Vec;

use crate::{
    annotate, annotate_full, MatchPolicy, ResolveOptions, SpanDescriptor, TextStyle,
    UnmatchedReason,
};

#[derive(Clone, PartialEq, Default, Debug)]
struct Rgb(u8, u8, u8);

fn default_style() -> TextStyle<Rgb> {
    TextStyle::new(Rgb(0, 0, 0))
}

#[test]
fn tap_on_link_reports_its_key() {
    let spans = [SpanDescriptor::<Rgb>::new("Click here").callback_key("learn_more")];
    let text = annotate("Click here to learn more.", &spans, &default_style());

    assert_eq!(text.click_identity_at(3), Some("learn_more"));
    assert_eq!(text.click_identity_at(12), None);
}

#[test]
fn disjoint_descriptors_each_land_on_their_substring() {
    let base = "Learn span styling with SpannedText!";
    let spans = [
        SpanDescriptor::new("Learn").brush(Rgb(255, 0, 0)),
        SpanDescriptor::new("span styling").brush(Rgb(0, 255, 0)),
        SpanDescriptor::new("SpannedText").brush(Rgb(0, 0, 255)),
    ];
    let text = annotate(base, &spans, &default_style());

    let ranges: Vec<_> = text.style_ranges().map(|(range, _)| range.clone()).collect();
    assert_eq!(ranges.len(), 3);
    for (range, needle) in ranges.iter().zip(["Learn", "span styling", "SpannedText"]) {
        assert_eq!(&base[range.clone()], needle);
    }
    // Pairwise disjoint.
    for pair in ranges.windows(2) {
        assert!(pair[0].end <= pair[1].start, "ranges should not overlap");
    }
}

#[test]
fn unkeyed_descriptor_uses_its_needle_as_identity() {
    let spans = [SpanDescriptor::<Rgb>::new("user@example")];
    let text = annotate("mail user@example today", &spans, &default_style());

    assert_eq!(text.click_identity_at(5), Some("user@example"));
}

#[test]
fn overlapping_spans_hit_test_in_descriptor_order() {
    // Both descriptors cover offset 2. The first-listed one wins, even though the second's
    // range starts earlier and is smaller.
    let spans = [
        SpanDescriptor::<Rgb>::new("bcde").callback_key("outer"),
        SpanDescriptor::<Rgb>::new("abc").callback_key("inner"),
    ];
    let text = annotate("abcdef", &spans, &default_style());

    assert_eq!(text.click_identity_at(2), Some("outer"));
    assert_eq!(text.click_identity_at(0), Some("inner"));
}

#[test]
fn overlapping_styles_are_stored_unflattened_in_order() {
    let spans = [
        SpanDescriptor::new("abcd").brush(Rgb(1, 1, 1)),
        SpanDescriptor::new("cdef").brush(Rgb(2, 2, 2)),
    ];
    let text = annotate("abcdef", &spans, &default_style());

    // No coalescing: exactly one entry per resolved span, in application order, so a renderer
    // painting in order gives the later descriptor the overlap.
    let entries: Vec<_> = text.style_ranges().collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(*entries[0].0, 0..4);
    assert_eq!(*entries[1].0, 2..6);
    assert_eq!(entries[1].1.brush(), &Rgb(2, 2, 2));

    let at_overlap: Vec<_> = text.styles_at(3).collect();
    assert_eq!(at_overlap.len(), 2);
}

#[test]
fn hit_test_bounds_and_end_exclusivity() {
    let spans = [SpanDescriptor::<Rgb>::new("abc").callback_key("k")];
    let text = annotate("abc", &spans, &default_style());

    assert_eq!(text.click_identity_at(0), Some("k"));
    assert_eq!(text.click_identity_at(2), Some("k"));
    // Ranges are end-exclusive and out-of-bounds offsets miss.
    assert_eq!(text.click_identity_at(3), None);
    assert_eq!(text.click_identity_at(text.len() + 1), None);
}

#[test]
fn unmatched_descriptors_contribute_nothing_by_default() {
    let spans = [
        SpanDescriptor::<Rgb>::new("missing").callback_key("x"),
        SpanDescriptor::<Rgb>::new(""),
        SpanDescriptor::<Rgb>::new("real").callback_key("y"),
    ];
    let text = annotate("the real thing", &spans, &default_style());

    assert_eq!(text.style_ranges().len(), 1);
    assert_eq!(text.click_ranges().len(), 1);
    assert_eq!(text.click_identity_at(4), Some("y"));
}

#[test]
fn annotate_full_surfaces_diagnostics() {
    let spans = [
        SpanDescriptor::<Rgb>::new("missing"),
        SpanDescriptor::<Rgb>::new(""),
        SpanDescriptor::<Rgb>::new("real"),
    ];
    let out = annotate_full("the real thing", &spans, &default_style(), ResolveOptions::new());

    let reasons: Vec<_> = out.unmatched.iter().map(|u| (u.index, u.reason)).collect();
    assert_eq!(
        reasons,
        [(0, UnmatchedReason::NotFound), (1, UnmatchedReason::EmptyNeedle)]
    );
    assert_eq!(out.text.style_ranges().len(), 1);
}

#[test]
fn every_occurrence_policy_tags_each_match() {
    let spans = [SpanDescriptor::<Rgb>::new("do").callback_key("verb")];
    let options = ResolveOptions::new().match_policy(MatchPolicy::EveryOccurrence);
    let out = annotate_full("do or do not", &spans, &default_style(), options);

    assert_eq!(out.text.style_ranges().len(), 2);
    assert_eq!(out.text.click_identity_at(0), Some("verb"));
    assert_eq!(out.text.click_identity_at(6), Some("verb"));
    assert_eq!(out.text.click_identity_at(3), None);
}

#[test]
fn artifact_owns_shared_text() {
    use alloc::sync::Arc;

    let storage: Arc<str> = Arc::from("tap me");
    let spans = [SpanDescriptor::<Rgb>::new("tap")];
    let text = annotate(Arc::clone(&storage), &spans, &default_style());

    assert_eq!(text.as_str(), "tap me");
    assert_eq!(text.click_identity_at(1), Some("tap"));
}

#[test]
fn rebuilding_reflects_new_inputs() {
    let spans = [SpanDescriptor::<Rgb>::new("old").callback_key("k")];
    let first = annotate("old text", &spans, &default_style());
    assert_eq!(first.click_identity_at(0), Some("k"));

    // Inputs changed: build a fresh artifact; the old one is unaffected.
    let second = annotate("new text", &spans, &default_style());
    assert_eq!(second.click_identity_at(0), None);
    assert_eq!(first.click_identity_at(0), Some("k"));
}
