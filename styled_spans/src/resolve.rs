// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span resolution: locating descriptors in a base text and computing effective styles.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Brush, Decoration, SpanDescriptor, TextStyle};

/// How a descriptor's needle is matched against the base text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Style only the first occurrence of the needle.
    ///
    /// This is the default, preserving the common expectation that a descriptor addresses one
    /// place in the text. A needle appearing several times is styled at its leftmost occurrence
    /// only.
    #[default]
    FirstOccurrence,

    /// Style every non-overlapping occurrence of the needle, left to right.
    ///
    /// Each occurrence becomes its own resolved span with the same effective style and click
    /// identity. The search resumes at the end of each match, so occurrences never overlap each
    /// other.
    EveryOccurrence,
}

/// Options controlling span resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResolveOptions {
    /// The matching policy; defaults to [`MatchPolicy::FirstOccurrence`].
    pub match_policy: MatchPolicy,
}

impl ResolveOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns options with the given matching policy.
    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }
}

/// A descriptor matched to a concrete byte range of a specific text.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSpan<B: Brush> {
    /// The matched byte range in the base text.
    pub range: Range<usize>,
    /// The effective style: descriptor overrides overlaid on the text-wide default.
    pub style: TextStyle<B>,
    /// The identity reported when this span is hit-tested.
    pub click_identity: Arc<str>,
}

/// Why a descriptor produced no resolved span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnmatchedReason {
    /// The descriptor's needle was empty. An empty needle never matches, so it cannot produce a
    /// zero-length or degenerate full-text span.
    EmptyNeedle,
    /// The needle does not occur in the base text.
    NotFound,
}

/// A descriptor that contributed nothing to the resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unmatched {
    /// The descriptor's position in the input list.
    pub index: usize,
    /// Why it did not match.
    pub reason: UnmatchedReason,
}

/// The full output of span resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution<B: Brush> {
    /// Resolved spans, in descriptor order. Under [`MatchPolicy::EveryOccurrence`] a
    /// descriptor's occurrences are contiguous, left to right.
    pub spans: Vec<ResolvedSpan<B>>,
    /// Descriptors that matched nothing, in descriptor order.
    pub unmatched: Vec<Unmatched>,
}

/// Resolves descriptors against `text`, dropping unmatched descriptors silently.
///
/// Equivalent to [`resolve_spans_full`] with default options, keeping only the spans. Matching
/// is exact, case-sensitive, literal substring search at the first occurrence; empty needles
/// and absent needles contribute nothing.
pub fn resolve_spans<B: Brush>(
    text: &str,
    descriptors: &[SpanDescriptor<B>],
    default: &TextStyle<B>,
) -> Vec<ResolvedSpan<B>> {
    resolve_spans_full(text, descriptors, default, ResolveOptions::new()).spans
}

/// Resolves descriptors against `text`, reporting unmatched descriptors.
///
/// Spans come out in descriptor order, not text order; downstream override and hit-test
/// tie-break rules depend on that ordering.
pub fn resolve_spans_full<B: Brush>(
    text: &str,
    descriptors: &[SpanDescriptor<B>],
    default: &TextStyle<B>,
    options: ResolveOptions,
) -> Resolution<B> {
    let mut spans = Vec::new();
    let mut unmatched = Vec::new();

    for (index, descriptor) in descriptors.iter().enumerate() {
        if descriptor.needle.is_empty() {
            unmatched.push(Unmatched {
                index,
                reason: UnmatchedReason::EmptyNeedle,
            });
            continue;
        }

        let Some(start) = text.find(&*descriptor.needle) else {
            unmatched.push(Unmatched {
                index,
                reason: UnmatchedReason::NotFound,
            });
            continue;
        };

        let style = effective_style(descriptor, default);
        let identity = click_identity(descriptor);
        let needle_len = descriptor.needle.len();
        spans.push(ResolvedSpan {
            range: start..start + needle_len,
            style: style.clone(),
            click_identity: Arc::clone(&identity),
        });

        if options.match_policy == MatchPolicy::EveryOccurrence {
            let mut cursor = start + needle_len;
            while let Some(found) = text[cursor..].find(&*descriptor.needle) {
                let start = cursor + found;
                spans.push(ResolvedSpan {
                    range: start..start + needle_len,
                    style: style.clone(),
                    click_identity: Arc::clone(&identity),
                });
                cursor = start + needle_len;
            }
        }
    }

    Resolution { spans, unmatched }
}

/// Overlays a descriptor's explicit overrides on the text-wide default, attribute by attribute.
///
/// Decoration is the exception: it is computed from the descriptor's flags alone and never
/// inherited, so an undecorated span stays undecorated under a decorated default.
fn effective_style<B: Brush>(
    descriptor: &SpanDescriptor<B>,
    default: &TextStyle<B>,
) -> TextStyle<B> {
    TextStyle {
        brush: descriptor.brush.clone().unwrap_or_else(|| default.brush.clone()),
        font_size_px: descriptor.font_size_px.unwrap_or(default.font_size_px),
        font_weight: descriptor.font_weight.unwrap_or(default.font_weight),
        font_family: descriptor
            .font_family
            .clone()
            .unwrap_or_else(|| default.font_family.clone()),
        decoration: Decoration::from_lines(descriptor.underline, descriptor.strikethrough),
        background: descriptor
            .background
            .clone()
            .or_else(|| default.background.clone()),
    }
}

/// The identity a resolved span reports from hit-testing: the callback key when one is set and
/// non-empty, else the needle itself.
fn click_identity<B: Brush>(descriptor: &SpanDescriptor<B>) -> Arc<str> {
    match &descriptor.callback_key {
        Some(key) if !key.is_empty() => Arc::clone(key),
        _ => Arc::from(descriptor.needle.as_str()),
    }
}
