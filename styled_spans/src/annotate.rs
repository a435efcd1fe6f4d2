// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use annotated_text::{AnnotatedText, AnnotatedTextBuilder, TextRange, TextStorage};

use crate::resolve::{resolve_spans_full, ResolveOptions, Unmatched};
use crate::{Brush, SpanDescriptor, TextStyle};

/// Builds an annotated artifact from a text, its span descriptors, and the default style.
///
/// Resolves each descriptor (first occurrence, silent drop for unmatched) and folds the results,
/// in descriptor order, into one style range and one click range each. The returned artifact is
/// immutable; rebuild it whenever the text, the descriptors, or the default style change.
///
/// ```
/// use styled_spans::{annotate, SpanDescriptor, TextStyle};
///
/// let spans = [SpanDescriptor::<()>::new("Click here").callback_key("learn_more")];
/// let text = annotate("Click here to learn more.", &spans, &TextStyle::default());
/// assert_eq!(text.click_identity_at(3), Some("learn_more"));
/// assert_eq!(text.click_identity_at(12), None);
/// ```
pub fn annotate<T, B>(
    text: T,
    descriptors: &[SpanDescriptor<B>],
    default: &TextStyle<B>,
) -> AnnotatedText<T, TextStyle<B>>
where
    T: TextStorage + AsRef<str>,
    B: Brush,
{
    annotate_full(text, descriptors, default, ResolveOptions::new()).text
}

/// The output of [`annotate_full`]: the artifact plus unmatched-descriptor diagnostics.
#[derive(Clone, Debug)]
pub struct Annotated<T, B: Brush> {
    /// The built artifact.
    pub text: AnnotatedText<T, TextStyle<B>>,
    /// Descriptors that matched nothing, in descriptor order.
    pub unmatched: Vec<Unmatched>,
}

/// Builds an annotated artifact with explicit [`ResolveOptions`], reporting unmatched
/// descriptors instead of dropping them silently.
pub fn annotate_full<T, B>(
    text: T,
    descriptors: &[SpanDescriptor<B>],
    default: &TextStyle<B>,
    options: ResolveOptions,
) -> Annotated<T, B>
where
    T: TextStorage + AsRef<str>,
    B: Brush,
{
    let resolution = resolve_spans_full(text.as_ref(), descriptors, default, options);

    let mut builder = AnnotatedTextBuilder::new(text);
    for span in resolution.spans {
        // Resolver ranges come from substring search with a valid UTF-8 needle, so both
        // endpoints are in bounds and on character boundaries.
        let range = TextRange::new_unchecked(span.range.start, span.range.end);
        builder.push_span(range, span.style, Some(span.click_identity));
    }

    Annotated {
        text: builder.build(),
        unmatched: resolution.unmatched,
    }
}
