// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{Error, TextRange, TextStorage};

/// A block of text with ordered style ranges and click-identity ranges.
///
/// Built with [`AnnotatedTextBuilder`] and immutable afterwards. Ranges are stored in
/// application order and may overlap; consumers that walk [`style_ranges`] in order reproduce
/// last-applied-wins overlap behavior, while [`click_identity_at`] resolves overlap in favor of
/// the earliest applied range.
///
/// Every stored range satisfies `0 <= start < end <= len()`; empty ranges are dropped at build
/// time.
///
/// [`style_ranges`]: Self::style_ranges
/// [`click_identity_at`]: Self::click_identity_at
#[derive(Clone, Debug)]
pub struct AnnotatedText<T, S> {
    text: T,
    styles: Vec<(Range<usize>, S)>,
    clicks: Vec<(Range<usize>, Arc<str>)>,
}

impl<T: TextStorage, S> AnnotatedText<T, S> {
    /// Borrows the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrows the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Iterates over the style ranges, in application order.
    ///
    /// Overlapping ranges are reported as stored; a renderer applying them in this order gets
    /// last-applied-wins behavior for the attributes later entries set.
    pub fn style_ranges(&self) -> StyleRanges<'_, S> {
        StyleRanges {
            inner: self.styles.iter(),
        }
    }

    /// Iterates over the click-identity ranges, in application order.
    pub fn click_ranges(&self) -> ClickRanges<'_> {
        ClickRanges {
            inner: self.clicks.iter(),
        }
    }

    /// Iterates over the styles whose ranges contain the byte `offset`.
    ///
    /// Overlaps are not resolved here; every containing range's style is reported, in
    /// application order.
    pub fn styles_at(&self, offset: usize) -> impl Iterator<Item = &S> {
        self.styles
            .iter()
            .filter_map(move |(range, style)| range.contains(&offset).then_some(style))
    }

    /// Returns the click identity of the span occupying the byte `offset`, if any.
    ///
    /// Scans the click ranges in application order and returns the identity of the first range
    /// with `start <= offset < end`. Ranges are end-exclusive, so an offset equal to a range's
    /// `end` does not hit it. Offsets at or past the end of the text resolve to `None`.
    pub fn click_identity_at(&self, offset: usize) -> Option<&str> {
        self.clicks
            .iter()
            .find(|(range, _)| range.contains(&offset))
            .map(|(_, identity)| identity.as_ref())
    }
}

/// An iterator over the style ranges of an [`AnnotatedText`].
#[derive(Clone, Debug)]
pub struct StyleRanges<'a, S> {
    inner: core::slice::Iter<'a, (Range<usize>, S)>,
}

impl<'a, S> Iterator for StyleRanges<'a, S> {
    type Item = (&'a Range<usize>, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(range, style)| (range, style))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> ExactSizeIterator for StyleRanges<'_, S> {}

/// An iterator over the click-identity ranges of an [`AnnotatedText`].
#[derive(Clone, Debug)]
pub struct ClickRanges<'a> {
    inner: core::slice::Iter<'a, (Range<usize>, Arc<str>)>,
}

impl<'a> Iterator for ClickRanges<'a> {
    type Item = (&'a Range<usize>, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(range, identity)| (range, identity.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ClickRanges<'_> {}

/// Accumulates style and click ranges over a text, then finishes into an [`AnnotatedText`].
///
/// Empty ranges are ignored by every `push` method, so a built artifact only ever stores ranges
/// with `start < end`.
#[derive(Clone, Debug)]
pub struct AnnotatedTextBuilder<T, S> {
    text: T,
    styles: Vec<(Range<usize>, S)>,
    clicks: Vec<(Range<usize>, Arc<str>)>,
}

impl<T: TextStorage, S> AnnotatedTextBuilder<T, S> {
    /// Creates a builder over `text` with no ranges applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            styles: Vec::new(),
            clicks: Vec::new(),
        }
    }

    /// Borrows the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Appends a style entry for a validated `range`.
    pub fn push_style(&mut self, range: TextRange, style: S) {
        if !range.is_empty() {
            self.styles.push((range.as_range(), style));
        }
    }

    /// Appends a click-identity entry for a validated `range`.
    pub fn push_click(&mut self, range: TextRange, identity: Arc<str>) {
        if !range.is_empty() {
            self.clicks.push((range.as_range(), identity));
        }
    }

    /// Appends one style entry and, when `identity` is given, one click entry for the same
    /// validated `range`.
    pub fn push_span(&mut self, range: TextRange, style: S, identity: Option<Arc<str>>) {
        self.push_style(range, style);
        if let Some(identity) = identity {
            self.push_click(range, identity);
        }
    }

    /// Appends a style entry for a byte `range`, validating it first.
    pub fn push_style_bytes(&mut self, range: Range<usize>, style: S) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.push_style(TextRange::new_unchecked(range.start, range.end), style);
        Ok(())
    }

    /// Appends span entries for a byte `range`, validating it first.
    ///
    /// See [`push_span`](Self::push_span).
    pub fn push_span_bytes(
        &mut self,
        range: Range<usize>,
        style: S,
        identity: Option<Arc<str>>,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.push_span(
            TextRange::new_unchecked(range.start, range.end),
            style,
            identity,
        );
        Ok(())
    }

    /// Finishes the builder into an immutable [`AnnotatedText`].
    pub fn build(self) -> AnnotatedText<T, S> {
        AnnotatedText {
            text: self.text,
            styles: self.styles,
            clicks: self.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnnotatedTextBuilder;
    use crate::TextRange;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Tone {
        Loud,
        Quiet,
    }

    #[test]
    fn preserves_application_order() {
        let mut builder = AnnotatedTextBuilder::new("Hello world");
        builder.push_style(TextRange::new_unchecked(0, 5), Tone::Loud);
        builder.push_style(TextRange::new_unchecked(3, 8), Tone::Quiet);
        let text = builder.build();

        let ranges: Vec<_> = text.style_ranges().collect();
        assert_eq!(ranges.len(), 2);
        assert_eq!(*ranges[0].0, 0..5);
        assert_eq!(ranges[0].1, &Tone::Loud);
        assert_eq!(*ranges[1].0, 3..8);
    }

    #[test]
    fn styles_at_reports_every_containing_range() {
        let mut builder = AnnotatedTextBuilder::new("Hello world");
        builder.push_style(TextRange::new_unchecked(0, 5), Tone::Loud);
        builder.push_style(TextRange::new_unchecked(3, 8), Tone::Quiet);
        let text = builder.build();

        let at_4: Vec<_> = text.styles_at(4).collect();
        assert_eq!(at_4, [&Tone::Loud, &Tone::Quiet]);
        assert!(text.styles_at(9).next().is_none());
    }

    #[test]
    fn empty_ranges_are_dropped() {
        let mut builder = AnnotatedTextBuilder::new("Hello");
        builder.push_span(TextRange::new_unchecked(2, 2), Tone::Loud, Some("x".into()));
        let text = builder.build();
        assert_eq!(text.style_ranges().len(), 0);
        assert_eq!(text.click_ranges().len(), 0);
    }

    #[test]
    fn first_applied_click_range_wins() {
        let mut builder = AnnotatedTextBuilder::<_, ()>::new("abcdef");
        // The later range starts earlier and is smaller; application order still decides.
        builder.push_click(TextRange::new_unchecked(2, 6), "wide".into());
        builder.push_click(TextRange::new_unchecked(1, 4), "narrow".into());
        let text = builder.build();

        assert_eq!(text.click_identity_at(3), Some("wide"));
        assert_eq!(text.click_identity_at(1), Some("narrow"));
        assert_eq!(text.click_identity_at(5), Some("wide"));
    }

    #[test]
    fn hit_test_is_end_exclusive_and_bounded() {
        let mut builder = AnnotatedTextBuilder::<_, ()>::new("abcdef");
        builder.push_click(TextRange::new_unchecked(0, 3), "head".into());
        let text = builder.build();

        assert_eq!(text.click_identity_at(0), Some("head"));
        assert_eq!(text.click_identity_at(2), Some("head"));
        assert_eq!(text.click_identity_at(3), None);
        assert_eq!(text.click_identity_at(text.len()), None);
        assert_eq!(text.click_identity_at(text.len() + 1), None);
        assert_eq!(text.click_identity_at(usize::MAX), None);
    }

    #[test]
    fn byte_range_push_validates() {
        let mut builder = AnnotatedTextBuilder::new("état");
        assert!(builder.push_style_bytes(0..2, Tone::Loud).is_ok());
        assert!(builder.push_style_bytes(1..3, Tone::Loud).is_err());
        assert!(
            builder
                .push_span_bytes(0..9, Tone::Quiet, Some("x".into()))
                .is_err()
        );
        let text = builder.build();
        assert_eq!(text.style_ranges().len(), 1);
    }
}
