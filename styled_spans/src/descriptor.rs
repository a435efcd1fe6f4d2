// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

use crate::{Brush, FontFamily, FontWeight};

/// A caller-specified styling rule: a substring to locate plus the overrides to apply there.
///
/// Attributes left unset inherit from the text-wide default [`TextStyle`] during resolution.
/// The two decoration flags are not overrides: a span's decoration is computed from them alone,
/// so an undecorated descriptor yields an undecorated span even under a decorated default.
///
/// Descriptors are built with chained setters:
///
/// ```
/// use styled_spans::SpanDescriptor;
///
/// let span = SpanDescriptor::<()>::new("terms of service")
///     .underline(true)
///     .callback_key("tos");
/// assert_eq!(span.needle(), "terms of service");
/// ```
///
/// [`TextStyle`]: crate::TextStyle
#[derive(Clone, Debug, PartialEq)]
pub struct SpanDescriptor<B: Brush> {
    pub(crate) needle: String,
    pub(crate) brush: Option<B>,
    pub(crate) font_size_px: Option<f32>,
    pub(crate) font_weight: Option<FontWeight>,
    pub(crate) font_family: Option<FontFamily>,
    pub(crate) underline: bool,
    pub(crate) strikethrough: bool,
    pub(crate) background: Option<B>,
    pub(crate) callback_key: Option<Arc<str>>,
}

impl<B: Brush> SpanDescriptor<B> {
    /// Creates a descriptor that matches `needle` with no overrides.
    ///
    /// An empty needle never matches anything; such a descriptor is inert.
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            brush: None,
            font_size_px: None,
            font_weight: None,
            font_family: None,
            underline: false,
            strikethrough: false,
            background: None,
            callback_key: None,
        }
    }

    /// Returns the substring this descriptor matches.
    #[inline]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Overrides the text brush for the matched span.
    pub fn brush(mut self, brush: B) -> Self {
        self.brush = Some(brush);
        self
    }

    /// Overrides the font size, in pixels, for the matched span.
    pub fn font_size_px(mut self, px: f32) -> Self {
        self.font_size_px = Some(px);
        self
    }

    /// Overrides the font weight for the matched span.
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Overrides the font family for the matched span.
    pub fn font_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets whether the matched span is underlined.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Sets whether the matched span is struck through.
    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    /// Sets a background highlight for the matched span.
    pub fn background(mut self, background: B) -> Self {
        self.background = Some(background);
        self
    }

    /// Sets the click identity reported when the matched span is hit-tested.
    ///
    /// When no key is set (or the key is empty), the needle itself serves as the identity.
    pub fn callback_key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.callback_key = Some(key.into());
        self
    }
}
