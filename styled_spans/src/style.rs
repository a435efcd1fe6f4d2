// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Brush, Decoration, FontFamily, FontWeight, GenericFamily};

/// A fully determined text style.
///
/// Serves two roles: the text-wide default a caller supplies, and the per-span effective style
/// span resolution computes by overlaying a descriptor's overrides on that default. Every
/// attribute has a concrete value; nothing here is optional except the background highlight,
/// whose absence means "no highlight" rather than "inherit".
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle<B: Brush> {
    pub(crate) brush: B,
    pub(crate) font_size_px: f32,
    pub(crate) font_weight: FontWeight,
    pub(crate) font_family: FontFamily,
    pub(crate) decoration: Decoration,
    pub(crate) background: Option<B>,
}

impl<B: Brush> TextStyle<B> {
    /// Creates a style with the given text `brush` and default values for everything else:
    /// 16px, normal weight, sans-serif, no decoration, no background.
    pub fn new(brush: B) -> Self {
        Self {
            brush,
            font_size_px: 16.0,
            font_weight: FontWeight::NORMAL,
            font_family: GenericFamily::SansSerif.into(),
            decoration: Decoration::empty(),
            background: None,
        }
    }

    /// Returns the text brush.
    #[inline]
    pub const fn brush(&self) -> &B {
        &self.brush
    }

    /// Returns the font size in pixels.
    #[inline]
    pub const fn font_size_px(&self) -> f32 {
        self.font_size_px
    }

    /// Returns the font weight.
    #[inline]
    pub const fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the font family.
    #[inline]
    pub const fn font_family(&self) -> &FontFamily {
        &self.font_family
    }

    /// Returns the decoration lines.
    #[inline]
    pub const fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Returns the background highlight brush, if any.
    #[inline]
    pub const fn background(&self) -> Option<&B> {
        self.background.as_ref()
    }

    /// Returns a new style with the font size set to `px`.
    #[inline]
    pub fn with_font_size_px(mut self, px: f32) -> Self {
        self.font_size_px = px;
        self
    }

    /// Returns a new style with the given font weight.
    #[inline]
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Returns a new style with the given font family.
    #[inline]
    pub fn with_font_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Returns a new style with the given decoration lines.
    #[inline]
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Returns a new style with the given background highlight.
    #[inline]
    pub fn with_background(mut self, background: B) -> Self {
        self.background = Some(background);
        self
    }
}

impl<B: Brush> Default for TextStyle<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}
