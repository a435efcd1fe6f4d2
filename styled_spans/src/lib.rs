// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Substring-addressed span styling built on [`annotated_text`].
//!
//! A [`SpanDescriptor`] names a substring of a text plus the style overrides and optional click
//! identity to apply where that substring is found. [`resolve_spans`] locates each descriptor in
//! the base text and merges its overrides with a text-wide default [`TextStyle`]; [`annotate`]
//! folds the resolved spans into an immutable [`AnnotatedText`] artifact that a renderer can
//! paint and hit-test.
//!
//! The library is pure data and pure queries: it performs no layout, rendering, or gesture
//! recognition, and it never invokes a click handler. A host converts a pointer position to a
//! byte offset with its own text-measurement facilities and asks the artifact
//! [`AnnotatedText::click_identity_at`] what the tap means.
//!
//! ## Matching
//!
//! Descriptors match the *first* occurrence of their needle, with exact, case-sensitive,
//! literal substring search. Descriptors whose needle is empty or absent from the text are
//! dropped silently; [`resolve_spans_full`] reports them without changing that default.
//! [`MatchPolicy::EveryOccurrence`] opts into styling every non-overlapping occurrence instead.
//!
//! ## Example
//!
//! ```
//! use styled_spans::{annotate, SpanDescriptor, TextStyle};
//!
//! // Brushes are opaque; any Clone + PartialEq + Default + Debug type works.
//! #[derive(Clone, PartialEq, Default, Debug)]
//! struct Rgb(u8, u8, u8);
//!
//! let default = TextStyle::new(Rgb(0, 0, 0));
//! let spans = [SpanDescriptor::new("learn more")
//!     .brush(Rgb(0, 0, 255))
//!     .underline(true)
//!     .callback_key("learn_more")];
//!
//! let text = annotate("Tap to learn more.", &spans, &default);
//! assert_eq!(text.style_ranges().len(), 1);
//! assert_eq!(text.click_identity_at(10), Some("learn_more"));
//! assert_eq!(text.click_identity_at(0), None);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward
//!   compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod annotate;
mod brush;
mod decoration;
mod descriptor;
mod font;
mod resolve;
mod style;

#[cfg(test)]
mod tests;

pub use annotated_text::{AnnotatedText, AnnotatedTextBuilder, TextRange, TextStorage};

pub use crate::annotate::{annotate, annotate_full, Annotated};
pub use crate::brush::Brush;
pub use crate::decoration::Decoration;
pub use crate::descriptor::SpanDescriptor;
pub use crate::font::{FontFamily, FontWeight, GenericFamily};
pub use crate::resolve::{
    resolve_spans, resolve_spans_full, MatchPolicy, ResolveOptions, Resolution, ResolvedSpan,
    Unmatched, UnmatchedReason,
};
pub use crate::style::TextStyle;
