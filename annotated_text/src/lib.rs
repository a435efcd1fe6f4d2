// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable annotated-text artifacts.
//!
//! An [`AnnotatedText`] pairs a block of text with two ordered range lists:
//!
//! - *style ranges*: `(byte range, style)` entries, where the style type is an opaque generic
//!   parameter chosen by the caller
//! - *click ranges*: `(byte range, identity)` entries, where the identity is an opaque string
//!   token a host hands back to its click handler
//!
//! Both lists preserve application order and are never merged or flattened. A renderer that
//! applies style ranges in stored order reproduces last-applied-wins overlap behavior without any
//! conflict resolution here. The [`AnnotatedText::click_identity_at`] query maps a byte offset to
//! the identity of the first click range containing it.
//!
//! Artifacts are built with [`AnnotatedTextBuilder`] and are immutable afterwards: when the
//! inputs change, build a new artifact rather than mutating the old one.
//!
//! ## Example
//!
//! ```
//! use annotated_text::AnnotatedTextBuilder;
//!
//! let mut builder = AnnotatedTextBuilder::new("Click here to learn more.");
//! builder.push_span_bytes(0..10, "bold", Some("learn_more".into())).unwrap();
//! let text = builder.build();
//!
//! assert_eq!(text.click_identity_at(3), Some("learn_more"));
//! assert_eq!(text.click_identity_at(12), None);
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

mod annotated;
mod error;
mod text_range;
mod text_storage;

pub use crate::annotated::{AnnotatedText, AnnotatedTextBuilder, ClickRanges, StyleRanges};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;
