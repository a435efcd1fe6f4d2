// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Trait for types that represent the color or paint of text and decorations.
///
/// Paint is opaque to span resolution: it is carried through styles unchanged, never inspected.
/// The `Default` value stands in for "the renderer's default paint".
pub trait Brush: Clone + PartialEq + Default + core::fmt::Debug {}

impl<T: Clone + PartialEq + Default + core::fmt::Debug> Brush for T {}
