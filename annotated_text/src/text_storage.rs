// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// Text that an [`AnnotatedText`] can wrap.
///
/// The artifact only needs length and UTF-8 boundary queries from its storage; substring search
/// and rendering operate on `&str` views supplied by the caller.
///
/// [`AnnotatedText`]: crate::AnnotatedText
pub trait TextStorage {
    /// The length of the text, in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `index` lies on a UTF-8 character boundary.
    fn is_char_boundary(&self, index: usize) -> bool;
}

impl TextStorage for String {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for Arc<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}
