// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::TextStorage;

/// Error produced when a byte range fails validation against a text.
///
/// Carries the [`ErrorKind`] plus the attempted range, the text length at the time of failure,
/// and, for boundary failures, the enclosing UTF-8 character span at the offending index.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading."
)]
impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the rejected range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the rejected range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the text the range was validated against.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Boundary details, present when the kind is [`ErrorKind::NotOnCharBoundary`].
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage>(
        text: &T,
        start: usize,
        end: usize,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => start,
            Endpoint::End => end,
        };
        let (char_start, char_end) = enclosing_char_span(text, index);
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            start,
            end,
            len: text.len(),
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::NotOnCharBoundary => {
                let Some(b) = self.boundary else {
                    return write!(
                        f,
                        "range {}..{} not on UTF-8 boundary",
                        self.start, self.end
                    );
                };
                let which = match b.which {
                    Endpoint::Start => "start",
                    Endpoint::End => "end",
                };
                write!(
                    f,
                    "range {}..{}: {} index {} not on UTF-8 boundary (char {}..{})",
                    self.start, self.end, which, b.index, b.char_start, b.char_end
                )
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of a range validation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range had `start > end`.
    InvalidRange,

    /// The range extended past the end of the text.
    InvalidBounds,

    /// An endpoint was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,
}

/// Which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint.
    Start,

    /// The `end` endpoint (exclusive).
    End,
}

/// Details for an index that was not on a UTF-8 character boundary.
///
/// Returned by [`Error::boundary`] when the kind is [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

/// Returns the codepoint span enclosing `index`.
///
/// Only called with a non-boundary `index`, so there is a boundary strictly before it (at worst
/// byte 0) and one within 3 bytes after it (at worst the end of the text).
fn enclosing_char_span<T: TextStorage>(text: &T, index: usize) -> (usize, usize) {
    debug_assert!(
        index < text.len() && !text.is_char_boundary(index),
        "enclosing_char_span expects an interior non-boundary index"
    );
    let mut start = index;
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = index + 1;
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    (start, end)
}
