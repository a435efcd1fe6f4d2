// Copyright 2026 the Spanned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

bitflags! {
    /// Text decoration lines applied to a span.
    ///
    /// Underline and strikethrough combine freely; the empty set means no decoration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Decoration: u8 {
        /// A line under the text.
        const UNDERLINE = 1 << 0;
        /// A line through the text.
        const STRIKETHROUGH = 1 << 1;
    }
}

impl Decoration {
    /// Builds a decoration set from individual line flags.
    pub fn from_lines(underline: bool, strikethrough: bool) -> Self {
        let mut out = Self::empty();
        out.set(Self::UNDERLINE, underline);
        out.set(Self::STRIKETHROUGH, strikethrough);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Decoration;

    #[test]
    fn lines_combine() {
        assert_eq!(Decoration::from_lines(false, false), Decoration::empty());
        assert_eq!(Decoration::from_lines(true, false), Decoration::UNDERLINE);
        assert_eq!(
            Decoration::from_lines(false, true),
            Decoration::STRIKETHROUGH
        );
        assert_eq!(
            Decoration::from_lines(true, true),
            Decoration::UNDERLINE | Decoration::STRIKETHROUGH
        );
    }
}
