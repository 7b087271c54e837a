//! Lexer output unit.

use crate::{Span, SpanError, TokenKind};

/// One classified slice of the lexed text.
///
/// `text` borrows from the input, so a token stream never copies source.
/// `start` is the byte offset of `text` within the text handed to the
/// lexer (delegated sub-lexing re-bases onto that outer text).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    pub start: usize,
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(start: usize, kind: TokenKind, text: &'src str) -> Self {
        Token { start, kind, text }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Byte range covered by this token.
    #[inline]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }

    /// Compact span, failing for offsets beyond `u32::MAX`.
    #[inline]
    pub fn span(&self) -> Result<Span, SpanError> {
        Span::try_from_range(self.range())
    }

    /// Same token with a different kind.
    #[inline]
    #[must_use]
    pub const fn with_kind(self, kind: TokenKind) -> Self {
        Token { kind, ..self }
    }
}

#[cfg(test)]
mod tests;
