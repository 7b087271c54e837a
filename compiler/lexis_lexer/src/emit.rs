//! Token buffering with gap coverage.
//!
//! Within one match the machine reports the spans it wants emitted, in
//! order. The emitter clips spans that overlap text already emitted, fills
//! any uncovered text with the fallback kind, and drops empty tokens, so
//! the tokens of a match always concatenate to exactly the matched text.

use std::collections::VecDeque;
use std::ops::Range;

use lexis_ir::{Token, TokenKind};

pub(crate) struct Emitter<'s> {
    text: &'s str,
    fallback: TokenKind,
    pending: VecDeque<Token<'s>>,
    /// End of the text covered so far within the current match.
    covered: usize,
}

impl<'s> Emitter<'s> {
    pub(crate) fn new(text: &'s str, fallback: TokenKind) -> Self {
        Emitter {
            text,
            fallback,
            pending: VecDeque::new(),
            covered: 0,
        }
    }

    pub(crate) fn set_fallback(&mut self, fallback: TokenKind) {
        self.fallback = fallback;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Token<'s>> {
        self.pending.pop_front()
    }

    /// Start emitting for a match beginning at `start`.
    #[inline]
    pub(crate) fn begin(&mut self, start: usize) {
        self.covered = start;
    }

    /// Emit `span` as `kind`, after filling any gap before it.
    pub(crate) fn emit(&mut self, span: Range<usize>, kind: TokenKind) {
        if let Some(span) = self.claim(span) {
            self.push(span.start, kind, span.end);
        }
    }

    /// Take ownership of `span` for tokens pushed with [`push_token`].
    ///
    /// Returns the part of `span` not yet covered, or `None` when nothing
    /// is left. The caller must then cover exactly that range.
    ///
    /// [`push_token`]: Self::push_token
    pub(crate) fn claim(&mut self, span: Range<usize>) -> Option<Range<usize>> {
        let start = span.start.max(self.covered);
        if span.end <= start {
            return None;
        }
        self.fill_to(start);
        self.covered = span.end;
        Some(start..span.end)
    }

    /// Cover the rest of the match up to `end` with the fallback kind.
    #[inline]
    pub(crate) fn finish(&mut self, end: usize) {
        self.fill_to(end);
    }

    /// Queue an already positioned token, e.g. from a delegated run.
    #[inline]
    pub(crate) fn push_token(&mut self, token: Token<'s>) {
        if !token.text.is_empty() {
            self.pending.push_back(token);
        }
    }

    fn fill_to(&mut self, end: usize) {
        if self.covered < end {
            self.push(self.covered, self.fallback, end);
            self.covered = end;
        }
    }

    fn push(&mut self, start: usize, kind: TokenKind, end: usize) {
        if let Some(text) = self.text.get(start..end) {
            self.push_token(Token::new(start, kind, text));
        }
    }
}
