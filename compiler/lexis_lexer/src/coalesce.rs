//! Merging of adjacent same-kind tokens.

use std::iter::Peekable;

use lexis_ir::Token;

/// Joins runs of adjacent tokens that share a kind.
///
/// `text` must be the text the tokens' offsets refer to.
pub struct Coalesce<'s, I: Iterator<Item = Token<'s>>> {
    text: &'s str,
    inner: Peekable<I>,
}

impl<'s, I: Iterator<Item = Token<'s>>> Coalesce<'s, I> {
    pub fn new(text: &'s str, tokens: I) -> Self {
        Coalesce {
            text,
            inner: tokens.peekable(),
        }
    }
}

impl<'s, I: Iterator<Item = Token<'s>>> Iterator for Coalesce<'s, I> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        let mut current = self.inner.next()?;
        while let Some(next) = self.inner.peek() {
            if next.kind != current.kind || next.start != current.end() {
                break;
            }
            let Some(joined) = self.text.get(current.start..next.end()) else {
                break;
            };
            current.text = joined;
            self.inner.next();
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests;
