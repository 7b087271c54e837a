//! Contextual token rewriting.
//!
//! Some languages are a table plus a few word-based corrections: a derived
//! language reuses its parent's table and reclassifies tokens whose text is
//! one of its own keywords. Rewrites run on the emitted stream, keep every
//! offset, and never change the text, so reconstruction still holds.

use lexis_ir::{Token, TokenKind};
use rustc_hash::FxHashSet;

/// One word-based correction.
#[derive(Clone, Debug)]
pub enum RewriteRule {
    /// A `from` token whose text is in `words` becomes `to`.
    Retag {
        from: TokenKind,
        words: FxHashSet<String>,
        to: TokenKind,
    },
    /// A `from` token whose text is in `words` is split before its last
    /// character: the head becomes `head`, the last character `tail`.
    SplitLast {
        from: TokenKind,
        words: FxHashSet<String>,
        head: TokenKind,
        tail: TokenKind,
    },
}

fn word_set<S: AsRef<str>>(words: &[S]) -> FxHashSet<String> {
    words.iter().map(|w| w.as_ref().to_owned()).collect()
}

impl RewriteRule {
    pub fn retag<S: AsRef<str>>(from: TokenKind, words: &[S], to: TokenKind) -> Self {
        RewriteRule::Retag {
            from,
            words: word_set(words),
            to,
        }
    }

    pub fn split_last<S: AsRef<str>>(
        from: TokenKind,
        words: &[S],
        head: TokenKind,
        tail: TokenKind,
    ) -> Self {
        RewriteRule::SplitLast {
            from,
            words: word_set(words),
            head,
            tail,
        }
    }

    /// Rewrite `token`, or `None` when the rule does not apply.
    fn apply<'s>(&self, token: Token<'s>) -> Option<(Token<'s>, Option<Token<'s>>)> {
        match self {
            RewriteRule::Retag { from, words, to } => {
                (token.kind == *from && words.contains(token.text))
                    .then(|| (token.with_kind(*to), None))
            }
            RewriteRule::SplitLast {
                from,
                words,
                head,
                tail,
            } => {
                if token.kind != *from || !words.contains(token.text) {
                    return None;
                }
                let (split, _) = token.text.char_indices().next_back()?;
                if split == 0 {
                    return None;
                }
                let (head_text, tail_text) = token.text.split_at(split);
                Some((
                    Token::new(token.start, *head, head_text),
                    Some(Token::new(token.start + split, *tail, tail_text)),
                ))
            }
        }
    }
}

/// An ordered set of rewrite rules; the first applicable rule wins.
#[derive(Clone, Debug, Default)]
pub struct TokenRewrite {
    rules: Vec<RewriteRule>,
}

impl TokenRewrite {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Wrap a token stream.
    pub fn apply<'r, 's, I>(&'r self, tokens: I) -> Rewritten<'r, 's, I>
    where
        I: Iterator<Item = Token<'s>>,
    {
        Rewritten {
            rules: &self.rules,
            inner: tokens,
            split_tail: None,
        }
    }
}

/// Iterator returned by [`TokenRewrite::apply`].
pub struct Rewritten<'r, 's, I> {
    rules: &'r [RewriteRule],
    inner: I,
    split_tail: Option<Token<'s>>,
}

impl<'s, I> Iterator for Rewritten<'_, 's, I>
where
    I: Iterator<Item = Token<'s>>,
{
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        if let Some(tail) = self.split_tail.take() {
            return Some(tail);
        }
        let token = self.inner.next()?;
        for rule in self.rules {
            if let Some((first, second)) = rule.apply(token) {
                self.split_tail = second;
                return Some(first);
            }
        }
        Some(token)
    }
}
