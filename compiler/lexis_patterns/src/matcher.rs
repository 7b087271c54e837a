//! Anchored matchers.

use std::fmt;
use std::ops::Range;

use regex_automata::{meta, Anchored, Input};
use smallvec::SmallVec;

use crate::{PatternError, RegexFlags};

/// A compiled rule pattern.
///
/// Thread-safe and immutable: one matcher is shared by every state that
/// splices the rule and by every concurrent lexing run.
pub struct Matcher {
    regex: meta::Regex,
    pattern: Box<str>,
    flags: RegexFlags,
}

/// Group spans of one successful match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captures {
    whole: Range<usize>,
    /// Index 0 is group 1; `None` for a group that did not participate.
    groups: SmallVec<[Option<Range<usize>>; 4]>,
}

impl Captures {
    /// Span of the entire match.
    pub fn whole(&self) -> Range<usize> {
        self.whole.clone()
    }

    /// Span of capture group `index` (1-based, like the pattern numbering).
    pub fn group(&self, index: usize) -> Option<Range<usize>> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .and_then(Clone::clone)
    }

    /// Number of capture groups, excluding the whole match.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Matcher {
    /// Compile `pattern` with `flags`.
    ///
    /// `pattern` must already be fragment-expanded.
    pub fn compile(pattern: &str, flags: RegexFlags) -> Result<Self, PatternError> {
        let regex = meta::Regex::builder()
            .syntax(flags.syntax_config())
            .build(pattern)
            .map_err(|err| PatternError::Syntax {
                pattern: pattern.to_owned(),
                message: err.to_string(),
            })?;
        Ok(Matcher {
            regex,
            pattern: pattern.into(),
            flags,
        })
    }

    /// Source pattern (after fragment expansion).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    /// Number of capture groups, excluding the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    /// Match starting exactly at `pos`, returning the matched span.
    ///
    /// Text before `pos` is not consumed but is visible to `^` and `\b`.
    #[inline]
    pub fn match_at(&self, text: &str, pos: usize) -> Option<Range<usize>> {
        if pos > text.len() {
            return None;
        }
        let input = Input::new(text).range(pos..).anchored(Anchored::Yes);
        self.regex.search(&input).map(|m| m.range())
    }

    /// Like [`match_at`](Self::match_at), also reporting capture group spans.
    pub fn captures_at(&self, text: &str, pos: usize) -> Option<Captures> {
        if pos > text.len() {
            return None;
        }
        let input = Input::new(text).range(pos..).anchored(Anchored::Yes);
        // Misses are the common case; capture slots are only allocated on a hit.
        if !self.regex.is_match(input.clone()) {
            return None;
        }
        let mut caps = self.regex.create_captures();
        self.regex.search_captures(&input, &mut caps);
        let whole = caps.get_match()?.range();
        let groups = (1..self.regex.captures_len())
            .map(|i| caps.get_group(i).map(|span| span.range()))
            .collect();
        Some(Captures { whole, groups })
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
