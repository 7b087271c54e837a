//! Memoizing pattern compiler used during one table build.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Fragments, Matcher, PatternError, RegexFlags};

/// Expands fragments and compiles patterns, sharing identical results.
///
/// A state spliced into many others by `include` is compiled once; every
/// copy of the rule points at the same [`Matcher`].
pub struct PatternCompiler<'f> {
    flags: RegexFlags,
    fragments: &'f Fragments,
    cache: FxHashMap<String, Arc<Matcher>>,
}

impl<'f> PatternCompiler<'f> {
    pub fn new(flags: RegexFlags, fragments: &'f Fragments) -> Self {
        Self {
            flags,
            fragments,
            cache: FxHashMap::default(),
        }
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    /// Compile `pattern`, reusing an earlier result for the same expansion.
    pub fn compile(&mut self, pattern: &str) -> Result<Arc<Matcher>, PatternError> {
        let expanded = self.fragments.expand(pattern)?;
        if let Some(matcher) = self.cache.get(&expanded) {
            return Ok(Arc::clone(matcher));
        }
        trace!(pattern = %expanded, "compiling pattern");
        let matcher = Arc::new(Matcher::compile(&expanded, self.flags)?);
        self.cache.insert(expanded, Arc::clone(&matcher));
        Ok(matcher)
    }

    /// Number of distinct matchers compiled so far.
    pub fn compiled_count(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
