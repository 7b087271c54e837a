//! Run configuration.

use lexis_ir::TokenKind;

/// Default nesting limit for delegated sub-runs.
pub const MAX_DELEGATE_DEPTH: usize = 64;

/// Default limit on consecutive zero-width matches at one position.
pub const MAX_ZERO_WIDTH_STEPS: usize = 32;

/// Knobs for one lexing run. Tables are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexConfig {
    /// Kind of a character no rule recognized, and of matched text that no
    /// group action covers.
    pub fallback_kind: TokenKind,

    /// Delegates nested deeper than this emit their match as one fallback
    /// token instead of re-lexing it.
    pub max_delegate_depth: usize,

    /// Zero-width matches allowed in a row at one position before the
    /// stack is restored and one character is forced out.
    pub max_zero_width_steps: usize,
}

impl Default for LexConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LexConfig {
    pub const fn new() -> Self {
        LexConfig {
            fallback_kind: TokenKind::Error,
            max_delegate_depth: MAX_DELEGATE_DEPTH,
            max_zero_width_steps: MAX_ZERO_WIDTH_STEPS,
        }
    }

    #[must_use]
    pub const fn with_fallback_kind(mut self, kind: TokenKind) -> Self {
        self.fallback_kind = kind;
        self
    }

    #[must_use]
    pub const fn with_max_delegate_depth(mut self, depth: usize) -> Self {
        self.max_delegate_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_max_zero_width_steps(mut self, steps: usize) -> Self {
        self.max_zero_width_steps = steps;
        self
    }
}
