//! Pattern compilation errors.

/// Failure to turn a pattern specification into a [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The regex engine rejected the (fragment-expanded) pattern.
    #[error("invalid pattern `{pattern}`: {message}")]
    Syntax { pattern: String, message: String },

    /// `{:name}` names a fragment that was never defined.
    #[error("undefined fragment `{0}`")]
    UndefinedFragment(String),

    /// Fragments reference each other in a loop.
    #[error("fragment cycle: {}", .0.join(" -> "))]
    FragmentCycle(Vec<String>),

    /// `{:` without a closing `}`.
    #[error("unterminated fragment reference in `{0}`")]
    UnterminatedFragment(String),

    /// Fragment names are ASCII alphanumerics, `_` and `-`.
    #[error("invalid fragment name `{0}`")]
    InvalidFragmentName(String),

    /// A word-list pattern needs at least one word.
    #[error("word list is empty")]
    EmptyWordList,
}
