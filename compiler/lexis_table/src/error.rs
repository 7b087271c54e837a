//! Table construction and lookup errors.

use lexis_patterns::PatternError;

/// Fatal error raised while building a [`RuleTable`](crate::RuleTable).
///
/// Every variant names the state whose definition is at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A rule pattern failed to expand or compile.
    #[error("state `{state}`: {source}")]
    Pattern {
        state: String,
        #[source]
        source: PatternError,
    },

    #[error("state `{state}` includes undefined state `{include}`")]
    UndefinedInclude { state: String, include: String },

    /// States that include each other, directly or through a chain.
    ///
    /// The chain starts and ends with the same state.
    #[error("include cycle: {}", .chain.join(" -> "))]
    IncludeCycle { chain: Vec<String> },

    /// A transition or delegate stack names a state the target table lacks.
    #[error("state `{state}` references undefined state `{target}`")]
    UndefinedState { state: String, target: String },

    #[error(
        "state `{state}`: pattern `{pattern}` has {found} capture groups \
         but {expected} group actions"
    )]
    GroupCountMismatch {
        state: String,
        pattern: String,
        expected: usize,
        found: usize,
    },

    /// Group actions attached to a default rule, which captures nothing.
    #[error("state `{state}`: group actions need a pattern")]
    GroupsWithoutPattern { state: String },

    #[error("state `{state}`: transition names an empty state")]
    EmptyStateName { state: String },
}

/// A state name looked up at run time is absent from the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("table `{table}` has no state `{name}`")]
pub struct UndefinedStateError {
    pub table: String,
    pub name: String,
}
