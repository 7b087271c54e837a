//! Rule tables for the lexis lexer.
//!
//! A language is written as a [`TableDef`]: named states, each an ordered
//! list of rules. [`TableDef::build`] compiles every pattern once, splices
//! `include`d and inherited states in place, creates the synthetic states
//! named by combined pushes, and checks that every referenced state exists.
//! The resulting [`RuleTable`] is immutable and `Send + Sync`.

mod build;
mod def;
mod error;
mod table;

pub use def::{
    default_rule, groups, include, inherit, token, using, words_token, ActionDef, DelegateDef,
    DelegateTarget, GroupDef, MatchRuleDef, PatternDef, RuleDef, StackOpDef, TableDef,
};
pub use error::{BuildError, UndefinedStateError};
pub use lexis_patterns::RegexFlags;
pub use table::{Action, Delegate, GroupAction, Rule, RuleTable, StackOp, StateId, Transition};
