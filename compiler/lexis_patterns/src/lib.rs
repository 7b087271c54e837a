//! Pattern compiler for lexis rule tables.
//!
//! Turns the textual match specification of a rule into an executable
//! [`Matcher`]:
//!
//! ```text
//! pattern text ──► Fragments::expand ──► Matcher::compile(flags) ──► Arc<Matcher>
//!   "{:ident}\("        "(?:[a-z]\w*)\("       anchored meta regex      shared per build
//! ```
//!
//! Matching is always anchored at the offset it is given: a rule matches
//! only if its pattern matches starting exactly there. The text before the
//! offset stays visible to assertions, so `^` (multi-line) and `\b` behave
//! as they would in a whole-text search.
//!
//! Compilation happens once per table build. Every failure here is a
//! build-time error; nothing in this crate fails while lexing.

mod compiler;
mod error;
mod flags;
mod fragment;
mod matcher;
mod words;

pub use compiler::PatternCompiler;
pub use error::PatternError;
pub use flags::RegexFlags;
pub use fragment::Fragments;
pub use matcher::{Captures, Matcher};
pub use words::words;
