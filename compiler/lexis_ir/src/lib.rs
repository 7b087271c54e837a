//! Lexis IR - data types shared by every lexis crate.
//!
//! - [`TokenKind`]: the closed, hierarchical classification taxonomy
//! - [`Token`]: one `(offset, kind, text)` unit of lexer output
//! - [`Span`]: compact byte range for consumers that store ranges
//!
//! Nothing in this crate knows about patterns, tables or lexing. Renderers
//! and other consumers can depend on it without pulling in the engine.

mod kind;
mod span;
mod token;

pub use kind::{TokenKind, UnknownTokenKind};
pub use span::{Span, SpanError};
pub use token::Token;
