//! Stack-based regex lexer.
//!
//! [`run`] walks a [`RuleTable`](lexis_table::RuleTable) over source text and
//! yields [`Token`](lexis_ir::Token)s lazily. For any input the stream is
//! total: tokens are contiguous, in order, and concatenate to the input;
//! text no rule recognizes comes out one character at a time under the
//! fallback kind.
//!
//! Around the core:
//! - [`Lexer`] bundles a table with its initial stack, [`LexConfig`],
//!   [`SourceOptions`] and [`TokenRewrite`]s.
//! - [`Coalesce`] merges adjacent tokens of equal kind.
//! - [`tokenize_all`] lexes many inputs in parallel.

mod batch;
mod coalesce;
mod config;
mod emit;
mod lexer;
mod machine;
mod rewrite;
mod source;
mod stack;

use std::sync::Once;

pub use batch::tokenize_all;
pub use coalesce::Coalesce;
pub use config::{LexConfig, MAX_DELEGATE_DEPTH, MAX_ZERO_WIDTH_STEPS};
pub use lexer::{Lexer, LexerTokens, OwnedToken};
pub use machine::{run, run_with_stack, Tokens};
pub use rewrite::{RewriteRule, Rewritten, TokenRewrite};
pub use source::SourceOptions;

static TRACING_INIT: Once = Once::new();

/// Install a global tracing subscriber, once.
///
/// Does nothing unless `RUST_LOG` is set; the filter is read from it.
/// With `LEXIS_LOG_TREE` also set, spans are rendered as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let installed = if std::env::var_os("LEXIS_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
        };
        // Another subscriber may already be installed by the host.
        drop(installed);
    });
}
