//! Rule tables for JVM languages.
//!
//! Each language module exposes its [`TableDef`](lexis_table::TableDef)
//! (`definition`), the built table shared process-wide (`table`) and a
//! configured [`Lexer`] (`lexer`). Tables are built on first use; a table
//! that fails to build reports the same error on every call.
//!
//! ```ignore
//! let lexer = lexis_jvm::lexer_by_alias("kotlin")?;
//! let prepared = lexer.prepare(source);
//! for token in lexer.tokens(&prepared)? {
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! ```

pub mod ceylon;
pub mod golo;
pub mod gosu;
pub mod groovy;
pub mod java;
pub mod kotlin;
pub mod pig;

use lexis_lexer::Lexer;
use lexis_table::BuildError;

/// Failure to produce a lexer by alias.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("no lexer for alias `{0}`")]
    UnknownAlias(String),
    #[error(transparent)]
    Build(#[from] BuildError),
}

struct Entry {
    name: &'static str,
    aliases: &'static [&'static str],
    make: fn() -> Result<Lexer, BuildError>,
}

const LEXERS: &[Entry] = &[
    Entry {
        name: java::NAME,
        aliases: java::ALIASES,
        make: java::lexer,
    },
    Entry {
        name: java::ASPECTJ_NAME,
        aliases: java::ASPECTJ_ALIASES,
        make: java::aspectj_lexer,
    },
    Entry {
        name: kotlin::NAME,
        aliases: kotlin::ALIASES,
        make: kotlin::lexer,
    },
    Entry {
        name: groovy::NAME,
        aliases: groovy::ALIASES,
        make: groovy::lexer,
    },
    Entry {
        name: ceylon::NAME,
        aliases: ceylon::ALIASES,
        make: ceylon::lexer,
    },
    Entry {
        name: gosu::NAME,
        aliases: gosu::ALIASES,
        make: gosu::lexer,
    },
    Entry {
        name: gosu::TEMPLATE_NAME,
        aliases: gosu::TEMPLATE_ALIASES,
        make: gosu::template_lexer,
    },
    Entry {
        name: pig::NAME,
        aliases: pig::ALIASES,
        make: pig::lexer,
    },
    Entry {
        name: golo::NAME,
        aliases: golo::ALIASES,
        make: golo::lexer,
    },
];

/// Display names of every lexer, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    LEXERS.iter().map(|entry| entry.name)
}

/// Look up a lexer by name or alias, ignoring ASCII case.
pub fn lexer_by_alias(alias: &str) -> Result<Lexer, LookupError> {
    let entry = LEXERS
        .iter()
        .find(|entry| {
            entry.name.eq_ignore_ascii_case(alias)
                || entry.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
        })
        .ok_or_else(|| LookupError::UnknownAlias(alias.to_owned()))?;
    Ok((entry.make)()?)
}

/// Every lexer, in registration order.
pub fn all_lexers() -> Result<Vec<Lexer>, BuildError> {
    LEXERS.iter().map(|entry| (entry.make)()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
