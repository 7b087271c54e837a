//! A named, ready-to-use lexer.

use std::borrow::Cow;
use std::sync::Arc;

use lexis_ir::Token;
use lexis_table::{RuleTable, UndefinedStateError};

use crate::{run_with_stack, LexConfig, Rewritten, SourceOptions, TokenRewrite, Tokens};

/// Token stream of [`Lexer::tokens`].
pub type LexerTokens<'a> = Rewritten<'a, 'a, Tokens<'a, 'a>>;

/// A rule table bundled with how to run it: initial stack, run
/// configuration, source preparation and token rewrites.
#[derive(Clone, Debug)]
pub struct Lexer {
    name: String,
    aliases: Vec<String>,
    table: Arc<RuleTable>,
    initial: Vec<String>,
    config: LexConfig,
    source: SourceOptions,
    rewrite: TokenRewrite,
}

impl Lexer {
    /// A lexer starting in `root` with default options.
    pub fn new(name: &str, table: Arc<RuleTable>) -> Self {
        Lexer {
            name: name.to_owned(),
            aliases: Vec::new(),
            table,
            initial: vec!["root".to_owned()],
            config: LexConfig::default(),
            source: SourceOptions::default(),
            rewrite: TokenRewrite::new(),
        }
    }

    #[must_use]
    pub fn with_aliases<S: AsRef<str>>(mut self, aliases: &[S]) -> Self {
        self.aliases = aliases.iter().map(|a| a.as_ref().to_owned()).collect();
        self
    }

    /// Start with `states` on the stack, bottom first.
    #[must_use]
    pub fn with_initial_stack<S: AsRef<str>>(mut self, states: &[S]) -> Self {
        self.initial = states.iter().map(|s| s.as_ref().to_owned()).collect();
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: LexConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_source_options(mut self, options: SourceOptions) -> Self {
        self.source = options;
        self
    }

    #[must_use]
    pub fn with_rewrite(mut self, rewrite: TokenRewrite) -> Self {
        self.rewrite = rewrite;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn table(&self) -> &Arc<RuleTable> {
        &self.table
    }

    pub fn initial_stack(&self) -> &[String] {
        &self.initial
    }

    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    pub fn source_options(&self) -> &SourceOptions {
        &self.source
    }

    /// Whether `alias` names this lexer, ignoring ASCII case.
    pub fn is_named(&self, alias: &str) -> bool {
        self.name.eq_ignore_ascii_case(alias)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Normalize `text` per this lexer's [`SourceOptions`].
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.source.prepare(text)
    }

    /// Lex already prepared text.
    pub fn tokens<'a>(&'a self, prepared: &'a str) -> Result<LexerTokens<'a>, UndefinedStateError> {
        let tokens = run_with_stack(&self.table, &self.initial, prepared)?.with_config(self.config);
        Ok(self.rewrite.apply(tokens))
    }

    /// Prepare and lex `text`, collecting owned tokens.
    pub fn tokenize(&self, text: &str) -> Result<Vec<OwnedToken>, UndefinedStateError> {
        let prepared = self.prepare(text);
        Ok(self.tokens(&prepared)?.map(OwnedToken::from).collect())
    }
}

/// A token that owns its text, for results that outlive the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedToken {
    pub start: usize,
    pub kind: lexis_ir::TokenKind,
    pub text: String,
}

impl From<Token<'_>> for OwnedToken {
    fn from(token: Token<'_>) -> Self {
        OwnedToken {
            start: token.start,
            kind: token.kind,
            text: token.text.to_owned(),
        }
    }
}
