//! Declarative table definitions.
//!
//! A [`TableDef`] is plain data: state names mapped to ordered [`RuleDef`]s,
//! plus the table's regex flags and fragments. Nothing is compiled or checked
//! until [`TableDef::build`].
//!
//! ```ignore
//! let def = TableDef::new("mini")
//!     .state("root", [
//!         token(r"/\*", TokenKind::CommentMultiline).push("comment"),
//!         token(r"\w+", TokenKind::Name),
//!         token(r"\s+", TokenKind::Whitespace),
//!     ])
//!     .state("comment", [
//!         token(r"\*/", TokenKind::CommentMultiline).pop(),
//!         token(r"[^*]+|\*", TokenKind::CommentMultiline),
//!     ]);
//! ```

use std::sync::Arc;

use lexis_ir::TokenKind;
use lexis_patterns::{Fragments, RegexFlags};
use rustc_hash::FxHashMap;

use crate::{BuildError, RuleTable};

/// Pattern source of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternDef {
    /// Regex text, possibly containing `{:fragment}` references.
    Regex(String),
    /// Alternation of literal words, see [`lexis_patterns::words`].
    Words {
        words: Vec<String>,
        prefix: String,
        suffix: String,
    },
}

impl PatternDef {
    /// A word list with no prefix or suffix.
    pub fn words<S: AsRef<str>>(words: &[S]) -> Self {
        PatternDef::Words {
            words: words.iter().map(|w| w.as_ref().to_owned()).collect(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Set the prefix of a word list. No effect on a regex.
    #[must_use]
    pub fn prefix(mut self, text: &str) -> Self {
        if let PatternDef::Words { prefix, .. } = &mut self {
            text.clone_into(prefix);
        }
        self
    }

    /// Set the suffix of a word list. No effect on a regex.
    #[must_use]
    pub fn suffix(mut self, text: &str) -> Self {
        if let PatternDef::Words { suffix, .. } = &mut self {
            text.clone_into(suffix);
        }
        self
    }
}

impl From<&str> for PatternDef {
    fn from(pattern: &str) -> Self {
        PatternDef::Regex(pattern.to_owned())
    }
}

impl From<String> for PatternDef {
    fn from(pattern: String) -> Self {
        PatternDef::Regex(pattern)
    }
}

/// Table a delegate re-lexes with.
#[derive(Clone, Debug)]
pub enum DelegateTarget {
    /// The table currently running.
    This,
    /// Another, already built table.
    Table(Arc<RuleTable>),
}

impl PartialEq for DelegateTarget {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DelegateTarget::This, DelegateTarget::This) => true,
            (DelegateTarget::Table(a), DelegateTarget::Table(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for DelegateTarget {}

/// Sub-lexing of matched text: a target table plus its starting stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegateDef {
    target: DelegateTarget,
    stack: Vec<String>,
}

impl DelegateDef {
    /// Re-lex with the running table from `root`.
    pub fn this() -> Self {
        DelegateDef {
            target: DelegateTarget::This,
            stack: vec!["root".to_owned()],
        }
    }

    /// Re-lex with `table` from `root`.
    pub fn table(table: Arc<RuleTable>) -> Self {
        DelegateDef {
            target: DelegateTarget::Table(table),
            stack: vec!["root".to_owned()],
        }
    }

    /// Start in `state` on top of `root`.
    #[must_use]
    pub fn state(mut self, state: &str) -> Self {
        self.stack = vec!["root".to_owned(), state.to_owned()];
        self
    }

    /// Start with an explicit stack, bottom first. An empty list keeps the
    /// current stack.
    #[must_use]
    pub fn stack<S: AsRef<str>>(mut self, states: &[S]) -> Self {
        if !states.is_empty() {
            self.stack = states.iter().map(|s| s.as_ref().to_owned()).collect();
        }
        self
    }

    pub fn target(&self) -> &DelegateTarget {
        &self.target
    }

    pub fn initial_stack(&self) -> &[String] {
        &self.stack
    }
}

/// What to do with one capture group of a `groups` rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupDef {
    Kind(TokenKind),
    /// Emit nothing for the group.
    Skip,
    Using(DelegateDef),
}

impl From<TokenKind> for GroupDef {
    fn from(kind: TokenKind) -> Self {
        GroupDef::Kind(kind)
    }
}

impl From<DelegateDef> for GroupDef {
    fn from(delegate: DelegateDef) -> Self {
        GroupDef::Using(delegate)
    }
}

/// Token action of a matching rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionDef {
    /// Emit nothing (default rules).
    Nothing,
    Kind(TokenKind),
    Groups(Vec<GroupDef>),
    Using(DelegateDef),
}

/// One stack operation, applied after the token action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackOpDef {
    Push(String),
    /// Push the state on top of the stack when the rule matches. For a
    /// rule spliced by `include` or reached through a combined state this
    /// is the running state, not the one that defined the rule.
    PushCurrent,
    Pop(usize),
    /// Replace the top of the stack.
    Goto(String),
    /// Push one synthetic state whose rules are the listed states' rules
    /// in order.
    PushCombined(Vec<String>),
}

/// A rule with a pattern (or none, for default rules).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRuleDef {
    pub pattern: Option<PatternDef>,
    pub action: ActionDef,
    pub transition: Vec<StackOpDef>,
}

/// One entry in a state definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleDef {
    /// Splice another state's resolved rules here.
    Include(String),
    /// Splice the parent definition's version of this state here.
    Inherit,
    Match(MatchRuleDef),
}

impl RuleDef {
    fn with_op(mut self, op: StackOpDef) -> Self {
        if let RuleDef::Match(rule) = &mut self {
            rule.transition.push(op);
        }
        self
    }

    /// Push `state` after matching.
    #[must_use]
    pub fn push(self, state: &str) -> Self {
        self.with_op(StackOpDef::Push(state.to_owned()))
    }

    #[must_use]
    pub fn push_current(self) -> Self {
        self.with_op(StackOpDef::PushCurrent)
    }

    #[must_use]
    pub fn pop(self) -> Self {
        self.with_op(StackOpDef::Pop(1))
    }

    #[must_use]
    pub fn pop_n(self, count: usize) -> Self {
        self.with_op(StackOpDef::Pop(count))
    }

    #[must_use]
    pub fn goto(self, state: &str) -> Self {
        self.with_op(StackOpDef::Goto(state.to_owned()))
    }

    #[must_use]
    pub fn push_combined<S: AsRef<str>>(self, states: &[S]) -> Self {
        let states = states.iter().map(|s| s.as_ref().to_owned()).collect();
        self.with_op(StackOpDef::PushCombined(states))
    }
}

fn rule(pattern: Option<PatternDef>, action: ActionDef) -> RuleDef {
    RuleDef::Match(MatchRuleDef {
        pattern,
        action,
        transition: Vec::new(),
    })
}

/// Emit the whole match as `kind`.
pub fn token(pattern: impl Into<PatternDef>, kind: TokenKind) -> RuleDef {
    rule(Some(pattern.into()), ActionDef::Kind(kind))
}

/// Emit each capture group according to `groups`, in order.
pub fn groups(pattern: impl Into<PatternDef>, groups: impl IntoIterator<Item = GroupDef>) -> RuleDef {
    rule(
        Some(pattern.into()),
        ActionDef::Groups(groups.into_iter().collect()),
    )
}

/// Re-lex the whole match with `delegate`.
pub fn using(pattern: impl Into<PatternDef>, delegate: DelegateDef) -> RuleDef {
    rule(Some(pattern.into()), ActionDef::Using(delegate))
}

/// Emit any of `list` as `kind`, longest word first.
pub fn words_token<S: AsRef<str>>(list: &[S], prefix: &str, suffix: &str, kind: TokenKind) -> RuleDef {
    token(PatternDef::words(list).prefix(prefix).suffix(suffix), kind)
}

/// Zero-length rule that always matches; carries only a transition.
pub fn default_rule() -> RuleDef {
    rule(None, ActionDef::Nothing)
}

pub fn include(state: &str) -> RuleDef {
    RuleDef::Include(state.to_owned())
}

pub fn inherit() -> RuleDef {
    RuleDef::Inherit
}

/// Declarative input to [`RuleTable`] construction.
#[derive(Clone, Debug)]
pub struct TableDef {
    name: String,
    flags: RegexFlags,
    fragments: Fragments,
    states: Vec<(String, Vec<RuleDef>)>,
    /// Parent states captured by [`derive`](Self::derive), for `inherit()`.
    inherited: FxHashMap<String, Vec<RuleDef>>,
    reset_on_newline: bool,
}

impl TableDef {
    pub fn new(name: &str) -> Self {
        TableDef {
            name: name.to_owned(),
            flags: RegexFlags::default(),
            fragments: Fragments::new(),
            states: Vec::new(),
            inherited: FxHashMap::default(),
            reset_on_newline: false,
        }
    }

    /// Start a child definition: every state of `self` is kept until
    /// redefined, and redefinitions may splice the parent's rules with
    /// [`inherit`].
    #[must_use]
    pub fn derive(&self, name: &str) -> Self {
        let mut child = self.clone();
        name.clone_into(&mut child.name);
        child.inherited = self.states.iter().cloned().collect();
        child
    }

    #[must_use]
    pub fn flags(mut self, flags: RegexFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Define a fragment usable as `{:name}` in this table's patterns.
    #[must_use]
    pub fn fragment(mut self, name: &str, pattern: &str) -> Self {
        self.fragments.insert(name, pattern);
        self
    }

    /// Emit an unmatched `\n` as `Text` and reset the stack to `root`
    /// (the initial stack when there is no `root`), instead of emitting
    /// the fallback kind.
    #[must_use]
    pub fn reset_on_newline(mut self, on: bool) -> Self {
        self.reset_on_newline = on;
        self
    }

    /// Define `name`, replacing any earlier definition in place.
    ///
    /// The first `inherit()` is replaced by the parent's rules for `name`;
    /// further `inherit()` entries, or any without a parent state, are dropped.
    #[must_use]
    pub fn state(mut self, name: &str, rules: impl IntoIterator<Item = RuleDef>) -> Self {
        let mut resolved = Vec::new();
        let mut parent = self.inherited.get(name);
        for rule in rules {
            match rule {
                RuleDef::Inherit => {
                    if let Some(parent_rules) = parent.take() {
                        resolved.extend(parent_rules.iter().cloned());
                    }
                }
                other => resolved.push(other),
            }
        }

        match self.states.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = resolved,
            None => self.states.push((name.to_owned(), resolved)),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex_flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    pub fn resets_on_newline(&self) -> bool {
        self.reset_on_newline
    }

    /// State names in definition order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|(name, _)| name.as_str())
    }

    pub fn state_rules(&self, name: &str) -> Option<&[RuleDef]> {
        self.states
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Compile and validate every state.
    pub fn build(&self) -> Result<RuleTable, BuildError> {
        crate::build::build(self)
    }
}
