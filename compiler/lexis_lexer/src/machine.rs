//! The lexer state machine.
//!
//! A run owns a cursor and a stack of states. Each step tries the rules of
//! the state on top of the stack, in order, anchored at the cursor; the
//! first rule that matches emits its tokens and applies its transition.
//! When no rule matches, one character is emitted with the fallback kind.
//!
//! Every step either advances the cursor or changes the stack, and the
//! number of stack-only steps at one position is bounded, so a run always
//! terminates and its tokens concatenate to the input.

use std::iter::FusedIterator;
use std::ops::Range;

use lexis_ir::{Token, TokenKind};
use lexis_patterns::Captures;
use lexis_table::{
    Action, Delegate, DelegateTarget, GroupAction, Rule, RuleTable, StackOp, StateId,
    UndefinedStateError,
};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::emit::Emitter;
use crate::stack::ensure_sufficient_stack;
use crate::LexConfig;

pub(crate) type StateStack = SmallVec<[StateId; 8]>;

/// Lex `text` with `table`, starting with the stack `[initial_state]`.
pub fn run<'t, 's>(
    table: &'t RuleTable,
    initial_state: &str,
    text: &'s str,
) -> Result<Tokens<'t, 's>, UndefinedStateError> {
    run_with_stack(table, &[initial_state], text)
}

/// Lex `text` with `table`, starting with `states` on the stack (bottom
/// first). An empty list starts in `root`.
pub fn run_with_stack<'t, 's, S: AsRef<str>>(
    table: &'t RuleTable,
    states: &[S],
    text: &'s str,
) -> Result<Tokens<'t, 's>, UndefinedStateError> {
    let initial = if states.is_empty() {
        smallvec![table.state_id("root")?]
    } else {
        states
            .iter()
            .map(|s| table.state_id(s.as_ref()))
            .collect::<Result<StateStack, _>>()?
    };
    Ok(Tokens::new(table, text, initial, LexConfig::default(), 0))
}

/// Lazily produced tokens of one run.
///
/// Tokens come out in text order, never overlap, and concatenate to the
/// input. Dropping the iterator abandons the run.
pub struct Tokens<'t, 's> {
    table: &'t RuleTable,
    text: &'s str,
    pos: usize,
    stack: StateStack,
    initial: StateStack,
    config: LexConfig,
    /// Delegate nesting level of this run; 0 for a top-level run.
    depth: usize,
    out: Emitter<'s>,
    zero_width: ZeroWidthStreak,
}

/// Consecutive zero-width matches at one position.
struct ZeroWidthStreak {
    at: usize,
    steps: usize,
    /// Stack before the first match of the streak.
    snapshot: StateStack,
}

impl ZeroWidthStreak {
    fn new() -> Self {
        ZeroWidthStreak {
            at: usize::MAX,
            steps: 0,
            snapshot: StateStack::new(),
        }
    }
}

/// Result of trying one rule at the cursor.
struct Matched {
    whole: Range<usize>,
    /// Present only for rules with group actions.
    captures: Option<Captures>,
}

impl<'t, 's> Tokens<'t, 's> {
    fn new(
        table: &'t RuleTable,
        text: &'s str,
        initial: StateStack,
        config: LexConfig,
        depth: usize,
    ) -> Self {
        Tokens {
            table,
            text,
            pos: 0,
            stack: initial.clone(),
            initial,
            config,
            depth,
            out: Emitter::new(text, config.fallback_kind),
            zero_width: ZeroWidthStreak::new(),
        }
    }

    /// Replace the run configuration. Call before pulling any token.
    #[must_use]
    pub fn with_config(mut self, config: LexConfig) -> Self {
        self.config = config;
        self.out.set_fallback(config.fallback_kind);
        self
    }

    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// Byte offset up to which the input has been consumed.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Names of the states currently on the stack, bottom first.
    pub fn stack_names(&self) -> Vec<&'t str> {
        self.stack
            .iter()
            .filter_map(|&id| self.table.state_name(id))
            .collect()
    }

    fn step(&mut self) {
        if self.stack.is_empty() {
            self.stack.clone_from(&self.initial);
        }
        let Some(&state) = self.stack.last() else {
            self.force_char();
            return;
        };

        let table = self.table;
        for rule in table.rules(state) {
            if let Some(matched) = self.try_rule(rule) {
                self.apply(rule, matched);
                return;
            }
        }
        self.no_match();
    }

    fn try_rule(&self, rule: &Rule) -> Option<Matched> {
        let Some(matcher) = rule.matcher() else {
            return Some(Matched {
                whole: self.pos..self.pos,
                captures: None,
            });
        };
        if let Action::Groups(_) = rule.action() {
            let captures = matcher.captures_at(self.text, self.pos)?;
            Some(Matched {
                whole: captures.whole(),
                captures: Some(captures),
            })
        } else {
            matcher.match_at(self.text, self.pos).map(|whole| Matched {
                whole,
                captures: None,
            })
        }
    }

    fn apply(&mut self, rule: &'t Rule, matched: Matched) {
        let whole = matched.whole;
        let before = whole.is_empty().then(|| self.stack.clone());

        self.out.begin(whole.start);
        match (rule.action(), &matched.captures) {
            (Action::Nothing, _) => {}
            (Action::Kind(kind), _) => self.out.emit(whole.clone(), *kind),
            (Action::Using(delegate), _) => self.delegate(delegate, whole.clone()),
            (Action::Groups(actions), Some(captures)) => self.emit_groups(actions, captures),
            (Action::Groups(_), None) => {}
        }
        self.out.finish(whole.end);

        self.transition(rule.transition());

        match before {
            Some(before) => self.after_zero_width(before),
            None => self.pos = whole.end,
        }
    }

    fn emit_groups(&mut self, actions: &'t [GroupAction], captures: &Captures) {
        for (index, action) in actions.iter().enumerate() {
            let Some(span) = captures.group(index + 1) else {
                continue;
            };
            match action {
                GroupAction::Skip => {}
                GroupAction::Kind(kind) => self.out.emit(span, *kind),
                GroupAction::Using(delegate) => self.delegate(delegate, span),
            }
        }
    }

    /// Re-lex `span` with a nested run and splice its tokens in place.
    fn delegate(&mut self, delegate: &'t Delegate, span: Range<usize>) {
        let Some(span) = self.out.claim(span) else {
            return;
        };
        if self.depth >= self.config.max_delegate_depth {
            debug!(
                depth = self.depth,
                start = span.start,
                "delegate nesting limit reached; emitting fallback"
            );
            self.out
                .push_token(Token::new(span.start, self.config.fallback_kind, &self.text[span]));
            return;
        }

        let table: &'t RuleTable = match delegate.target() {
            DelegateTarget::This => self.table,
            DelegateTarget::Table(table) => table,
        };
        let text: &'s str = self.text;
        let base = span.start;
        let nested = Tokens::new(
            table,
            &text[span],
            StateStack::from_slice(delegate.stack()),
            self.config,
            self.depth + 1,
        );
        let out = &mut self.out;
        ensure_sufficient_stack(|| {
            for token in nested {
                out.push_token(Token::new(token.start + base, token.kind, token.text));
            }
        });
    }

    fn transition(&mut self, ops: &[StackOp]) {
        if ops.is_empty() {
            return;
        }
        for op in ops {
            match *op {
                StackOp::Push(id) => self.stack.push(id),
                StackOp::PushCurrent => {
                    if let Some(&top) = self.stack.last() {
                        self.stack.push(top);
                    }
                }
                StackOp::Pop(count) => {
                    let keep = self.stack.len().saturating_sub(count).max(1);
                    self.stack.truncate(keep);
                }
                StackOp::Goto(id) => match self.stack.last_mut() {
                    Some(top) => *top = id,
                    None => self.stack.push(id),
                },
            }
        }
        trace!(pos = self.pos, stack = ?self.stack_names(), "transition");
    }

    /// Guarantee progress after a zero-width match.
    fn after_zero_width(&mut self, before: StateStack) {
        if self.stack == before {
            debug!(pos = self.pos, "zero-width match left the stack unchanged; forcing progress");
            self.force_char();
            return;
        }

        if self.zero_width.at != self.pos {
            self.zero_width = ZeroWidthStreak {
                at: self.pos,
                steps: 0,
                snapshot: before,
            };
        }
        self.zero_width.steps += 1;
        if self.zero_width.steps > self.config.max_zero_width_steps {
            debug!(
                pos = self.pos,
                steps = self.zero_width.steps,
                "zero-width streak limit reached; restoring stack"
            );
            self.stack = std::mem::take(&mut self.zero_width.snapshot);
            self.zero_width.at = usize::MAX;
            self.force_char();
        }
    }

    fn no_match(&mut self) {
        if self.table.resets_on_newline() && self.text[self.pos..].starts_with('\n') {
            self.stack = match self.table.state_id("root") {
                Ok(root) => smallvec![root],
                Err(_) => self.initial.clone(),
            };
            self.out.begin(self.pos);
            self.out.emit(self.pos..self.pos + 1, TokenKind::Text);
            self.pos += 1;
            return;
        }
        self.force_char();
    }

    /// Emit the character at the cursor with the fallback kind.
    fn force_char(&mut self) {
        let len = self.text[self.pos..].chars().next().map_or(1, char::len_utf8);
        let end = self.pos + len;
        self.out.begin(self.pos);
        self.out.emit(self.pos..end, self.config.fallback_kind);
        self.pos = end;
    }
}

impl<'s> Iterator for Tokens<'_, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        loop {
            if let Some(token) = self.out.pop() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            self.step();
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
