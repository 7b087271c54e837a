//! Resolved, immutable rule tables.

use std::fmt;
use std::sync::Arc;

use lexis_ir::TokenKind;
use lexis_patterns::{Matcher, RegexFlags};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{DelegateTarget, UndefinedStateError};

/// Index of a state within one [`RuleTable`].
///
/// Only meaningful for the table that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    pub(crate) fn from_index(index: usize) -> Self {
        StateId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

/// A stack operation with state names resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StackOp {
    Push(StateId),
    /// Push the state that was on top when the rule matched.
    PushCurrent,
    /// Remove up to this many entries, never the last one.
    Pop(usize),
    /// Replace the top entry.
    Goto(StateId),
}

/// Stack operations of one rule, applied left to right.
pub type Transition = SmallVec<[StackOp; 2]>;

/// Resolved sub-lexing target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delegate {
    target: DelegateTarget,
    stack: SmallVec<[StateId; 2]>,
}

impl Delegate {
    pub(crate) fn new(target: DelegateTarget, stack: SmallVec<[StateId; 2]>) -> Self {
        Delegate { target, stack }
    }

    pub fn target(&self) -> &DelegateTarget {
        &self.target
    }

    /// Initial stack of the sub-run, bottom first, as ids of the target table.
    pub fn stack(&self) -> &[StateId] {
        &self.stack
    }
}

/// Resolved action for one capture group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupAction {
    Kind(TokenKind),
    Skip,
    Using(Delegate),
}

/// Resolved token action of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nothing,
    Kind(TokenKind),
    Groups(Arc<[GroupAction]>),
    Using(Delegate),
}

/// One compiled alternative of a state.
#[derive(Clone, Debug)]
pub struct Rule {
    matcher: Option<Arc<Matcher>>,
    action: Action,
    transition: Transition,
}

impl Rule {
    pub(crate) fn new(matcher: Option<Arc<Matcher>>, action: Action, transition: Transition) -> Self {
        Rule {
            matcher,
            action,
            transition,
        }
    }

    /// `None` for a default rule, which matches the empty string anywhere.
    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_deref()
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn transition(&self) -> &[StackOp] {
        &self.transition
    }

    pub fn is_default(&self) -> bool {
        self.matcher.is_none()
    }

    /// Whether both rules share one compiled matcher.
    pub fn shares_matcher(&self, other: &Rule) -> bool {
        match (&self.matcher, &other.matcher) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Rules compare by pattern text, flags, action and transition.
impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        let same_pattern = match (&self.matcher, &other.matcher) {
            (Some(a), Some(b)) => a.pattern() == b.pattern() && a.flags() == b.flags(),
            (None, None) => true,
            _ => false,
        };
        same_pattern && self.action == other.action && self.transition == other.transition
    }
}

impl Eq for Rule {}

#[derive(Clone, Debug)]
pub(crate) struct State {
    pub(crate) name: String,
    pub(crate) rules: Box<[Rule]>,
}

/// Immutable mapping from state to its flattened rule sequence.
///
/// Built once by [`TableDef::build`](crate::TableDef::build) and shared
/// (usually behind an `Arc`) by any number of concurrent runs.
#[derive(Clone, Debug)]
pub struct RuleTable {
    name: String,
    flags: RegexFlags,
    states: Box<[State]>,
    ids: FxHashMap<String, StateId>,
    reset_on_newline: bool,
}

impl RuleTable {
    pub(crate) fn new(
        name: String,
        flags: RegexFlags,
        states: Vec<State>,
        ids: FxHashMap<String, StateId>,
        reset_on_newline: bool,
    ) -> Self {
        RuleTable {
            name,
            flags,
            states: states.into_boxed_slice(),
            ids,
            reset_on_newline,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn resets_on_newline(&self) -> bool {
        self.reset_on_newline
    }

    /// Look up a defined state. Synthetic combined states are not
    /// addressable by name.
    pub fn state_id(&self, name: &str) -> Result<StateId, UndefinedStateError> {
        self.ids.get(name).copied().ok_or_else(|| UndefinedStateError {
            table: self.name.clone(),
            name: name.to_owned(),
        })
    }

    /// Rules of `name`, in the order they are tried.
    pub fn resolve(&self, name: &str) -> Result<&[Rule], UndefinedStateError> {
        self.state_id(name).map(|id| self.rules(id))
    }

    /// Rules of `id`; empty for an id this table did not issue.
    #[inline]
    pub fn rules(&self, id: StateId) -> &[Rule] {
        self.states.get(id.index()).map_or(&[], |s| &s.rules)
    }

    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.states.get(id.index()).map(|s| s.name.as_str())
    }

    /// Every state, synthetic ones included, in id order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &str)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId::from_index(i), s.name.as_str()))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}
