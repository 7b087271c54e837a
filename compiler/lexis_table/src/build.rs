//! `TableDef` to `RuleTable`: include splicing, combined states, validation.

use std::sync::Arc;

use lexis_patterns::{words, Matcher, PatternCompiler};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::def::{ActionDef, DelegateDef, GroupDef, MatchRuleDef, PatternDef, RuleDef, StackOpDef};
use crate::table::{Action, Delegate, GroupAction, Rule, StackOp, State, Transition};
use crate::{BuildError, DelegateTarget, RuleTable, StateId, TableDef};

#[tracing::instrument(level = "debug", skip_all, fields(table = %def.name()))]
pub(crate) fn build(def: &TableDef) -> Result<RuleTable, BuildError> {
    let mut builder = Builder::new(def);
    let count = builder.names.len();
    for index in 0..count {
        builder.resolve(StateId::from_index(index))?;
    }
    builder.resolve_combined();
    builder.finish()
}

struct Builder<'d> {
    def: &'d TableDef,
    compiler: PatternCompiler<'d>,
    names: Vec<String>,
    ids: FxHashMap<String, StateId>,
    resolved: Vec<Option<Vec<Rule>>>,
    /// States whose includes are being expanded, outermost first.
    active: Vec<StateId>,
    /// Synthetic states by joined name, with their component states.
    combined: FxHashMap<String, StateId>,
    pending_combined: Vec<(StateId, Vec<StateId>)>,
}

impl<'d> Builder<'d> {
    fn new(def: &'d TableDef) -> Self {
        let names: Vec<String> = def.state_names().map(str::to_owned).collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), StateId::from_index(i)))
            .collect();
        Builder {
            def,
            compiler: PatternCompiler::new(def.regex_flags(), def.fragments()),
            resolved: vec![None; names.len()],
            names,
            ids,
            active: Vec::new(),
            combined: FxHashMap::default(),
            pending_combined: Vec::new(),
        }
    }

    fn name(&self, id: StateId) -> &str {
        self.names.get(id.index()).map_or("", String::as_str)
    }

    /// Flattened rules of a defined state, memoized.
    fn resolve(&mut self, id: StateId) -> Result<Vec<Rule>, BuildError> {
        if let Some(Some(rules)) = self.resolved.get(id.index()) {
            return Ok(rules.clone());
        }
        if let Some(start) = self.active.iter().position(|&a| a == id) {
            let mut chain: Vec<String> = self.active[start..]
                .iter()
                .map(|&a| self.name(a).to_owned())
                .collect();
            chain.push(self.name(id).to_owned());
            return Err(BuildError::IncludeCycle { chain });
        }

        let def = self.def;
        let state = self.name(id).to_owned();
        let defs = def.state_rules(&state).unwrap_or_default();

        self.active.push(id);
        let mut rules = Vec::with_capacity(defs.len());
        for rule_def in defs {
            match rule_def {
                RuleDef::Include(target) => {
                    let Some(&target_id) = self.ids.get(target.as_str()) else {
                        self.active.pop();
                        return Err(BuildError::UndefinedInclude {
                            state,
                            include: target.clone(),
                        });
                    };
                    match self.resolve(target_id) {
                        Ok(included) => rules.extend(included),
                        Err(err) => {
                            self.active.pop();
                            return Err(err);
                        }
                    }
                }
                RuleDef::Inherit => {}
                RuleDef::Match(m) => match self.compile_rule(&state, m) {
                    Ok(rule) => rules.push(rule),
                    Err(err) => {
                        self.active.pop();
                        return Err(err);
                    }
                },
            }
        }
        self.active.pop();

        if let Some(slot) = self.resolved.get_mut(id.index()) {
            *slot = Some(rules.clone());
        }
        Ok(rules)
    }

    fn compile_rule(&mut self, state: &str, def: &MatchRuleDef) -> Result<Rule, BuildError> {
        let matcher = def
            .pattern
            .as_ref()
            .map(|pattern| self.compile_pattern(state, pattern))
            .transpose()?;

        let action = match &def.action {
            ActionDef::Nothing => Action::Nothing,
            ActionDef::Kind(kind) => Action::Kind(*kind),
            ActionDef::Using(delegate) => Action::Using(self.delegate(state, delegate)?),
            ActionDef::Groups(groups) => {
                let Some(matcher) = &matcher else {
                    return Err(BuildError::GroupsWithoutPattern {
                        state: state.to_owned(),
                    });
                };
                check_group_count(state, matcher, groups.len())?;
                let actions = groups
                    .iter()
                    .map(|group| {
                        Ok(match group {
                            GroupDef::Kind(kind) => GroupAction::Kind(*kind),
                            GroupDef::Skip => GroupAction::Skip,
                            GroupDef::Using(delegate) => {
                                GroupAction::Using(self.delegate(state, delegate)?)
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, BuildError>>()?;
                Action::Groups(actions.into())
            }
        };

        let mut transition = Transition::new();
        for op in &def.transition {
            transition.push(match op {
                StackOpDef::Push(target) => StackOp::Push(self.local_state(state, target)?),
                StackOpDef::Goto(target) => StackOp::Goto(self.local_state(state, target)?),
                StackOpDef::PushCurrent => StackOp::PushCurrent,
                StackOpDef::Pop(count) => StackOp::Pop(*count),
                StackOpDef::PushCombined(targets) => {
                    StackOp::Push(self.combined_state(state, targets)?)
                }
            });
        }

        Ok(Rule::new(matcher, action, transition))
    }

    fn compile_pattern(&mut self, state: &str, pattern: &PatternDef) -> Result<Arc<Matcher>, BuildError> {
        let compiled = match pattern {
            PatternDef::Regex(text) => self.compiler.compile(text),
            PatternDef::Words {
                words: list,
                prefix,
                suffix,
            } => words(list, prefix, suffix).and_then(|text| self.compiler.compile(&text)),
        };
        compiled.map_err(|source| BuildError::Pattern {
            state: state.to_owned(),
            source,
        })
    }

    fn local_state(&self, state: &str, target: &str) -> Result<StateId, BuildError> {
        if target.is_empty() {
            return Err(BuildError::EmptyStateName {
                state: state.to_owned(),
            });
        }
        self.ids
            .get(target)
            .copied()
            .ok_or_else(|| BuildError::UndefinedState {
                state: state.to_owned(),
                target: target.to_owned(),
            })
    }

    fn delegate(&self, state: &str, def: &DelegateDef) -> Result<Delegate, BuildError> {
        let stack = def
            .initial_stack()
            .iter()
            .map(|target| match def.target() {
                DelegateTarget::This => self.local_state(state, target),
                DelegateTarget::Table(table) => {
                    table
                        .state_id(target)
                        .map_err(|err| BuildError::UndefinedState {
                            state: state.to_owned(),
                            target: format!("{}:{}", err.table, err.name),
                        })
                }
            })
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Delegate::new(def.target().clone(), stack))
    }

    /// Id of the synthetic state for `targets`, allocating it on first use.
    ///
    /// Its rules are filled in after every defined state is resolved, so a
    /// state may push a combination that includes itself.
    fn combined_state(&mut self, state: &str, targets: &[String]) -> Result<StateId, BuildError> {
        let components = targets
            .iter()
            .map(|target| self.local_state(state, target))
            .collect::<Result<Vec<_>, _>>()?;
        let name = targets.join("+");
        if let Some(&id) = self.combined.get(&name) {
            return Ok(id);
        }

        let id = StateId::from_index(self.names.len());
        self.names.push(name.clone());
        self.resolved.push(None);
        self.combined.insert(name, id);
        self.pending_combined.push((id, components));
        Ok(id)
    }

    fn resolve_combined(&mut self) {
        for (id, components) in std::mem::take(&mut self.pending_combined) {
            let rules: Vec<Rule> = components
                .iter()
                .filter_map(|c| self.resolved.get(c.index()).cloned().flatten())
                .flatten()
                .collect();
            if let Some(slot) = self.resolved.get_mut(id.index()) {
                *slot = Some(rules);
            }
        }
    }

    fn finish(self) -> Result<RuleTable, BuildError> {
        let states: Vec<State> = self
            .names
            .into_iter()
            .zip(self.resolved)
            .map(|(name, rules)| State {
                name,
                rules: rules.unwrap_or_default().into_boxed_slice(),
            })
            .collect();

        debug!(
            states = states.len(),
            rules = states.iter().map(|s| s.rules.len()).sum::<usize>(),
            matchers = self.compiler.compiled_count(),
            "rule table built"
        );

        Ok(RuleTable::new(
            self.def.name().to_owned(),
            self.def.regex_flags(),
            states,
            self.ids,
            self.def.resets_on_newline(),
        ))
    }
}

fn check_group_count(state: &str, matcher: &Matcher, expected: usize) -> Result<(), BuildError> {
    let found = matcher.group_count();
    if found == expected {
        Ok(())
    } else {
        Err(BuildError::GroupCountMismatch {
            state: state.to_owned(),
            pattern: matcher.pattern().to_owned(),
            expected,
            found,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
