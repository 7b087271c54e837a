//! Lexing many inputs in parallel against one table.

use lexis_ir::Token;
use lexis_table::{RuleTable, UndefinedStateError};
use rayon::prelude::*;
use tracing::debug;

use crate::run;

/// Lex every input from `initial_state`, in parallel.
///
/// Results are in input order. The state is checked once, before any work.
pub fn tokenize_all<'s>(
    table: &RuleTable,
    initial_state: &str,
    inputs: &[&'s str],
) -> Result<Vec<Vec<Token<'s>>>, UndefinedStateError> {
    table.state_id(initial_state)?;
    debug!(table = table.name(), inputs = inputs.len(), "parallel lexing");
    inputs
        .par_iter()
        .map(|&text| run(table, initial_state, text).map(|tokens| tokens.collect::<Vec<_>>()))
        .collect()
}
