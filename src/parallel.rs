//! Batch helpers that lex, parse and emit independent units on the `rayon`
//! thread pool.
//!
//! Every unit gets its own token buffer and parser, and finished trees are
//! immutable, so no state is shared between workers. Results keep the order
//! of the input.

use crate::{EmitOptions, Emit, Result, emit, parse_expression_text};
use rayon::prelude::*;
use tracing::debug;
use tsgen_parser::ast::Expression;

/// Totals over one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub unit_count: usize,
    pub total_bytes: usize,
    pub error_count: usize,
}

impl BatchStats {
    fn from_results<T>(sources: &[&str], results: &[Result<T>]) -> Self {
        BatchStats {
            unit_count: sources.len(),
            total_bytes: sources.iter().map(|source| source.len()).sum(),
            error_count: results.iter().filter(|result| result.is_err()).count(),
        }
    }
}

/// Parse every source as an expression. A failing unit does not affect the
/// others.
pub fn parse_expressions_parallel(sources: &[&str]) -> Vec<Result<Expression>> {
    sources
        .par_iter()
        .map(|source| parse_expression_text(source))
        .collect()
}

/// Like [`parse_expressions_parallel`], with totals for the batch.
pub fn parse_expressions_with_stats(sources: &[&str]) -> (Vec<Result<Expression>>, BatchStats) {
    let results = parse_expressions_parallel(sources);
    let stats = BatchStats::from_results(sources, &results);
    debug!(
        units = stats.unit_count,
        bytes = stats.total_bytes,
        errors = stats.error_count,
        "parsed batch"
    );
    (results, stats)
}

/// Emit every node with the same options.
pub fn emit_parallel<T: Emit + Sync>(nodes: &[T], options: &EmitOptions) -> Vec<String> {
    nodes.par_iter().map(|node| emit(node, options)).collect()
}

#[cfg(test)]
#[path = "tests/parallel_tests.rs"]
mod tests;
