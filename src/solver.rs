//! Read-only traversal of a built strategy tree: deterministic solving of
//! a known target and aggregate performance statistics over a corpus.

use std::fmt;

use crate::error::{Error, Result};
use crate::feedback::compute_feedback;
use crate::tree::StrategyNode;

/// Compute the guess sequence the strategy plays to reach `target`.
///
/// Walks from the root, recomputing the feedback at every node and
/// following the matching child. The returned sequence ends with `target`
/// itself. A target the tree was not built for takes the walk to a signal
/// with no child and fails with [`Error::TargetNotCovered`].
pub fn solve<'a>(root: &'a StrategyNode, target: &str) -> Result<Vec<&'a str>> {
    let mut node = root;
    let mut guesses = vec![node.guess.as_str()];
    while node.guess != target {
        let signal = compute_feedback(&node.guess, target);
        node = node
            .children
            .get(&signal)
            .ok_or_else(|| Error::TargetNotCovered {
                target: target.to_string(),
            })?;
        guesses.push(node.guess.as_str());
    }
    Ok(guesses)
}

/// Aggregate guess counts for a strategy over a full corpus of targets.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StrategyStats {
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub total_guesses: usize,
}

impl fmt::Display for StrategyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Depth: {}", self.average_guesses)?;
        writeln!(f, "Max Depth: {}", self.max_guesses)?;
        write!(f, "Total Guesses: {}", self.total_guesses)
    }
}

/// Run [`solve`] over every corpus word and fold the sequence lengths.
/// Always a full scan; nothing is cached between calls.
pub fn aggregate_statistics(root: &StrategyNode, corpus: &[String]) -> Result<StrategyStats> {
    let mut total_guesses = 0;
    let mut max_guesses = 0;
    for target in corpus {
        let guesses = solve(root, target)?.len();
        total_guesses += guesses;
        max_guesses = max_guesses.max(guesses);
    }
    Ok(StrategyStats {
        average_guesses: total_guesses as f64 / corpus.len() as f64,
        max_guesses,
        total_guesses,
    })
}
