//! Strategy tree: a precomputed guess decision tree keyed by feedback.
//!
//! The external search tool writes its result as a flat listing of
//! root-to-leaf guess paths, one solved target per line. This module
//! rebuilds the tree from that listing, re-deriving every branch key with
//! [`compute_feedback`] instead of trusting stored signals, so any
//! inconsistency in the file surfaces as a load error rather than a
//! silently wrong tree.

use std::collections::HashMap;
use std::fs;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::feedback::{FeedbackSignal, WORD_LENGTH, compute_feedback};

#[derive(Clone, PartialEq, Debug)]
pub struct StrategyNode {
    /// The word to propose at this decision point.
    pub guess: String,
    /// Worst-case number of guesses from here, counting this one.
    pub max_depth: usize,
    /// Continuation per feedback signal. The all-correct signal never
    /// appears: that feedback ends the game.
    pub children: HashMap<FeedbackSignal, StrategyNode>,
}

impl StrategyNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Load the precomputed strategy for `first_guess` from its corpus file.
pub fn load_strategy(config: &Config, first_guess: &str) -> Result<StrategyNode> {
    let path = config.strategy_path(first_guess);
    if !path.exists() {
        return Err(Error::MissingStrategy {
            guess: first_guess.to_string(),
            path,
        });
    }

    let text = fs::read_to_string(&path)
        .map_err(|e| Error::io(format!("read strategy file {}", path.display()), e))?;
    let paths = parse_corpus(&text)?;
    log::debug!("loaded {} solved paths from {}", paths.len(), path.display());

    let root = words_to_tree(paths)?;
    if root.guess != first_guess {
        return Err(Error::MalformedCorpus {
            reason: format!(
                "strategy file {} starts with '{}', expected '{}'",
                path.display(),
                root.guess,
                first_guess
            ),
        });
    }
    log::info!(
        "strategy for '{}' loaded, worst case {} guesses",
        root.guess,
        root.max_depth
    );
    Ok(root)
}

/// Parse the corpus file format: one path per line, words joined by ", ",
/// the last word of each line being that path's target.
pub fn parse_corpus(text: &str) -> Result<Vec<Vec<String>>> {
    let mut paths = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut path = Vec::new();
        for word in line.split(", ") {
            if word.len() != WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(Error::MalformedCorpus {
                    reason: format!("invalid word '{}' on line {}", word, lineno + 1),
                });
            }
            path.push(word.to_lowercase());
        }
        paths.push(path);
    }
    if paths.is_empty() {
        return Err(Error::MalformedCorpus {
            reason: "corpus contains no paths".to_string(),
        });
    }
    Ok(paths)
}

/// Rebuild a strategy tree from solved root-to-leaf paths.
///
/// All paths must open with the same word, the guess at this node. Tails
/// are grouped by the feedback their target produces against that guess;
/// each group becomes the child for that signal. A single-word path means
/// the guess itself is the target and contributes no child.
pub fn words_to_tree(paths: Vec<Vec<String>>) -> Result<StrategyNode> {
    let first = paths.first().ok_or_else(|| Error::MalformedCorpus {
        reason: "cannot build a node from zero paths".to_string(),
    })?;
    let guess = first.first().cloned().ok_or_else(|| Error::MalformedCorpus {
        reason: "empty path in corpus".to_string(),
    })?;

    let mut grouping: HashMap<FeedbackSignal, Vec<Vec<String>>> = HashMap::new();
    for mut path in paths {
        match path.first() {
            Some(head) if *head == guess => {}
            Some(head) => {
                return Err(Error::MalformedCorpus {
                    reason: format!(
                        "paths disagree on their shared prefix: '{head}' where '{guess}' was expected"
                    ),
                });
            }
            None => {
                return Err(Error::MalformedCorpus {
                    reason: "empty path in corpus".to_string(),
                });
            }
        }
        if path.len() == 1 {
            // The guess is this path's target; the game ends here.
            continue;
        }
        let signal = compute_feedback(&guess, &path[path.len() - 1]);
        path.remove(0);
        grouping.entry(signal).or_default().push(path);
    }

    let mut children = HashMap::with_capacity(grouping.len());
    for (signal, tails) in grouping {
        children.insert(signal, words_to_tree(tails)?);
    }

    let max_depth = 1 + children.values().map(|c| c.max_depth).max().unwrap_or(0);

    Ok(StrategyNode {
        guess,
        max_depth,
        children,
    })
}

/// Parse and build in one step, for corpora already in memory.
pub fn tree_from_str(text: &str) -> Result<StrategyNode> {
    words_to_tree(parse_corpus(text)?)
}
