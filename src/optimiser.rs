//! Gateway to the external strategy-search tool.
//!
//! The search itself is a separate program reached through a file
//! contract: it takes the initial guess, the two word-list files, three
//! tuning values, and an output path, and either writes a full solved-path
//! corpus there or exits non-zero. This module only validates inputs,
//! invokes it, and propagates failure; it never tries to recover a
//! partial run.

use std::fs;
use std::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::wordlist::Vocabulary;

/// Tuning knobs passed through to the search tool untouched.
#[derive(Clone, Copy, Debug)]
pub struct OptimiserSettings {
    /// Heuristic shortlist size: candidates fully evaluated per node.
    pub top_n: u32,
    /// Hard cap on branches checked when the heuristic ties.
    pub max_n: u32,
    /// Depth cap on the produced tree; below 5 no solution exists.
    pub max_tree_depth: u32,
}

impl Default for OptimiserSettings {
    fn default() -> Self {
        OptimiserSettings {
            top_n: 6,
            max_n: 50,
            max_tree_depth: 7,
        }
    }
}

/// Run the external optimiser for `init_guess`, writing the strategy
/// corpus to `config.strategy_path(init_guess)`.
///
/// Returns the tool's stdout (it reports the root word, average and max
/// depth, and timing) for the caller to surface.
pub fn run_optimiser(
    config: &Config,
    vocabulary: &Vocabulary,
    init_guess: &str,
    settings: OptimiserSettings,
) -> Result<String> {
    if !config.optimiser_bin.exists() {
        return Err(Error::OptimiserMissing {
            path: config.optimiser_bin.clone(),
        });
    }
    if !vocabulary.is_permitted(init_guess) {
        return Err(Error::InvalidGuess {
            guess: init_guess.to_string(),
        });
    }

    fs::create_dir_all(&config.strategy_dir).map_err(|e| {
        Error::io(
            format!("create strategy dir {}", config.strategy_dir.display()),
            e,
        )
    })?;
    let out_path = config.strategy_path(init_guess);

    let mut command = Command::new(&config.optimiser_bin);
    command
        .arg(init_guess)
        .arg(&config.solutions_path)
        .arg(&config.guesses_path)
        .arg(settings.top_n.to_string())
        .arg(settings.max_n.to_string())
        .arg(settings.max_tree_depth.to_string())
        .arg(&out_path);
    log::debug!("invoking optimiser: {command:?}");

    let output = command.output().map_err(|e| {
        Error::io(
            format!("run optimiser {}", config.optimiser_bin.display()),
            e,
        )
    })?;

    if !output.status.success() {
        return Err(Error::OptimiserExit {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    log::info!(
        "optimiser finished for '{init_guess}', corpus at {}",
        out_path.display()
    );
    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn vocabulary() -> Vocabulary {
        Vocabulary {
            solutions: vec!["crane".into()],
            permitted: vec!["crane".into(), "salet".into()],
        }
    }

    fn config(bin: &str) -> Config {
        Config::new(
            "data/solutions.txt",
            "data/guesses.txt",
            "/tmp/wordl-test-strategies",
            bin,
        )
    }

    #[test]
    fn test_missing_binary() {
        let config = config("/no/such/optimiser");
        let err = run_optimiser(&config, &vocabulary(), "salet", OptimiserSettings::default())
            .unwrap_err();
        match err {
            Error::OptimiserMissing { path } => {
                assert_eq!(path, PathBuf::from("/no/such/optimiser"));
            }
            other => panic!("expected OptimiserMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_unpermitted_guess_rejected_before_invocation() {
        // /bin/sh exists everywhere we test, so the binary check passes
        // and the vocabulary check must be the one that fires.
        let config = config("/bin/sh");
        let err = run_optimiser(&config, &vocabulary(), "zzzzz", OptimiserSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidGuess { .. }));
    }

    #[test]
    fn test_default_settings() {
        let settings = OptimiserSettings::default();
        assert_eq!(settings.top_n, 6);
        assert_eq!(settings.max_n, 50);
        assert_eq!(settings.max_tree_depth, 7);
    }
}
