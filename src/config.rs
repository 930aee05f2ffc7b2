//! File locations, assembled once at startup and passed around immutably.

use std::path::{Path, PathBuf};

/// Where the word lists, precomputed strategies, and the external search
/// binary live. Built from CLI options in `main`; nothing in the library
/// reads paths from anywhere else.
#[derive(Clone, Debug)]
pub struct Config {
    pub solutions_path: PathBuf,
    pub guesses_path: PathBuf,
    pub strategy_dir: PathBuf,
    pub optimiser_bin: PathBuf,
}

impl Config {
    pub fn new(
        solutions_path: impl Into<PathBuf>,
        guesses_path: impl Into<PathBuf>,
        strategy_dir: impl Into<PathBuf>,
        optimiser_bin: impl Into<PathBuf>,
    ) -> Self {
        Config {
            solutions_path: solutions_path.into(),
            guesses_path: guesses_path.into(),
            strategy_dir: strategy_dir.into(),
            optimiser_bin: optimiser_bin.into(),
        }
    }

    /// The corpus file the optimiser writes for `first_guess` and the
    /// loader reads back.
    pub fn strategy_path(&self, first_guess: &str) -> PathBuf {
        self.strategy_dir.join(format!("{first_guess}.txt"))
    }
}

/// Per-user default location for strategy files.
pub fn default_strategy_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("wordl").join("strategies"))
        .unwrap_or_else(|| Path::new("strategies").to_path_buf())
}
