use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, default_strategy_dir};

/// Wordle player driven by precomputed decision trees
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the newline-delimited candidate-solutions list
    #[arg(long = "solutions", default_value = "data/potential-solutions.txt")]
    pub solutions_path: PathBuf,

    /// Path to the newline-delimited permitted-guesses list
    #[arg(long = "guesses", default_value = "data/permitted-guesses.txt")]
    pub guesses_path: PathBuf,

    /// Directory holding precomputed strategy files, one per initial guess
    #[arg(long = "strategy-dir")]
    pub strategy_dir: Option<PathBuf>,

    /// Path to the external strategy-search binary
    #[arg(long = "optimiser-bin", default_value = "bin/wordl-optimise")]
    pub optimiser_bin: PathBuf,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Play an interactive game using the strategy for an initial guess
    Play {
        /// Initial guess whose precomputed strategy to use
        #[arg(default_value = "salet")]
        guess: String,
    },
    /// Print the guess sequence the strategy plays for a known target
    Solve {
        /// The secret target word
        target: String,
        /// Initial guess whose precomputed strategy to use
        #[arg(long, default_value = "salet")]
        guess: String,
    },
    /// Print aggregate guess statistics over the whole solution corpus
    Stats {
        /// Initial guess whose precomputed strategy to use
        #[arg(default_value = "salet")]
        guess: String,
    },
    /// Run the external search tool to precompute a strategy
    Optimise {
        /// Initial guess to root the strategy tree at
        guess: String,
        /// Heuristic shortlist size checked per tree node
        #[arg(long, default_value_t = 6)]
        top_n: u32,
        /// Hard cap on branches evaluated when the heuristic ties
        #[arg(long, default_value_t = 50)]
        max_n: u32,
        /// Maximum tree depth (values below 5 have no solution)
        #[arg(long, default_value_t = 7)]
        max_tree_depth: u32,
    },
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(
            &self.solutions_path,
            &self.guesses_path,
            self.strategy_dir
                .clone()
                .unwrap_or_else(default_strategy_dir),
            &self.optimiser_bin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wordl", "play"]);
        assert_eq!(
            cli.solutions_path,
            PathBuf::from("data/potential-solutions.txt")
        );
        assert!(matches!(cli.command, CliCommand::Play { ref guess } if guess == "salet"));
    }

    #[test]
    fn test_cli_play_custom_guess() {
        let cli = Cli::parse_from(["wordl", "play", "crane"]);
        assert!(matches!(cli.command, CliCommand::Play { ref guess } if guess == "crane"));
    }

    #[test]
    fn test_cli_solve_args() {
        let cli = Cli::parse_from(["wordl", "solve", "brine", "--guess", "crane"]);
        match cli.command {
            CliCommand::Solve { target, guess } => {
                assert_eq!(target, "brine");
                assert_eq!(guess, "crane");
            }
            other => panic!("expected Solve, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_optimise_defaults() {
        let cli = Cli::parse_from(["wordl", "optimise", "salet"]);
        match cli.command {
            CliCommand::Optimise {
                guess,
                top_n,
                max_n,
                max_tree_depth,
            } => {
                assert_eq!(guess, "salet");
                assert_eq!((top_n, max_n, max_tree_depth), (6, 50, 7));
            }
            other => panic!("expected Optimise, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_config_uses_strategy_dir_override() {
        let cli = Cli::parse_from(["wordl", "--strategy-dir", "/tmp/st", "stats"]);
        let config = cli.config();
        assert_eq!(config.strategy_dir, PathBuf::from("/tmp/st"));
        assert_eq!(config.strategy_path("salet"), PathBuf::from("/tmp/st/salet.txt"));
    }
}
