// Library interface for wordl
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod optimiser;
pub mod session;
pub mod solver;
pub mod tree;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use config::Config;
pub use error::{Error, Result};
pub use feedback::{Feedback, FeedbackSignal, WORD_LENGTH, compute_feedback};
pub use optimiser::{OptimiserSettings, run_optimiser};
pub use session::{Session, SessionState, play};
pub use solver::{StrategyStats, aggregate_statistics, solve};
pub use tree::{StrategyNode, load_strategy, tree_from_str, words_to_tree};
pub use wordlist::{Vocabulary, load_wordlist_from_file, load_wordlist_from_str};
