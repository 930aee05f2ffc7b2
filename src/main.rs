use std::io;

use wordl::cli::{Cli, CliCommand, parse_cli};
use wordl::config::Config;
use wordl::error::{Error, Result};
use wordl::optimiser::{OptimiserSettings, run_optimiser};
use wordl::session::play;
use wordl::solver::{aggregate_statistics, solve};
use wordl::tree::load_strategy;
use wordl::wordlist::{Vocabulary, is_valid_word};

fn main() {
    env_logger::init();
    let cli = parse_cli();
    let config = cli.config();
    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        CliCommand::Play { guess } => {
            let guess = normalized_guess(guess)?;
            let root = load_strategy(config, &guess)?;
            play(&root, io::stdin().lock());
            Ok(())
        }
        CliCommand::Solve { target, guess } => {
            let guess = normalized_guess(guess)?;
            let target = target.to_lowercase();
            if !is_valid_word(&target) {
                return Err(Error::TargetNotCovered { target });
            }
            let root = load_strategy(config, &guess)?;
            let guesses = solve(&root, &target)?;
            for (i, word) in guesses.iter().enumerate() {
                println!("Guess {}: {}", i + 1, word);
            }
            println!("Solved '{}' in {} guesses.", target, guesses.len());
            Ok(())
        }
        CliCommand::Stats { guess } => {
            let guess = normalized_guess(guess)?;
            let root = load_strategy(config, &guess)?;
            let vocabulary = Vocabulary::load(config)?;
            let stats = aggregate_statistics(&root, &vocabulary.solutions)?;
            println!("Word: {guess}");
            println!("{stats}");
            Ok(())
        }
        CliCommand::Optimise {
            guess,
            top_n,
            max_n,
            max_tree_depth,
        } => {
            let guess = normalized_guess(guess)?;
            let vocabulary = Vocabulary::load(config)?;
            let settings = OptimiserSettings {
                top_n: *top_n,
                max_n: *max_n,
                max_tree_depth: *max_tree_depth,
            };
            let stdout = run_optimiser(config, &vocabulary, &guess, settings)?;
            if let Some(summary) = stdout.lines().next() {
                println!("{summary}");
            }

            // Read the freshly written strategy back and report how it
            // performs over the full solution corpus.
            let root = load_strategy(config, &guess)?;
            let stats = aggregate_statistics(&root, &vocabulary.solutions)?;
            println!("Word: {guess}");
            println!("{stats}");
            Ok(())
        }
    }
}

fn normalized_guess(guess: &str) -> Result<String> {
    let guess = guess.to_lowercase();
    if is_valid_word(&guess) {
        Ok(guess)
    } else {
        Err(Error::InvalidGuess { guess })
    }
}
