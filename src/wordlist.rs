use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::feedback::WORD_LENGTH;

pub fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_alphabetic())
}

pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_valid_word(word))
        .collect()
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| Error::io(format!("open word list {}", path.display()), e))?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line
            .map_err(|e| Error::io(format!("read word list {}", path.display()), e))?
            .trim()
            .to_lowercase();
        if is_valid_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// The two word universes of the game, loaded once and never reloaded.
///
/// `permitted` is the permitted-guesses file extended with every candidate
/// solution, so any solution is always a legal guess.
pub struct Vocabulary {
    pub solutions: Vec<String>,
    pub permitted: Vec<String>,
}

impl Vocabulary {
    pub fn load(config: &Config) -> Result<Vocabulary> {
        let solutions = load_wordlist_from_file(&config.solutions_path)?;
        let mut permitted = load_wordlist_from_file(&config.guesses_path)?;
        permitted.extend(solutions.iter().cloned());
        log::debug!(
            "vocabulary loaded: {} solutions, {} permitted guesses",
            solutions.len(),
            permitted.len()
        );
        Ok(Vocabulary {
            solutions,
            permitted,
        })
    }

    pub fn is_permitted(&self, word: &str) -> bool {
        self.permitted.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_wordlist_from_str_filters_and_lowercases() {
        let data = "CRANE\n slate \ntoo-long-word\ncat\nbra1n\n\nSTARE";
        let words = load_wordlist_from_str(data);
        assert_eq!(words, vec!["crane", "slate", "stare"]);
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("crane"));
        assert!(is_valid_word("CRANE"));
        assert!(!is_valid_word("cran"));
        assert!(!is_valid_word("cranes"));
        assert!(!is_valid_word("cr4ne"));
        assert!(!is_valid_word(""));
    }

    #[test]
    fn test_load_wordlist_missing_file() {
        let err = load_wordlist_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
