//! Feedback computation for a guess against a target word.
//!
//! A feedback signal is the per-letter clue a Wordle-style game hands back:
//! every position of the guess is marked absent, present-elsewhere, or
//! correct. Signals key the children of a strategy tree, so the exact same
//! rule must be used when building a tree and when walking it.

use std::fmt;

pub const WORD_LENGTH: usize = 5;
const ALPHABET: usize = 26;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Feedback {
    /// Gray: the letter is not available in the target.
    Absent,
    /// Yellow: the letter occurs in the target, at another position.
    Present,
    /// Green: the letter is at this exact position.
    Correct,
}

impl Feedback {
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Feedback::Absent),
            '1' => Some(Feedback::Present),
            '2' => Some(Feedback::Correct),
            _ => None,
        }
    }

    pub fn as_digit(self) -> char {
        match self {
            Feedback::Absent => '0',
            Feedback::Present => '1',
            Feedback::Correct => '2',
        }
    }
}

/// One mark per guess position, in position order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FeedbackSignal([Feedback; WORD_LENGTH]);

impl FeedbackSignal {
    pub fn new(marks: [Feedback; WORD_LENGTH]) -> Self {
        FeedbackSignal(marks)
    }

    /// Parse the interactive wire form: exactly 5 digits in {0, 1, 2}.
    pub fn parse(input: &str) -> Option<Self> {
        let mut marks = [Feedback::Absent; WORD_LENGTH];
        let mut count = 0;
        for (i, c) in input.chars().enumerate() {
            if i >= WORD_LENGTH {
                return None;
            }
            marks[i] = Feedback::from_digit(c)?;
            count += 1;
        }
        if count == WORD_LENGTH {
            Some(FeedbackSignal(marks))
        } else {
            None
        }
    }

    pub fn marks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Feedback::Correct)
    }
}

impl fmt::Display for FeedbackSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.as_digit())?;
        }
        Ok(())
    }
}

fn letter_index(b: u8) -> usize {
    (b - b'a') as usize
}

/// Compute the feedback signal for `guess` played against `target`.
///
/// Two passes: exact positions are marked first, then the remaining
/// positions are resolved left to right against the letter multiplicity
/// shared between the two words. This is the standard duplicate-letter
/// rule; a single positional comparison would over-mark repeated letters.
///
/// Panics if either word is not 5 lowercase ASCII letters, or if the
/// multiplicity bookkeeping does not balance. Both indicate a caller or
/// logic defect, not bad user input.
pub fn compute_feedback(guess: &str, target: &str) -> FeedbackSignal {
    let g = guess.as_bytes();
    let t = target.as_bytes();
    assert!(
        g.len() == WORD_LENGTH && t.len() == WORD_LENGTH,
        "words must be exactly {WORD_LENGTH} letters: '{guess}' vs '{target}'"
    );
    assert!(
        g.iter().chain(t.iter()).all(u8::is_ascii_lowercase),
        "words must be lowercase ASCII: '{guess}' vs '{target}'"
    );

    let mut guess_counts = [0u8; ALPHABET];
    let mut target_counts = [0u8; ALPHABET];
    for i in 0..WORD_LENGTH {
        guess_counts[letter_index(g[i])] += 1;
        target_counts[letter_index(t[i])] += 1;
    }

    // Per letter, how many marks other than Absent it may still receive.
    let mut available = [0u8; ALPHABET];
    for l in 0..ALPHABET {
        available[l] = guess_counts[l].min(target_counts[l]);
    }

    let mut marks = [Feedback::Absent; WORD_LENGTH];
    for i in 0..WORD_LENGTH {
        if g[i] == t[i] {
            marks[i] = Feedback::Correct;
            available[letter_index(g[i])] -= 1;
        }
    }
    for i in 0..WORD_LENGTH {
        if marks[i] == Feedback::Correct {
            continue;
        }
        let l = letter_index(g[i]);
        if available[l] > 0 {
            marks[i] = Feedback::Present;
            available[l] -= 1;
        }
    }

    assert!(
        available.iter().all(|&n| n == 0),
        "feedback bookkeeping out of balance for '{guess}' vs '{target}'"
    );

    FeedbackSignal(marks)
}
