//! Interactive play: a cursor over the strategy tree driven by feedback
//! typed in by a human, one blocking read per turn.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::feedback::FeedbackSignal;
use crate::tree::StrategyNode;

const HELP_TEXT: &str = "\
Playing with the precomputed strategy:
  1. open your Wordle-style puzzle and enter the suggested guess
  2. type the clue colors back here as five digits, one per letter:
       0 = gray (letter absent)
       1 = yellow (letter present, wrong position)
       2 = green (letter correct)
     e.g. if the second letter came back green and the fourth yellow,
     enter 02010
  3. repeat until the final answer is reported";

/// Where a session stands after processing one feedback signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    InProgress,
    Solved,
}

/// One running game: the current tree node plus a guess counter.
///
/// The tree itself is never mutated; dropping the session loses nothing
/// but the cursor.
pub struct Session<'a> {
    node: &'a StrategyNode,
    guess_no: usize,
}

impl<'a> Session<'a> {
    pub fn new(root: &'a StrategyNode) -> Self {
        Session {
            node: root,
            guess_no: 1,
        }
    }

    /// The word to propose this turn.
    pub fn current_guess(&self) -> &'a str {
        &self.node.guess
    }

    pub fn guess_number(&self) -> usize {
        self.guess_no
    }

    pub fn is_solved(&self) -> bool {
        self.node.is_leaf()
    }

    /// Advance the cursor along the child for `signal`.
    ///
    /// An unreachable signal leaves the session untouched and returns
    /// [`Error::UnknownFeedback`]; the caller may re-read input and call
    /// again, or abort.
    pub fn advance(&mut self, signal: FeedbackSignal) -> Result<SessionState> {
        let child = self
            .node
            .children
            .get(&signal)
            .ok_or_else(|| Error::UnknownFeedback {
                guess: self.node.guess.clone(),
                signal,
            })?;
        self.node = child;
        self.guess_no += 1;
        if self.node.is_leaf() {
            Ok(SessionState::Solved)
        } else {
            Ok(SessionState::InProgress)
        }
    }
}

enum SignalInput {
    Signal(FeedbackSignal),
    Help,
    Unreadable,
    Eof,
}

enum ImpossibleChoice {
    Abort,
    Retry,
}

/// Drive a full interactive session against an unknown target.
///
/// Speaks the line protocol on stdout and blocks on `reader` for each
/// turn. Unrecognized or unreachable feedback never ends the session by
/// itself; the user chooses between aborting and re-entering input.
pub fn play<R: BufRead>(root: &StrategyNode, mut reader: R) {
    let mut session = Session::new(root);
    if session.is_solved() {
        // Degenerate single-node strategy: nothing to ask.
        println!("FINAL ANSWER: {}!", session.current_guess());
        return;
    }
    println!("Guess {}: {}", session.guess_number(), session.current_guess());

    loop {
        let signal = match read_signal(&mut reader) {
            SignalInput::Signal(signal) => signal,
            SignalInput::Help => {
                println!("{HELP_TEXT}");
                continue;
            }
            SignalInput::Unreadable => {
                match prompt_impossible(&mut reader) {
                    ImpossibleChoice::Abort => return,
                    ImpossibleChoice::Retry => continue,
                }
            }
            SignalInput::Eof => return,
        };

        match session.advance(signal) {
            Ok(SessionState::Solved) => {
                println!("FINAL ANSWER: {}!", session.current_guess());
                return;
            }
            Ok(SessionState::InProgress) => {
                println!("Guess {}: {}", session.guess_number(), session.current_guess());
            }
            Err(_) => {
                log::debug!(
                    "signal {signal} has no branch at '{}'",
                    session.current_guess()
                );
                match prompt_impossible(&mut reader) {
                    ImpossibleChoice::Abort => return,
                    ImpossibleChoice::Retry => continue,
                }
            }
        }
    }
}

fn read_signal<R: BufRead>(reader: &mut R) -> SignalInput {
    println!("Input information (or type 'help') >>");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return SignalInput::Eof,
        Ok(_) => {}
        Err(_) => return SignalInput::Eof,
    }
    let input = input.trim();

    if input.eq_ignore_ascii_case("help") {
        return SignalInput::Help;
    }
    match FeedbackSignal::parse(input) {
        Some(signal) => SignalInput::Signal(signal),
        None => SignalInput::Unreadable,
    }
}

fn prompt_impossible<R: BufRead>(reader: &mut R) -> ImpossibleChoice {
    println!("Impossible. Double check your input.");
    println!("Enter A to abort, C to continue:");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return ImpossibleChoice::Abort,
        Ok(_) => {}
    }
    if input.trim().eq_ignore_ascii_case("a") {
        ImpossibleChoice::Abort
    } else {
        ImpossibleChoice::Retry
    }
}
