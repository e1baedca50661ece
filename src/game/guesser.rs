//! The seam between a round and whoever is guessing
//!
//! A round asks a `Guesser` for numbers and tells it how each guess went. The console
//! player prints and prompts; simulation bots just pick numbers.

use crate::core::NumberList;
use std::io;

/// Which part of the round a guess belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Single guess against the full list
    One,
    /// Narrowing loop after a failed first guess
    Two,
}

/// What a guesser sees when asked for a number
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub phase: Phase,
    /// 1-based attempt number this guess will count as
    pub attempt: u32,
    /// Numbers still in play
    pub list: &'a NumberList,
}

/// Result reported back after each guess, or when the round runs out of numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback<'a> {
    Correct,
    /// The guess was not one of the numbers in play
    NotInList(i32),
    /// The guess was in play but not the secret
    Wrong(i32),
    /// Phase 2 stopped because too few numbers remain
    ListTooShort(&'a NumberList),
}

/// A source of guesses for a round
pub trait Guesser {
    /// Produce the next guess
    ///
    /// # Errors
    ///
    /// Returns an error if the guess cannot be obtained (e.g. input closed).
    fn guess(&mut self, turn: Turn<'_>) -> io::Result<i32>;

    /// Observe the outcome of the previous guess
    ///
    /// # Errors
    ///
    /// Returns an error if reporting the feedback fails.
    fn feedback(&mut self, _feedback: Feedback<'_>) -> io::Result<()> {
        Ok(())
    }
}

impl<G: Guesser + ?Sized> Guesser for &mut G {
    fn guess(&mut self, turn: Turn<'_>) -> io::Result<i32> {
        (**self).guess(turn)
    }

    fn feedback(&mut self, feedback: Feedback<'_>) -> io::Result<()> {
        (**self).feedback(feedback)
    }
}
