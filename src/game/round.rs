//! One round of the guessing game
//!
//! A round starts with a freshly generated list and a secret number picked from it.
//!
//! - **Phase 1**: one guess against the full list.
//! - **Phase 2**: entered after a miss. The list is clamped once to a window around the
//!   secret, then each iteration removes the most recent guess, ends the round as a loss
//!   if fewer than `min_list_size` numbers remain, and otherwise asks for another guess.
//!
//! The order remove → size check → prompt → compare decides how many attempts a round
//! can take, so it must stay as is.

use super::guesser::{Feedback, Guesser, Phase, Turn};
use crate::core::NumberList;
use crate::settings::Settings;
use rand::Rng;
use std::io;
use tracing::debug;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won,
    Lost,
}

/// Final result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    /// Guesses submitted across both phases
    pub attempts: u32,
}

/// Transient state of a single round
#[derive(Debug, Clone)]
pub struct Round {
    list: NumberList,
    secret: i32,
    attempts: u32,
    recent_guess: Option<i32>,
    state: RoundState,
}

impl Round {
    /// Generate a list from the settings and pick the secret from it
    ///
    /// # Panics
    /// Will not panic - `Settings` guarantees a non-empty list that fits in the range.
    pub fn generate<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let list = NumberList::generate(
            settings.list_size(),
            settings.lower_bound(),
            settings.upper_bound(),
            rng,
        );
        let secret = list
            .random_choice(rng)
            .expect("settings guarantee a non-empty list");

        Self::start(list, secret)
    }

    /// Start a round on a known list and secret
    ///
    /// Returns `None` if `secret` is not in `list`, since such a round could never be won.
    #[must_use]
    pub fn with_secret(list: NumberList, secret: i32) -> Option<Self> {
        list.contains(secret).then(|| Self::start(list, secret))
    }

    const fn start(list: NumberList, secret: i32) -> Self {
        Self {
            list,
            secret,
            attempts: 0,
            recent_guess: None,
            state: RoundState::AwaitingGuess,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> i32 {
        self.secret
    }

    #[must_use]
    pub const fn list(&self) -> &NumberList {
        &self.list
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Play the round to completion
    ///
    /// # Errors
    ///
    /// Returns an error only if the guesser fails to produce a guess or to accept
    /// feedback. Wrong guesses and running out of numbers are ordinary outcomes.
    pub fn play<G: Guesser + ?Sized>(
        &mut self,
        guesser: &mut G,
        settings: &Settings,
    ) -> io::Result<RoundOutcome> {
        if self.state == RoundState::AwaitingGuess && !self.phase_one(guesser)? {
            self.phase_two(guesser, settings.range_threshold(), settings.min_list_size())?;
        }

        Ok(RoundOutcome {
            won: self.state == RoundState::Won,
            attempts: self.attempts,
        })
    }

    /// Single guess against the full list; returns whether it hit the secret
    fn phase_one<G: Guesser + ?Sized>(&mut self, guesser: &mut G) -> io::Result<bool> {
        let guess = guesser.guess(Turn {
            phase: Phase::One,
            attempt: 1,
            list: &self.list,
        })?;
        self.attempts = 1;

        self.submit(guesser, guess)
    }

    /// Narrowing loop; returns whether the secret was found before the list ran out
    fn phase_two<G: Guesser + ?Sized>(
        &mut self,
        guesser: &mut G,
        range_threshold: u32,
        min_list_size: usize,
    ) -> io::Result<bool> {
        self.list.clamp(self.secret, range_threshold);
        debug!(remaining = self.list.len(), "phase 2 list clamped");

        loop {
            if let Some(previous) = self.recent_guess {
                self.list.remove(previous);
            }

            if self.list.len() < min_list_size {
                debug!(remaining = self.list.len(), min_list_size, "list too short");
                self.state = RoundState::Lost;
                guesser.feedback(Feedback::ListTooShort(&self.list))?;
                return Ok(false);
            }

            self.attempts += 1;
            let guess = guesser.guess(Turn {
                phase: Phase::Two,
                attempt: self.attempts,
                list: &self.list,
            })?;

            if self.submit(guesser, guess)? {
                return Ok(true);
            }
        }
    }

    /// Record a guess, report how it went and mark the round won on a hit
    fn submit<G: Guesser + ?Sized>(&mut self, guesser: &mut G, guess: i32) -> io::Result<bool> {
        self.recent_guess = Some(guess);

        let feedback = self.judge(guess);
        debug!(attempt = self.attempts, guess, ?feedback, "guess judged");
        guesser.feedback(feedback)?;

        if feedback == Feedback::Correct {
            self.state = RoundState::Won;
            return Ok(true);
        }
        Ok(false)
    }

    fn judge(&self, guess: i32) -> Feedback<'static> {
        if guess == self.secret {
            Feedback::Correct
        } else if self.list.contains(guess) {
            Feedback::Wrong(guess)
        } else {
            Feedback::NotInList(guess)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Replays a fixed list of guesses and records everything the round reports
    #[derive(Default)]
    struct Scripted {
        guesses: VecDeque<i32>,
        turns: Vec<(Phase, u32, Vec<i32>)>,
        feedback: Vec<String>,
    }

    impl Scripted {
        fn new(guesses: impl IntoIterator<Item = i32>) -> Self {
            Self {
                guesses: guesses.into_iter().collect(),
                ..Self::default()
            }
        }
    }

    impl Guesser for Scripted {
        fn guess(&mut self, turn: Turn<'_>) -> io::Result<i32> {
            self.turns
                .push((turn.phase, turn.attempt, turn.list.as_slice().to_vec()));
            self.guesses
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn feedback(&mut self, feedback: Feedback<'_>) -> io::Result<()> {
            self.feedback.push(match feedback {
                Feedback::Correct => "correct".to_string(),
                Feedback::NotInList(n) => format!("not-in-list {n}"),
                Feedback::Wrong(n) => format!("wrong {n}"),
                Feedback::ListTooShort(list) => format!("too-short {list}"),
            });
            Ok(())
        }
    }

    fn settings(min_list_size: usize, range_threshold: u32) -> Settings {
        Settings::builder()
            .min_list_size(min_list_size)
            .range_threshold(range_threshold)
            .build()
            .unwrap()
    }

    fn round(values: &[i32], secret: i32) -> Round {
        Round::with_secret(NumberList::from_values(values.iter().copied()), secret).unwrap()
    }

    #[test]
    fn with_secret_rejects_secret_outside_list() {
        assert!(Round::with_secret(NumberList::from_values([1, 2, 3]), 4).is_none());
    }

    #[test]
    fn generated_secret_is_in_list() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let round = Round::generate(&Settings::default(), &mut rng);
            assert_eq!(round.list().len(), 10);
            assert!(round.list().contains(round.secret()));
            assert_eq!(round.state(), RoundState::AwaitingGuess);
        }
    }

    #[test]
    fn first_guess_correct_wins_in_one_attempt() {
        let mut round = round(&[5, 17, 42, 60, 99], 42);
        let mut guesser = Scripted::new([42]);

        let outcome = round.play(&mut guesser, &settings(3, 10)).unwrap();

        assert_eq!(outcome, RoundOutcome { won: true, attempts: 1 });
        assert_eq!(guesser.turns.len(), 1);
        assert!(guesser.turns.iter().all(|(phase, _, _)| *phase == Phase::One));
        assert_eq!(guesser.feedback, ["correct"]);
        // Phase 2 never clamped the list
        assert_eq!(round.list().len(), 5);
    }

    #[test]
    fn phase_one_distinguishes_not_in_list_from_wrong() {
        let mut a = round(&[10, 20, 30, 40], 30);
        let mut guesser = Scripted::new([11]);
        let _ = a.play(&mut guesser, &settings(4, 100));
        assert_eq!(guesser.feedback[0], "not-in-list 11");

        let mut b = round(&[10, 20, 30, 40], 30);
        let mut guesser = Scripted::new([20]);
        let _ = b.play(&mut guesser, &settings(4, 100));
        assert_eq!(guesser.feedback[0], "wrong 20");
    }

    #[test]
    fn phase_two_clamps_once_and_removes_previous_guess() {
        // Window around 50 with radius 10 keeps 41, 45, 50, 55, 60
        let mut round = round(&[1, 20, 41, 45, 50, 55, 60, 61, 90, 99], 50);
        let mut guesser = Scripted::new([45, 55, 50]);

        let outcome = round.play(&mut guesser, &settings(2, 10)).unwrap();

        assert_eq!(outcome, RoundOutcome { won: true, attempts: 3 });
        assert_eq!(guesser.turns[0], (Phase::One, 1, vec![1, 20, 41, 45, 50, 55, 60, 61, 90, 99]));
        assert_eq!(guesser.turns[1], (Phase::Two, 2, vec![41, 50, 55, 60]));
        assert_eq!(guesser.turns[2], (Phase::Two, 3, vec![41, 50, 60]));
        assert_eq!(guesser.feedback, ["wrong 45", "wrong 55", "correct"]);
    }

    #[test]
    fn phase_one_guess_outside_window_is_harmless() {
        let mut round = round(&[1, 40, 50, 60, 99], 50);
        let mut guesser = Scripted::new([1, 50]);

        let outcome = round.play(&mut guesser, &settings(3, 10)).unwrap();

        assert_eq!(outcome, RoundOutcome { won: true, attempts: 2 });
        assert_eq!(guesser.turns[1].2, vec![40, 50, 60]);
    }

    #[test]
    fn loss_triggers_exactly_below_min_list_size() {
        // Clamped list is [40, 50, 60]; min size 3 allows one phase-2 guess
        let mut round = round(&[40, 50, 60], 50);
        let mut guesser = Scripted::new([99, 40]);

        let outcome = round.play(&mut guesser, &settings(3, 10)).unwrap();

        assert_eq!(outcome, RoundOutcome { won: false, attempts: 2 });
        assert_eq!(round.state(), RoundState::Lost);
        // Size 3 == min: prompted. Size 2 == min - 1: no further prompt.
        assert_eq!(guesser.turns.len(), 2);
        assert_eq!(guesser.turns[1].2, vec![40, 50, 60]);
        assert_eq!(guesser.feedback.last().unwrap(), "too-short [50, 60]");
    }

    #[test]
    fn loss_before_any_phase_two_prompt() {
        // Clamp leaves [45, 50]; already below min size 3
        let mut round = round(&[0, 45, 50, 100], 50);
        let mut guesser = Scripted::new([0]);

        let outcome = round.play(&mut guesser, &settings(3, 10)).unwrap();

        assert_eq!(outcome, RoundOutcome { won: false, attempts: 1 });
        assert_eq!(guesser.turns.len(), 1);
    }

    #[test]
    fn not_in_list_guesses_do_not_shrink_list() {
        let mut round = round(&[40, 45, 50, 55, 60], 50);
        let mut guesser = Scripted::new([7, 8, 9, 50]);

        let outcome = round.play(&mut guesser, &settings(3, 10)).unwrap();

        assert_eq!(outcome, RoundOutcome { won: true, attempts: 4 });
        assert!(guesser.turns[1..].iter().all(|(_, _, list)| list.len() == 5));
        assert_eq!(guesser.feedback[1], "not-in-list 8");
    }

    #[test]
    fn default_scenario_never_matching_ends_in_loss() {
        let settings = Settings::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..100 {
            let mut round = Round::generate(&settings, &mut rng);
            let secret = round.secret();
            let decoys: Vec<i32> = round
                .list()
                .as_slice()
                .iter()
                .copied()
                .filter(|&n| n != secret)
                .collect();
            let mut guesser = Scripted::new(decoys);

            let outcome = round.play(&mut guesser, &settings).unwrap();

            assert!(!outcome.won);
            assert!(round.list().len() < settings.min_list_size());
            assert!(round.list().contains(secret));
        }
    }

    #[test]
    fn guesser_errors_propagate() {
        let mut round = round(&[1, 2, 3], 2);
        let mut guesser = Scripted::default();
        let err = round.play(&mut guesser, &settings(1, 10)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
