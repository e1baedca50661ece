//! The human player: guesses come from the prompt, feedback goes to the screen

use super::terminal::Console;
use crate::game::{Feedback, Guesser, Phase, Turn};
use std::io::{self, BufRead, Write};

const GUESS_LABEL: &str = "Enter your guess for the lucky number";

impl<R: BufRead, W: Write> Guesser for Console<R, W> {
    fn guess(&mut self, turn: Turn<'_>) -> io::Result<i32> {
        match turn.phase {
            Phase::One => {
                self.print_list("Here is the lucky list", turn.list)?;
                self.blank_line()?;
            }
            Phase::Two => self.print_list(
                &format!("This is attempt #{}. The new list is", turn.attempt),
                turn.list,
            )?,
        }
        self.prompt_int(GUESS_LABEL)
    }

    fn feedback(&mut self, feedback: Feedback<'_>) -> io::Result<()> {
        match feedback {
            Feedback::Correct => self.ok("Correct!"),
            Feedback::NotInList(guess) => {
                self.error(format!("Wrong. {guess} is not even in the list."))
            }
            Feedback::Wrong(_) => self.error("Wrong."),
            Feedback::ListTooShort(list) => self.warning(format!(
                "The list is now too short for game to continue: {list}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NumberList;
    use std::io::Cursor;

    #[test]
    fn phase_two_prompt_shows_attempt_number() {
        let list = NumberList::from_values([4, 5, 6]);
        let mut console = Console::new(Cursor::new(b"5\n".to_vec()), Vec::new());

        let guess = console
            .guess(Turn {
                phase: Phase::Two,
                attempt: 3,
                list: &list,
            })
            .unwrap();
        assert_eq!(guess, 5);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("This is attempt #3. The new list is:\n[4, 5, 6]"));
        assert!(out.contains(GUESS_LABEL));
    }

    #[test]
    fn feedback_messages() {
        let list = NumberList::from_values([1, 2]);
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        console.feedback(Feedback::Correct).unwrap();
        console.feedback(Feedback::NotInList(77)).unwrap();
        console.feedback(Feedback::Wrong(2)).unwrap();
        console.feedback(Feedback::ListTooShort(&list)).unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Correct!"));
        assert!(out.contains("Wrong. 77 is not even in the list."));
        assert!(out.contains("Wrong.\n"));
        assert!(out.contains("too short for game to continue: [1, 2]"));
    }
}
