//! Line-based prompting and status output
//!
//! `Console` works over any `BufRead`/`Write` pair so whole sessions can be scripted in
//! tests. Invalid input is answered with an error line and asked for again, with no
//! retry limit; only I/O failures and end of input escape.

use super::indicator::Indicator;
use crate::core::NumberList;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Terminal front-end for one game session
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process' standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (used to inspect scripted sessions)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line prefixed with `indicator`
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn say(&mut self, indicator: Indicator, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{indicator} {message}")
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn info(&mut self, message: impl Display) -> io::Result<()> {
        self.say(Indicator::Info, message)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn ok(&mut self, message: impl Display) -> io::Result<()> {
        self.say(Indicator::Ok, message)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        self.say(Indicator::Warning, message)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        self.say(Indicator::Error, message)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn fatal(&mut self, message: impl Display) -> io::Result<()> {
        self.say(Indicator::Fatal, message)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Write text as is, without an indicator
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn write_block(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print a caption on its own line followed by the list
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn print_list(&mut self, caption: &str, list: &NumberList) -> io::Result<()> {
        write!(self.output, "\n{caption}:\n{list}\n")
    }

    /// Ask a question and return the answer without its line ending
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` once the input is closed, or any underlying I/O error.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{} {label}: ", Indicator::Question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt
            writeln!(self.output)?;
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer, printing each rejection as an error line
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures; invalid answers are retried forever.
    pub fn prompt_until<T, E: Display>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> io::Result<T> {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => self.error(reason)?,
            }
        }
    }

    /// Ask for an integer
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures.
    pub fn prompt_int(&mut self, label: &str) -> io::Result<i32> {
        self.prompt_until(label, parse_int)
    }

    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures.
    pub fn prompt_bool(&mut self, label: &str) -> io::Result<bool> {
        self.prompt_until(&format!("{label} (y/n)"), parse_yes_no)
    }
}

/// Parse an optionally signed integer, ignoring surrounding whitespace
///
/// # Errors
///
/// Returns a message for the player if the input is not an integer.
pub fn parse_int(input: &str) -> Result<i32, &'static str> {
    input
        .trim()
        .parse()
        .map_err(|_| "Not an integer. Try again!")
}

/// Parse `y`/`yes`/`n`/`no` in any letter case
///
/// # Errors
///
/// Returns a message for the player for any other answer.
pub fn parse_yes_no(input: &str) -> Result<bool, &'static str> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Enter \"y\" or \"n\" for yes and no, respectively."),
    }
}
