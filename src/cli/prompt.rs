// Retry-until-valid prompting over any reader and writer
// Author: Gabriel Demetrios Lafis

use std::io::{self, BufRead, Write};

use crate::utils::{normalize_choice, parse_yes_no};
use super::title_case;

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Ask until the answer is one of `valid` (lower-case). Returns the normalized answer.
    pub fn choose(&mut self, prompt: &str, valid: &[&str]) -> io::Result<String> {
        loop {
            let answer = self.ask(prompt)?;

            if let Some(choice) = normalize_choice(&answer, valid) {
                writeln!(self.output, "Great! The chosen entry is: {}\n", title_case(&choice))?;
                return Ok(choice);
            }

            writeln!(self.output, "Sorry... it seems like you're not typing a correct entry.")?;
            writeln!(self.output, "Let's try again!")?;
        }
    }

    /// Ask a yes/no question until it gets a yes or a no
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.ask(prompt)?;

            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(yes);
            }

            writeln!(self.output, "Invalid entry, please enter \"Yes\" or \"No\"")?;
        }
    }

    /// Ask once; anything but a yes counts as no
    pub fn answered_yes(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(parse_yes_no(&answer) == Some(true))
    }

    /// Print a prompt and read one line. End of input is an error.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Writer the prompter prints to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
