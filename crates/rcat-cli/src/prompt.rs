//! Line-oriented prompts over any reader/writer pair.
//!
//! [`Prompter`] is generic over [`BufRead`] and [`Write`] so the menu can run
//! against the real console or against scripted input in tests.

use std::io::{BufRead, Write};

use rcat_core::Ingredient;

use crate::error::PromptError;

/// Reads answers from `R` and writes prompts to `W`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    done_sentinel: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter that ends ingredient entry on `done_sentinel`.
    pub fn new(input: R, output: W, done_sentinel: impl Into<String>) -> Self {
        Self {
            input,
            output,
            done_sentinel: done_sentinel.into(),
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Shows `message` and returns the answer without its line ending.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled
    /// answer is handled like any other unusable one.
    pub fn line(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(PromptError::Closed);
        }
        let answer = String::from_utf8_lossy(&raw);
        Ok(answer.trim_end_matches(['\n', '\r']).to_owned())
    }

    /// Like [`line`](Self::line), but trims the answer and asks again until
    /// it is not blank.
    pub fn required_line(&mut self, message: &str) -> Result<String, PromptError> {
        loop {
            let answer = self.line(message)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_owned());
            }
            self.say("A value is required.")?;
        }
    }

    /// Asks for a 1-based number between 1 and `count` and returns it as a
    /// 0-based index. Anything else is answered with a hint and asked again.
    pub fn choose(&mut self, message: &str, count: usize) -> Result<usize, PromptError> {
        loop {
            let answer = self.line(message)?;
            if let Some(index) = parse_choice(&answer, count) {
                return Ok(index);
            }
            self.say("Please enter a valid number.")?;
        }
    }

    /// Collects ingredient name/quantity pairs until the sentinel is entered.
    ///
    /// `subject` names what is being entered, e.g. `"ingredient"` or
    /// `"new ingredient"`.
    pub fn ingredients(&mut self, subject: &str) -> Result<Vec<Ingredient>, PromptError> {
        let name_prompt = format!(
            "Enter {subject} name (or '{}' to finish): ",
            self.done_sentinel
        );
        let mut ingredients = Vec::new();
        loop {
            let name = self.line(&name_prompt)?;
            if name.trim().eq_ignore_ascii_case(&self.done_sentinel) {
                return Ok(ingredients);
            }
            let quantity = self.line("Enter ingredient quantity: ")?;
            ingredients.push(Ingredient::new(name, quantity));
        }
    }
}

/// Parses a 1-based menu number into a 0-based index.
fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    answer
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=count).contains(choice))
        .map(|choice| choice - 1)
}
