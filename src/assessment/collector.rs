// Answer collection
//
// Presents one question, reads a 1/2 choice and maps it to a trait letter.
// Invalid input is reported and the same question is asked again; only a
// closed input stream escapes as an error.

use crossterm::style::Stylize;
use std::io::{BufRead, Write};
use tracing::debug;

use super::question::Question;
use super::tally::TraitLetter;
use crate::errors::AssessmentError;

/// The two answers a question accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Agree,
    Disagree,
}

impl Choice {
    /// The letter this answer scores for `question`
    pub fn trait_for(self, question: &Question) -> TraitLetter {
        match self {
            Choice::Agree => question.positive(),
            Choice::Disagree => question.negative(),
        }
    }
}

/// Parse one line of user input into a choice
pub fn parse_choice(input: &str) -> Result<Choice, AssessmentError> {
    match input.trim() {
        "1" => Ok(Choice::Agree),
        "2" => Ok(Choice::Disagree),
        other => Err(AssessmentError::InvalidChoice(other.to_string())),
    }
}

/// Reads answers from `input` and writes prompts to `output`
pub struct AnswerCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> AnswerCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` until a valid choice arrives and return the scored letter.
    ///
    /// `number` is the 1-based position shown to the user.
    pub fn collect(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> Result<TraitLetter, AssessmentError> {
        self.read_choice(question, number, total)
            .map(|choice| choice.trait_for(question))
    }

    /// Ask `question` until the user answers 1 or 2
    pub fn read_choice(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> Result<Choice, AssessmentError> {
        loop {
            self.present(question, number, total)?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(AssessmentError::InputClosed { question: number });
            }
            // Bytes that are not UTF-8 can never spell 1 or 2
            let line = String::from_utf8_lossy(&raw);

            match parse_choice(&line) {
                Ok(choice) => {
                    writeln!(self.output)?;
                    return Ok(choice);
                }
                Err(e) => {
                    debug!(question = number, input = line.trim(), "Rejected answer");
                    writeln!(self.output, "{}\n", e.to_string().red())?;
                }
            }
        }
    }

    fn present(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> Result<(), AssessmentError> {
        writeln!(
            self.output,
            "{}",
            format!("Question {} of {}:", number, total).green()
        )?;
        writeln!(self.output, "{}", question.prompt().cyan())?;
        writeln!(self.output, "  1. Agree ({})", question.positive())?;
        writeln!(self.output, "  2. Disagree ({})", question.negative())?;
        write!(self.output, "{}", "Your choice (1-2): ".yellow())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
