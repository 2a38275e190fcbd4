// Assessment session: walks the bank in order and accumulates the tally

use std::io::{self, BufRead, Write};

use super::collector::{AnswerCollector, Choice};
use super::question::{Question, QuestionBank};
use super::tally::{TraitLetter, TraitTally};
use crate::errors::AssessmentError;

/// One pass through the question bank.
///
/// The position only advances when an answer is recorded, so a rejected
/// input leaves both the position and the tally untouched. Every session
/// starts from a zeroed tally.
pub struct Assessment<'a> {
    bank: &'a QuestionBank,
    tally: TraitTally,
    position: usize,
}

impl<'a> Assessment<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            tally: TraitTally::new(),
            position: 0,
        }
    }

    /// The question waiting for an answer, if any
    pub fn current(&self) -> Option<&'a Question> {
        self.bank.get(self.position)
    }

    /// Number of questions answered so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.bank.len()
    }

    /// Record an answer to the current question and move on.
    ///
    /// Returns the scored letter, or `None` when the bank is exhausted.
    pub fn answer(&mut self, choice: Choice) -> Option<TraitLetter> {
        let letter = choice.trait_for(self.current()?);
        self.record(letter);
        Some(letter)
    }

    fn record(&mut self, letter: TraitLetter) {
        self.tally.increment(letter);
        self.position += 1;
    }

    pub fn tally(&self) -> &TraitTally {
        &self.tally
    }

    /// Hand over the final tally
    pub fn finish(self) -> TraitTally {
        self.tally
    }

    /// Ask every remaining question through `collector`.
    ///
    /// `on_step` gets the collector's output and (answered, total) before
    /// each question and once more after the last one.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        collector: &mut AnswerCollector<R, W>,
        mut on_step: impl FnMut(&mut W, usize, usize) -> io::Result<()>,
    ) -> Result<TraitTally, AssessmentError> {
        let total = self.total();
        while let Some(question) = self.current() {
            on_step(collector.output(), self.position, total)?;
            let letter = collector.collect(question, self.position + 1, total)?;
            self.record(letter);
        }
        on_step(collector.output(), total, total)?;
        Ok(self.finish())
    }
}
