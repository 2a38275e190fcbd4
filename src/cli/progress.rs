// Progress reporting between questions

use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::config::constants::PROGRESS_BAR_WIDTH;

/// Shows how far through the questionnaire the user is
pub trait ProgressReporter {
    fn report(&mut self, out: &mut dyn Write, current: usize, total: usize) -> io::Result<()>;
}

/// `[=====>      ] 42 %`
pub struct ProgressBar {
    width: usize,
}

impl ProgressBar {
    pub fn new(width: usize) -> Self {
        Self { width: width.max(1) }
    }

    /// Uncolored bar text for `current` of `total`
    pub fn render(&self, current: usize, total: usize) -> String {
        let ratio = if total == 0 {
            1.0
        } else {
            (current.min(total) as f64) / (total as f64)
        };
        let filled = (ratio * self.width as f64) as usize;

        let mut bar = String::with_capacity(self.width + 8);
        bar.push('[');
        for i in 0..self.width {
            bar.push(if i < filled {
                '='
            } else if i == filled {
                '>'
            } else {
                ' '
            });
        }
        bar.push_str("] ");
        bar.push_str(&format!("{} %", (ratio * 100.0) as u32));
        bar
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(PROGRESS_BAR_WIDTH)
    }
}

impl ProgressReporter for ProgressBar {
    fn report(&mut self, out: &mut dyn Write, current: usize, total: usize) -> io::Result<()> {
        writeln!(out, "{}", self.render(current, total).blue())
    }
}

/// Reports nothing
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _out: &mut dyn Write, _current: usize, _total: usize) -> io::Result<()> {
        Ok(())
    }
}
