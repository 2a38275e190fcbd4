// Console prompts: profile questions and the retake confirmation

use anyhow::{bail, Result};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};

use crate::assessment::AnswerCollector;
use crate::profile::UserProfile;

const MAX_AGE: u32 = 150;

/// Parse an optional age. Blank input means "not given".
pub fn parse_age(input: &str) -> Result<Option<u32>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(age) if age <= MAX_AGE => Ok(Some(age)),
        _ => Err(format!(
            "Invalid age {:?}. Enter a whole number up to {} or leave it blank.",
            trimmed, MAX_AGE
        )),
    }
}

/// Whether a retake answer means yes
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn strip_newline(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Line-oriented terminal I/O shared by every prompt in a run
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self
            .read_raw()?
            .map(|raw| strip_newline(&String::from_utf8_lossy(&raw)).to_string()))
    }

    /// Print `prompt` and read the answer, asking again until it is UTF-8 text
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", prompt.magenta())?;
            self.output.flush()?;

            let Some(raw) = self.read_raw()? else {
                return Ok(None);
            };
            match String::from_utf8(raw) {
                Ok(line) => return Ok(Some(strip_newline(&line).to_string())),
                Err(_) => writeln!(self.output, "{}", "Input is not valid text.".red())?,
            }
        }
    }

    fn read_raw(&mut self) -> Result<Option<Vec<u8>>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(raw))
    }

    /// Collect name, email and age
    pub fn ask_profile(&mut self) -> Result<UserProfile> {
        let name = loop {
            match self.ask("Enter your name: ")? {
                Some(name) if !name.trim().is_empty() => break name.trim().to_string(),
                Some(_) => writeln!(self.output, "{}", "Name cannot be empty.".red())?,
                None => bail!("Input closed while reading name"),
            }
        };

        let email = match self.ask("Enter your email (optional): ")? {
            Some(email) if !email.trim().is_empty() => Some(email.trim().to_string()),
            Some(_) => None,
            None => bail!("Input closed while reading email"),
        };

        let age = loop {
            let Some(line) = self.ask("Enter your age (optional): ")? else {
                bail!("Input closed while reading age");
            };
            match parse_age(&line) {
                Ok(age) => break age,
                Err(message) => writeln!(self.output, "{}", message.red())?,
            }
        };

        Ok(UserProfile { name, email, age })
    }

    /// Ask whether to run the whole test again. End of input means no.
    pub fn confirm_retake(&mut self) -> Result<bool> {
        writeln!(self.output)?;
        write!(self.output, "{}", "Retake the test? (y/n): ".green())?;
        self.output.flush()?;
        let answer = self.read_line()?;
        writeln!(self.output)?;
        Ok(answer.as_deref().map(is_yes).unwrap_or(false))
    }

    /// An answer collector borrowing this console's streams
    pub fn collector(&mut self) -> AnswerCollector<&mut R, &mut W> {
        AnswerCollector::new(&mut self.input, &mut self.output)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
