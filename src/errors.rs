// Error types and user-facing error formatting

use thiserror::Error;

/// Failures while collecting answers from the user
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// Input outside the two-way choice domain. Recovered by re-prompting.
    #[error("Choice must be 1 or 2 (got {0:?}).")]
    InvalidChoice(String),

    /// The input stream ended before a valid answer was given
    #[error("Input closed before question {question} was answered")]
    InputClosed { question: usize },

    #[error("Failed to read answer: {0}")]
    Io(#[from] std::io::Error),
}

/// A string that is not one of the 16 four-letter type codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Personality code must be exactly 4 letters, got {0:?}")]
    Length(String),

    #[error("Invalid letter {letter:?} at position {position} of {code:?} (expected one of {expected})")]
    Letter {
        code: String,
        position: usize,
        letter: char,
        expected: &'static str,
    },
}

/// Malformed built-in reference data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to parse {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },

    #[error("Question {index} pairs {positive:?} with {negative:?}, which are not opposite poles of one dimension")]
    MismatchedPair {
        index: usize,
        positive: char,
        negative: char,
    },

    #[error("Question bank is empty")]
    EmptyBank,

    #[error("Question bank has no questions for the {0} dimension")]
    UncoveredDimension(&'static str),

    #[error("Invalid type code in {source_name}: {error}")]
    Code {
        source_name: &'static str,
        error: CodeError,
    },

    #[error("{code} lists {count} compatible types (at most 3 allowed)")]
    TooManyCompatible { code: String, count: usize },
}

/// Append an indented suggestion block to an error message
pub fn wrap_error_with_suggestion(message: impl Into<String>, suggestion: &str) -> String {
    let mut out = message.into();
    out.push_str("\n\n");
    for line in suggestion.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}
