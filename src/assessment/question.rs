// Question bank
//
// The bank is embedded at build time from data/questions.toml. Item order
// is the presentation order and never changes between runs.

use serde::{Deserialize, Serialize};

use super::tally::{Dimension, TraitLetter};
use crate::errors::DataError;

/// A forced-choice statement bound to one dimension.
///
/// Agreeing scores `positive`, disagreeing scores `negative`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    dimension: Dimension,
    positive: TraitLetter,
    negative: TraitLetter,
}

impl Question {
    /// Build a question, rejecting pairs that are not opposite poles
    pub fn new(
        prompt: impl Into<String>,
        positive: TraitLetter,
        negative: TraitLetter,
    ) -> Result<Self, DataError> {
        if positive.opposite() != negative {
            return Err(DataError::MismatchedPair {
                index: 0,
                positive: positive.as_char(),
                negative: negative.as_char(),
            });
        }
        Ok(Self {
            prompt: prompt.into(),
            dimension: positive.dimension(),
            positive,
            negative,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn positive(&self) -> TraitLetter {
        self.positive
    }

    pub fn negative(&self) -> TraitLetter {
        self.negative
    }
}

#[derive(Deserialize)]
struct QuestionFile {
    #[serde(rename = "question")]
    questions: Vec<QuestionEntry>,
}

#[derive(Deserialize)]
struct QuestionEntry {
    text: String,
    positive: TraitLetter,
    negative: TraitLetter,
}

/// Fixed, ordered sequence of questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load the built-in bank
    pub fn load() -> Result<Self, DataError> {
        Self::parse(include_str!("../../data/questions.toml"))
    }

    fn parse(source: &str) -> Result<Self, DataError> {
        let file: QuestionFile = toml::from_str(source).map_err(|e| DataError::Parse {
            source_name: "questions.toml",
            message: e.to_string(),
        })?;

        let questions = file
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Question::new(entry.text, entry.positive, entry.negative).map_err(|e| match e {
                    DataError::MismatchedPair {
                        positive, negative, ..
                    } => DataError::MismatchedPair {
                        index,
                        positive,
                        negative,
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let bank = Self::from_questions(questions)?;
        for dimension in Dimension::ALL {
            if bank.iter().all(|q| q.dimension() != dimension) {
                return Err(DataError::UncoveredDimension(dimension.name()));
            }
        }
        Ok(bank)
    }

    /// Build a bank from an explicit list, keeping its order
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, DataError> {
        if questions.is_empty() {
            return Err(DataError::EmptyBank);
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Questions that ask about `dimension`, in bank order
    pub fn for_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.dimension() == dimension)
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
