// Type resolution: tally -> four-letter code

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::tally::{Dimension, TraitLetter, TraitTally};
use crate::errors::CodeError;

/// One of the 16 four-letter type codes, e.g. `INTJ`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonalityCode([TraitLetter; 4]);

impl PersonalityCode {
    /// Letters in dimension order
    pub fn letters(&self) -> [TraitLetter; 4] {
        self.0
    }

    /// The letter chosen for `dimension`
    pub fn letter(&self, dimension: Dimension) -> TraitLetter {
        self.0[dimension as usize]
    }

    /// All 16 codes, E before I, S before N, T before F, J before P
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(16);
        for mind in poles(Dimension::Mind) {
            for energy in poles(Dimension::Energy) {
                for nature in poles(Dimension::Nature) {
                    for tactics in poles(Dimension::Tactics) {
                        codes.push(Self([mind, energy, nature, tactics]));
                    }
                }
            }
        }
        codes
    }
}

fn poles(dimension: Dimension) -> [TraitLetter; 2] {
    let (first, second) = dimension.poles();
    [first, second]
}

impl fmt::Display for PersonalityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for PersonalityCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() != 4 {
            return Err(CodeError::Length(s.to_string()));
        }

        let mut letters = [TraitLetter::E; 4];
        for (position, (c, dimension)) in chars.iter().zip(Dimension::ALL).enumerate() {
            letters[position] = TraitLetter::from_char(*c)
                .filter(|letter| letter.dimension() == dimension)
                .ok_or_else(|| CodeError::Letter {
                    code: trimmed.to_string(),
                    position: position + 1,
                    letter: *c,
                    expected: dimension.name(),
                })?;
        }
        Ok(Self(letters))
    }
}

impl Serialize for PersonalityCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PersonalityCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Pick the winning letter of one dimension. Ties go to the first pole.
pub fn resolve_dimension(tally: &TraitTally, dimension: Dimension) -> TraitLetter {
    let (first, second) = dimension.poles();
    if tally.get(second) > tally.get(first) {
        second
    } else {
        first
    }
}

/// Reduce a finished tally to its type code
pub fn resolve(tally: &TraitTally) -> PersonalityCode {
    let code = PersonalityCode(Dimension::ALL.map(|d| resolve_dimension(tally, d)));
    tracing::debug!(%code, answers = tally.total(), "Resolved personality code");
    code
}
