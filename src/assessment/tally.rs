// Trait letters, dimensions and the per-letter answer tally

use serde::{Deserialize, Serialize};
use std::fmt;

/// One pole of a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraitLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl TraitLetter {
    /// All letters in dimension order, first pole before second
    pub const ALL: [TraitLetter; 8] = [
        TraitLetter::E,
        TraitLetter::I,
        TraitLetter::S,
        TraitLetter::N,
        TraitLetter::T,
        TraitLetter::F,
        TraitLetter::J,
        TraitLetter::P,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Self::E),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'N' => Some(Self::N),
            'T' => Some(Self::T),
            'F' => Some(Self::F),
            'J' => Some(Self::J),
            'P' => Some(Self::P),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            Self::E | Self::I => Dimension::Mind,
            Self::S | Self::N => Dimension::Energy,
            Self::T | Self::F => Dimension::Nature,
            Self::J | Self::P => Dimension::Tactics,
        }
    }

    /// The other pole of the same dimension
    pub fn opposite(self) -> Self {
        let (first, second) = self.dimension().poles();
        if self == first {
            second
        } else {
            first
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TraitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the four bipolar axes, in type-code order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Extraversion (E) / Introversion (I)
    Mind,
    /// Sensing (S) / Intuition (N)
    Energy,
    /// Thinking (T) / Feeling (F)
    Nature,
    /// Judging (J) / Perceiving (P)
    Tactics,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Mind,
        Dimension::Energy,
        Dimension::Nature,
        Dimension::Tactics,
    ];

    /// The two poles. The first one wins ties.
    pub fn poles(self) -> (TraitLetter, TraitLetter) {
        match self {
            Self::Mind => (TraitLetter::E, TraitLetter::I),
            Self::Energy => (TraitLetter::S, TraitLetter::N),
            Self::Nature => (TraitLetter::T, TraitLetter::F),
            Self::Tactics => (TraitLetter::J, TraitLetter::P),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Mind => "E/I",
            Self::Energy => "S/N",
            Self::Nature => "T/F",
            Self::Tactics => "J/P",
        }
    }
}

/// Per-letter answer counts for one session.
///
/// Counters only ever go up; a retake starts from a new, zeroed tally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitTally {
    counts: [u32; 8],
}

impl TraitTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point to `letter`
    pub fn increment(&mut self, letter: TraitLetter) {
        self.counts[letter.index()] += 1;
    }

    /// Add one point to the letter named by `c`. Characters that are not
    /// trait letters are ignored.
    pub fn increment_char(&mut self, c: char) {
        match TraitLetter::from_char(c) {
            Some(letter) => self.increment(letter),
            None => tracing::debug!("Ignoring increment for non-trait letter {:?}", c),
        }
    }

    pub fn get(&self, letter: TraitLetter) -> u32 {
        self.counts[letter.index()]
    }

    /// All eight counts in dimension order
    pub fn counts(&self) -> [(TraitLetter, u32); 8] {
        TraitLetter::ALL.map(|letter| (letter, self.get(letter)))
    }

    /// Counts for one dimension as (first pole, second pole)
    pub fn pair(&self, dimension: Dimension) -> (u32, u32) {
        let (first, second) = dimension.poles();
        (self.get(first), self.get(second))
    }

    /// Number of answers recorded so far
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_zeroed() {
        let tally = TraitTally::new();
        assert_eq!(tally.total(), 0);
        assert!(tally.counts().iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_increment_adds_exactly_one() {
        let mut tally = TraitTally::new();
        tally.increment(TraitLetter::N);
        tally.increment(TraitLetter::N);
        tally.increment(TraitLetter::F);
        assert_eq!(tally.get(TraitLetter::N), 2);
        assert_eq!(tally.get(TraitLetter::F), 1);
        assert_eq!(tally.get(TraitLetter::S), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_increment_char_ignores_unknown_letters() {
        let mut tally = TraitTally::new();
        tally.increment_char('x');
        tally.increment_char('?');
        tally.increment_char('j');
        assert_eq!(tally.total(), 1);
        assert_eq!(tally.get(TraitLetter::J), 1);
    }

    #[test]
    fn test_opposites_share_a_dimension() {
        for letter in TraitLetter::ALL {
            let other = letter.opposite();
            assert_ne!(letter, other);
            assert_eq!(letter.dimension(), other.dimension());
            assert_eq!(other.opposite(), letter);
        }
    }

    #[test]
    fn test_pair_follows_pole_order() {
        let mut tally = TraitTally::new();
        tally.increment(TraitLetter::P);
        assert_eq!(tally.pair(Dimension::Tactics), (0, 1));
    }
}
