// Assessment module
// Question bank, answer collection, tally and type resolution

mod collector;
mod question;
mod resolver;
mod session;
mod tally;

pub use collector::{parse_choice, AnswerCollector, Choice};
pub use question::{Question, QuestionBank};
pub use resolver::{resolve, resolve_dimension, PersonalityCode};
pub use session::Assessment;
pub use tally::{Dimension, TraitLetter, TraitTally};
