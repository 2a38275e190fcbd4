// ASCII chart of trait scores

use crate::assessment::TraitTally;

pub trait ChartRenderer {
    fn render(&self, tally: &TraitTally) -> String;
}

/// One `#` per point, one row per letter in dimension order
pub struct AsciiChart;

impl ChartRenderer for AsciiChart {
    fn render(&self, tally: &TraitTally) -> String {
        let mut out = String::from("Personality Scores Chart:\n");
        for (letter, count) in tally.counts() {
            out.push_str(&format!(
                "{} : {} ({})\n",
                letter,
                "#".repeat(count as usize),
                count
            ));
        }
        out
    }
}
