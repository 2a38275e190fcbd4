// CLI module
// Terminal shell around the assessment: prompts, progress, chart, report

mod app;
mod chart;
mod commands;
mod progress;
mod prompt;
mod render;

pub use app::{App, OutputFormat, RunSummary};
pub use chart::{AsciiChart, ChartRenderer};
pub use commands::{handle_command, Command};
pub use progress::{NoProgress, ProgressBar, ProgressReporter};
pub use prompt::{is_yes, parse_age, Console};
pub use render::{render_intro, render_report, render_type_card};
