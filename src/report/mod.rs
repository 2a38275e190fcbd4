// Report module
// Composition of the final report and its plain-text file

mod composer;
mod writer;

pub use composer::{Report, ReportComposer};
pub use writer::{render_text, report_file_name, ReportWriter};
