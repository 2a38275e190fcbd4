// Interactive test loop
//
// profile -> questions -> report on screen -> files -> retake?

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use super::chart::{AsciiChart, ChartRenderer};
use super::progress::{NoProgress, ProgressBar, ProgressReporter};
use super::prompt::Console;
use super::render::{render_intro, render_report};
use crate::assessment::{Assessment, QuestionBank, TraitTally};
use crate::config::Config;
use crate::logging::HistoryLogger;
use crate::profile::ProfileRegistry;
use crate::report::{Report, ReportComposer, ReportWriter};

/// How the on-screen report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What happened over all runs of one program invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Runs that produced a report
    pub completed: usize,
    /// Runs whose report, history or profile could not be saved
    pub save_failures: usize,
    /// Report files written
    pub saved: Vec<PathBuf>,
}

pub struct App<'a> {
    bank: &'a QuestionBank,
    composer: ReportComposer<'a>,
    writer: ReportWriter,
    history: HistoryLogger,
    profiles: ProfileRegistry,
    progress: Box<dyn ProgressReporter + 'a>,
    chart: Option<Box<dyn ChartRenderer + 'a>>,
    format: OutputFormat,
}

impl<'a> App<'a> {
    pub fn new(
        config: &Config,
        bank: &'a QuestionBank,
        composer: ReportComposer<'a>,
        format: OutputFormat,
    ) -> Self {
        let progress: Box<dyn ProgressReporter> = if config.display.progress_bar {
            Box::new(ProgressBar::default())
        } else {
            Box::new(NoProgress)
        };
        let chart: Option<Box<dyn ChartRenderer>> = if config.display.chart {
            Some(Box::new(AsciiChart))
        } else {
            None
        };

        Self {
            bank,
            composer,
            writer: ReportWriter::new(config.output_dir.clone()),
            history: HistoryLogger::new(config.history_path()),
            profiles: ProfileRegistry::new(config.profiles_path()),
            progress,
            chart,
            format,
        }
    }

    /// Run the test until the user declines a retake
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        loop {
            write!(console.output(), "{}", render_intro(self.bank.len()))?;
            writeln!(console.output())?;

            let profile = console.ask_profile()?;
            writeln!(
                console.output(),
                "{}",
                format!("\nStarting the test for {}...\n", profile.name).magenta()
            )?;

            let tally = self.ask_questions(console)?;
            let report = self.composer.compose_from_tally(&profile, &tally);
            info!(code = %report.code(), answers = tally.total(), "Run complete");

            self.show(console, &report)?;
            summary.completed += 1;

            match self.save(&report) {
                Ok(path) => {
                    writeln!(
                        console.output(),
                        "{}",
                        format!("All details saved to {}", path.display()).yellow()
                    )?;
                    summary.saved.push(path);
                }
                Err(e) => {
                    warn!("Failed to save results: {:#}", e);
                    writeln!(console.output(), "{} {:#}", "Error:".red(), e)?;
                    summary.save_failures += 1;
                }
            }

            if !console.confirm_retake()? {
                break;
            }
        }

        Ok(summary)
    }

    /// Walk the bank with a fresh tally
    fn ask_questions<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<TraitTally> {
        let progress = &mut self.progress;
        let tally = Assessment::new(self.bank)
            .run(&mut console.collector(), |out, done, total| {
                progress.report(out, done, total)
            })
            .context("Questionnaire aborted")?;
        writeln!(console.output())?;

        Ok(tally)
    }

    fn show<R: BufRead, W: Write>(&self, console: &mut Console<R, W>, report: &Report) -> Result<()> {
        let text = match self.format {
            OutputFormat::Text => render_report(report, self.chart.as_deref()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report")? + "\n"
            }
        };
        write!(console.output(), "{}", text)?;
        console.output().flush()?;
        Ok(())
    }

    /// Report file, history line and profile row
    fn save(&self, report: &Report) -> Result<PathBuf> {
        let path = self.writer.write(report)?;
        self.history.log(&report.profile().name, report.code())?;
        self.profiles.append(report.profile(), &path)?;
        Ok(path)
    }
}
