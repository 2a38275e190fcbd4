// Typefinder - four-letter personality type questionnaire
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use typefinder::assessment::{PersonalityCode, QuestionBank};
use typefinder::catalog::{CompatibilityTable, PersonalityCatalog};
use typefinder::cli::{handle_command, App, Command, Console, OutputFormat};
use typefinder::config::constants::OUTPUT_DIR_ENV;
use typefinder::config::{finalize_config, load_config, load_config_from, Config};
use typefinder::logging::{init_tracing, HistoryLogger};
use typefinder::report::ReportComposer;

#[derive(Parser, Debug)]
#[command(name = "typefinder")]
#[command(about = "Find your four-letter personality type", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.typefinder/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for reports, history and the profile registry
    #[arg(long, value_name = "DIR", env = OUTPUT_DIR_ENV)]
    output_dir: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Hide the score chart
    #[arg(long)]
    no_chart: bool,

    /// Print the on-screen report as JSON
    #[arg(long)]
    json: bool,

    /// Describe a type code and exit
    #[arg(long, value_name = "CODE", conflicts_with_all = ["history", "types"])]
    lookup: Option<PersonalityCode>,

    /// List recorded results and exit
    #[arg(long, conflicts_with = "types")]
    history: bool,

    /// List all sixteen type codes and exit
    #[arg(long)]
    types: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = resolve_config(&cli)?;
    if !config.display.color {
        crossterm::style::force_color_output(false);
    }

    let catalog = PersonalityCatalog::builtin().context("Failed to load personality catalog")?;
    let compatibility =
        CompatibilityTable::builtin().context("Failed to load compatibility table")?;

    let command = if let Some(code) = cli.lookup {
        Some(Command::Lookup(code))
    } else if cli.history {
        Some(Command::History)
    } else if cli.types {
        Some(Command::Types)
    } else {
        None
    };

    if let Some(command) = command {
        let history = HistoryLogger::new(config.history_path());
        let output = handle_command(command, &catalog, &compatibility, &history)?;
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
        return Ok(ExitCode::SUCCESS);
    }

    let bank = QuestionBank::load().context("Failed to load question bank")?;
    let composer = ReportComposer::new(&catalog, &compatibility);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut app = App::new(&config, &bank, composer, format);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let summary = app.run(&mut console)?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", "Thank you for taking the test!".green())?;

    if summary.save_failures > 0 {
        tracing::warn!(
            failures = summary.save_failures,
            "Some results could not be saved"
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    if cli.no_color {
        config.display.color = false;
    }
    if cli.no_progress {
        config.display.progress_bar = false;
    }
    if cli.no_chart {
        config.display.chart = false;
    }

    finalize_config(config, cli.output_dir.clone())
}
