// Integration tests: full interactive runs against in-memory streams

use anyhow::Result;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use typefinder::assessment::{resolve, PersonalityCode, QuestionBank, TraitTally};
use typefinder::catalog::{CompatibilityTable, PersonalityCatalog};
use typefinder::cli::{App, Console, OutputFormat};
use typefinder::config::Config;
use typefinder::logging::HistoryLogger;
use typefinder::profile::ProfileRegistry;
use typefinder::report::ReportComposer;

fn config_in(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

/// Profile answers followed by the same choice for every question
fn run_input(name: &str, age: &str, choice: &str, count: usize) -> String {
    format!("{}\n\n{}\n{}", name, age, format!("{}\n", choice).repeat(count))
}

/// The type a run with one repeated answer ends in
fn expected_code(bank: &QuestionBank, agree: bool) -> PersonalityCode {
    let mut tally = TraitTally::new();
    for question in bank {
        tally.increment(if agree {
            question.positive()
        } else {
            question.negative()
        });
    }
    resolve(&tally)
}

fn run_app(
    config: &Config,
    format: OutputFormat,
    input: String,
) -> (Result<typefinder::cli::RunSummary>, String) {
    let bank = QuestionBank::load().unwrap();
    let catalog = PersonalityCatalog::builtin().unwrap();
    let compat = CompatibilityTable::builtin().unwrap();
    let composer = ReportComposer::new(&catalog, &compat);

    let mut app = App::new(config, &bank, composer, format);
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let result = app.run(&mut console);
    let (_, output) = console.into_inner();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_retake_writes_every_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path());
    let bank = QuestionBank::load()?;

    let mut input = run_input("Ada", "36", "1", bank.len());
    input.push_str("y\n");
    input.push_str(&run_input("Bob", "", "2", bank.len()));
    input.push_str("n\n");

    let (result, output) = run_app(&config, OutputFormat::Text, input);
    let summary = result?;

    assert_eq!(summary.completed, 2);
    assert_eq!(summary.save_failures, 0);
    assert_eq!(
        summary.saved,
        vec![
            dir.path().join("Ada_personality.txt"),
            dir.path().join("Bob_personality.txt")
        ]
    );

    let ada_code = expected_code(&bank, true);
    let bob_code = expected_code(&bank, false);
    assert!(output.contains(&format!("Ada, your personality type is: {}", ada_code)));
    assert!(output.contains(&format!("Bob, your personality type is: {}", bob_code)));
    assert!(output.contains("Personality Scores Chart:"));

    let ada_report = fs::read_to_string(dir.path().join("Ada_personality.txt"))?;
    assert!(ada_report.contains("Age: 36"));
    assert!(ada_report.contains(&ada_code.to_string()));

    let history = HistoryLogger::new(config.history_path()).read()?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].name, "Ada");
    assert_eq!(history[0].code, ada_code);
    assert_eq!(history[1].code, bob_code);

    let rows = ProfileRegistry::new(config.profiles_path()).read_all()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Ada");
    assert_eq!(rows[0].age, "36");
    assert_eq!(rows[1].age, "");
    Ok(())
}

#[test]
fn test_invalid_choice_mid_run_repeats_the_question() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path());
    let bank = QuestionBank::load()?;

    let mut input = String::from("Ada\n\n\n");
    for i in 0..bank.len() {
        if i == bank.len() / 2 {
            input.push_str("3\n");
        }
        input.push_str("1\n");
    }
    input.push_str("n\n");

    let (result, output) = run_app(&config, OutputFormat::Text, input);
    let summary = result?;
    assert_eq!(summary.completed, 1);
    assert_eq!(output.matches("Choice must be 1 or 2").count(), 1);

    let repeated = format!("Question {} of {}:", bank.len() / 2 + 1, bank.len());
    assert_eq!(output.matches(repeated.as_str()).count(), 2);

    let history = HistoryLogger::new(config.history_path()).read()?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].code, expected_code(&bank, true));
    Ok(())
}

#[test]
fn test_non_utf8_profile_answer_is_asked_again() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path());
    let bank = QuestionBank::load()?;

    let mut input = b"\xe9\n".to_vec();
    input.extend_from_slice(run_input("Ada", "", "1", bank.len()).as_bytes());

    let mut console = Console::new(Cursor::new(input), Vec::new());
    let catalog = PersonalityCatalog::builtin()?;
    let compat = CompatibilityTable::builtin()?;
    let mut app = App::new(
        &config,
        &bank,
        ReportComposer::new(&catalog, &compat),
        OutputFormat::Text,
    );
    let summary = app.run(&mut console)?;

    assert_eq!(summary.saved, vec![dir.path().join("Ada_personality.txt")]);
    Ok(())
}

#[test]
fn test_closed_input_after_report_ends_cleanly() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path());
    let bank = QuestionBank::load()?;

    let (result, _) = run_app(
        &config,
        OutputFormat::Text,
        run_input("Ada", "", "1", bank.len()),
    );
    assert_eq!(result?.completed, 1);
    Ok(())
}

#[test]
fn test_closed_input_mid_questionnaire_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path());

    let (result, _) = run_app(&config, OutputFormat::Text, run_input("Ada", "", "1", 5));
    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("Questionnaire aborted"));
    assert!(!dir.path().join("Ada_personality.txt").exists());
    Ok(())
}

#[test]
fn test_save_failure_is_reported_and_run_continues() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "")?;
    let config = config_in(&blocker);
    let bank = QuestionBank::load()?;

    let mut input = run_input("Ada", "", "1", bank.len());
    input.push_str("yes\n");
    input.push_str(&run_input("Ada", "", "2", bank.len()));
    input.push_str("no\n");

    let (result, output) = run_app(&config, OutputFormat::Text, input);
    let summary = result?;
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.save_failures, 2);
    assert!(summary.saved.is_empty());
    assert!(output.contains("Error:"));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = config_in(dir.path());
    config.display.progress_bar = false;
    let bank = QuestionBank::load()?;

    let (result, output) = run_app(
        &config,
        OutputFormat::Json,
        run_input("Ada", "", "1", bank.len()),
    );
    result?;

    let code = expected_code(&bank, true);
    assert!(output.contains(&format!("\"code\": \"{}\"", code)));
    assert!(!output.contains("Personality Scores Chart:"));
    Ok(())
}
