// One-shot commands that print reference data instead of running the test

use anyhow::Result;

use super::render::render_type_card;
use crate::assessment::PersonalityCode;
use crate::catalog::{CompatibilityTable, PersonalityCatalog};
use crate::logging::HistoryLogger;

pub enum Command {
    /// Describe one type code
    Lookup(PersonalityCode),
    /// List past results
    History,
    /// List every type code and whether it has a description
    Types,
}

pub fn handle_command(
    command: Command,
    catalog: &PersonalityCatalog,
    compatibility: &CompatibilityTable,
    history: &HistoryLogger,
) -> Result<String> {
    match command {
        Command::Lookup(code) => Ok(format_lookup(code, catalog, compatibility)),
        Command::History => format_history(history),
        Command::Types => Ok(format_types(catalog)),
    }
}

fn format_lookup(
    code: PersonalityCode,
    catalog: &PersonalityCatalog,
    compatibility: &CompatibilityTable,
) -> String {
    let record = catalog.lookup(code);
    let title = if catalog.contains(code) {
        format!("{} - {}", code, record.name)
    } else {
        code.to_string()
    };
    format!(
        "{}\n\n{}",
        title,
        render_type_card(&record, compatibility.lookup(code))
    )
}

fn format_history(history: &HistoryLogger) -> Result<String> {
    let entries = history.read()?;
    if entries.is_empty() {
        return Ok(format!("No results recorded in {}", history.path().display()));
    }

    let mut output = format!("Results ({}):\n", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} - {} ({})\n",
            i + 1,
            entry.name,
            entry.code,
            entry.timestamp.format("%Y-%m-%d %H:%M")
        ));
    }
    Ok(output)
}

fn format_types(catalog: &PersonalityCatalog) -> String {
    let mut output = String::from("Personality types:\n");
    for code in PersonalityCode::all() {
        match catalog.get(code) {
            Some(record) => output.push_str(&format!("  {} - {}\n", code, record.name)),
            None => output.push_str(&format!("  {}\n", code)),
        }
    }
    output
}
