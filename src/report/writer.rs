// Plain-text report files
//
// One file per completed run, named from the user's name.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::composer::Report;
use crate::config::constants::REPORT_FILE_SUFFIX;

const RULE: &str = "============================================";

/// File name for a user's report: unsafe characters become `_`
pub fn report_file_name(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "anonymous" } else { &stem };
    format!("{}{}", stem, REPORT_FILE_SUFFIX)
}

/// Render the report as uncolored text
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let profile = report.profile();
    let record = report.record();

    out.push_str(&format!("{}\n          Personality Test Report\n{}\n\n", RULE, RULE));

    out.push_str(&format!("Name: {}\n", profile.name));
    if let Some(email) = &profile.email {
        out.push_str(&format!("Email: {}\n", email));
    }
    if let Some(age) = profile.age {
        out.push_str(&format!("Age: {}\n", age));
    }
    if report.is_catalogued() {
        out.push_str(&format!("Type: {} - {}\n\n", report.code(), record.name));
    } else {
        out.push_str(&format!("Type: {}\n\n", report.code()));
    }

    out.push_str("Trait Scores:\n");
    for (dimension, _, first, second) in report.dimension_scores() {
        let (a, b) = dimension.poles();
        out.push_str(&format!(
            "{}: {} {} / {} {}\n",
            dimension.name(),
            a,
            first,
            b,
            second
        ));
    }
    out.push('\n');

    out.push_str(&format!("{}\n\n", record.description));

    push_list(&mut out, "Strengths:", &record.strengths);
    push_list(&mut out, "Weaknesses:", &record.weaknesses);
    push_list(&mut out, "Ideal Careers:", &record.careers);

    if let Some(partner) = &record.partner_preferences {
        out.push_str(&format!("Partner Preferences: {}\n\n", partner));
    }

    out.push_str("Compatible Types:\n");
    if report.compatible().is_empty() {
        out.push_str("No data available.\n");
    } else {
        for code in report.compatible() {
            out.push_str(&format!("- {}\n", code));
        }
    }

    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", title));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
    out.push('\n');
}

/// Writes report files into one directory
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Where the report for `name` will be written
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.output_dir.join(report_file_name(name))
    }

    /// Write `report`, replacing any earlier report for the same name
    pub fn write(&self, report: &Report) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        let path = self.path_for(&report.profile().name);
        fs::write(&path, render_text(report))
            .with_context(|| format!("Failed to write report to {}", path.display()))?;

        tracing::info!(path = %path.display(), code = %report.code(), "Saved report");
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{TraitLetter, TraitTally};
    use crate::catalog::{CompatibilityTable, PersonalityCatalog};
    use crate::profile::UserProfile;
    use crate::report::ReportComposer;

    fn report_for(profile: UserProfile, letters: &[TraitLetter]) -> Report {
        let catalog = PersonalityCatalog::builtin().unwrap();
        let compat = CompatibilityTable::builtin().unwrap();
        let mut tally = TraitTally::new();
        for letter in letters {
            tally.increment(*letter);
        }
        ReportComposer::new(&catalog, &compat).compose_from_tally(&profile, &tally)
    }

    #[test]
    fn test_render_layout() {
        let report = report_for(UserProfile::new("Ada"), &[TraitLetter::E]);
        let text = render_text(&report);

        assert!(text.starts_with(&format!(
            "{}\n          Personality Test Report\n{}\n\nName: Ada\nType: ESTJ - Executive\n\n",
            RULE, RULE
        )));
        assert!(text.contains("Trait Scores:\nE/I: E 1 / I 0\nS/N: S 0 / N 0\n"));
        assert!(text.ends_with("Compatible Types:\n- INFP\n- ISFP\n- ISTP\n"));
    }

    #[test]
    fn test_report_file_name_is_sanitized() {
        assert_eq!(report_file_name("Ada"), "Ada_personality.txt");
        assert_eq!(report_file_name("Jane Doe"), "Jane_Doe_personality.txt");
        assert_eq!(report_file_name("../etc/passwd"), "___etc_passwd_personality.txt");
        assert_eq!(report_file_name("   "), "anonymous_personality.txt");
    }

    #[test]
    fn test_render_catalogued_report() {
        let profile = UserProfile::new("Ada").with_email("ada@example.com").with_age(36);
        let report = report_for(
            profile,
            &[TraitLetter::E, TraitLetter::N, TraitLetter::T, TraitLetter::J],
        );
        let text = render_text(&report);

        assert!(text.contains("Name: Ada\n"));
        assert!(text.contains("Email: ada@example.com\n"));
        assert!(text.contains("Age: 36\n"));
        assert!(text.contains("Type: ENTJ - Commander\n"));
        assert!(text.contains("E/I: E 1 / I 0\n"));
        assert!(text.contains("Strengths:\n- Efficient\n"));
        assert!(text.contains("Partner Preferences: Someone who is independent"));
        assert!(text.contains("Compatible Types:\n- INFP\n- ISFP\n- INTP\n"));
    }

    #[test]
    fn test_render_fallback_report_skips_empty_lists() {
        let report = report_for(
            UserProfile::new("Lin"),
            &[TraitLetter::I, TraitLetter::S, TraitLetter::T, TraitLetter::P],
        );
        let text = render_text(&report);

        assert!(text.contains("Type: ISTP\n"));
        assert!(text.contains("A unique blend of traits."));
        assert!(!text.contains("Strengths:"));
        assert!(!text.contains("Email:"));
        assert!(text.contains("- ESFJ\n"));
    }

    #[test]
    fn test_write_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("reports"));
        let report = report_for(UserProfile::new("Ada Lovelace"), &[TraitLetter::I]);

        let path = writer.write(&report).unwrap();
        assert_eq!(path, dir.path().join("reports").join("Ada_Lovelace_personality.txt"));
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, render_text(&report));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let writer = ReportWriter::new(blocker);
        let report = report_for(UserProfile::new("Ada"), &[TraitLetter::E]);
        let err = writer.write(&report).unwrap_err();
        assert!(err.to_string().contains("Failed to create output directory"));
    }
}
