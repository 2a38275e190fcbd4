// Result history — one line per completed run, appended to a shared log

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::assessment::PersonalityCode;

/// A parsed history line: `<name> : <CODE> @ <timestamp>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: String,
    pub code: PersonalityCode,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    fn to_line(&self) -> String {
        format!(
            "{} : {} @ {}",
            self.name,
            self.code,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    /// Parse one log line. Returns `None` for lines in any other shape.
    pub fn parse(line: &str) -> Option<Self> {
        let (rest, ts) = line.rsplit_once(" @ ")?;
        let (name, code) = rest.rsplit_once(" : ")?;
        Some(Self {
            name: name.to_string(),
            code: code.trim().parse().ok()?,
            timestamp: DateTime::parse_from_rfc3339(ts.trim()).ok()?.with_timezone(&Utc),
        })
    }
}

/// Appends results to the history file
pub struct HistoryLogger {
    path: PathBuf,
}

impl HistoryLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Record a result with the current time
    pub fn log(&self, name: &str, code: PersonalityCode) -> Result<()> {
        self.append(&HistoryEntry {
            name: name.to_string(),
            code,
            timestamp: Utc::now(),
        })
    }

    pub fn append(&self, entry: &HistoryEntry) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open history log: {}", self.path.display()))?;

        writeln!(file, "{}", entry.to_line()).context("Failed to write history entry")?;

        debug!(path = %self.path.display(), code = %entry.code, "Appended history entry");
        Ok(())
    }

    /// All parseable entries, oldest first. Malformed lines are skipped.
    pub fn read(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read history log: {}", self.path.display()))?;

        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let entry = HistoryEntry::parse(line);
                if entry.is_none() {
                    debug!(line, "Skipping malformed history line");
                }
                entry
            })
            .collect())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn logger_in_tempdir() -> (HistoryLogger, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let logger = HistoryLogger::new(dir.path().join("history.log"));
        (logger, dir)
    }

    fn code(s: &str) -> PersonalityCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_log_creates_file() {
        let (logger, _dir) = logger_in_tempdir();
        assert!(!logger.path().exists());
        logger.log("Ada", code("INTJ")).unwrap();
        assert!(logger.path().exists());
    }

    #[test]
    fn test_multiple_logs_append() {
        let (logger, _dir) = logger_in_tempdir();
        logger.log("Ada", code("INTJ")).unwrap();
        logger.log("Lin", code("ESFP")).unwrap();
        logger.log("Ada", code("ENTJ")).unwrap();

        let entries = logger.read().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].name, "Lin");
        assert_eq!(entries[2].code, code("ENTJ"));
    }

    #[test]
    fn test_line_format() {
        let (logger, _dir) = logger_in_tempdir();
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        logger
            .append(&HistoryEntry {
                name: "Ada".into(),
                code: code("INFP"),
                timestamp,
            })
            .unwrap();

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(contents, "Ada : INFP @ 2026-03-14T09:26:53Z\n");
        assert_eq!(logger.read().unwrap()[0].timestamp, timestamp);
    }

    #[test]
    fn test_names_containing_separators_parse() {
        let entry = HistoryEntry::parse("Mr : Smith : ISTJ @ 2026-01-02T03:04:05Z").unwrap();
        assert_eq!(entry.name, "Mr : Smith");
        assert_eq!(entry.code, code("ISTJ"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let (logger, _dir) = logger_in_tempdir();
        std::fs::write(
            logger.path(),
            "garbage\nAda : INTJ @ 2026-01-02T03:04:05Z\nBob : XXXX @ 2026-01-02T03:04:05Z\n",
        )
        .unwrap();
        let entries = logger.read().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Ada");
    }
}
