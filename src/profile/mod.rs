// User profiles
//
// Identity collected before each run, plus the CSV registry that records
// every completed run and where its report was written.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Who is taking the test. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            age: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

/// One line of the profile registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub name: String,
    pub email: String,
    pub age: String,
    pub report_file: String,
}

/// Append-only CSV of completed runs
pub struct ProfileRegistry {
    path: PathBuf,
}

impl ProfileRegistry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Record `profile` and the report file written for it.
    ///
    /// The header row is written when the file is first created.
    pub fn append(&self, profile: &UserProfile, report_file: &Path) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let is_new = !self.path.exists()
            || std::fs::metadata(&self.path)
                .map(|m| m.len() == 0)
                .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open profile registry: {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        writer
            .serialize(ProfileRow {
                name: profile.name.clone(),
                email: profile.email.clone().unwrap_or_default(),
                age: profile.age.map(|a| a.to_string()).unwrap_or_default(),
                report_file: report_file.display().to_string(),
            })
            .context("Failed to write profile row")?;
        writer.flush().context("Failed to flush profile registry")?;

        tracing::debug!(path = %self.path.display(), name = %profile.name, "Saved profile");
        Ok(())
    }

    /// All recorded rows, oldest first
    pub fn read_all(&self) -> Result<Vec<ProfileRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to read profile registry: {}", self.path.display()))?;
        reader
            .deserialize()
            .collect::<Result<Vec<ProfileRow>, _>>()
            .context("Failed to parse profile registry")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
