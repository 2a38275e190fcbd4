// Personality catalog
//
// Descriptive records keyed by type code. Built once at startup from
// data/catalog.toml and shared by reference afterwards.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::assessment::PersonalityCode;
use crate::errors::DataError;

/// Description shown for codes the catalog does not cover
pub const FALLBACK_DESCRIPTION: &str =
    "A unique blend of traits. Explore your strengths, weaknesses, and preferences further.";

/// What the report says about one personality type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityRecord {
    /// Display name (e.g., "Architect")
    pub name: String,

    /// One-paragraph summary
    pub description: String,

    #[serde(default)]
    pub strengths: Vec<String>,

    #[serde(default)]
    pub weaknesses: Vec<String>,

    /// Suggested careers, best fit first
    #[serde(default)]
    pub careers: Vec<String>,

    /// What this type tends to look for in a partner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_preferences: Option<String>,
}

impl PersonalityRecord {
    /// Placeholder record for a code with no catalog entry.
    ///
    /// The name echoes the code and every list is empty.
    pub fn fallback(code: PersonalityCode) -> Self {
        Self {
            name: code.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            careers: Vec::new(),
            partner_preferences: None,
        }
    }
}

/// Immutable code -> record table
#[derive(Debug, Clone, Default)]
pub struct PersonalityCatalog {
    records: HashMap<PersonalityCode, PersonalityRecord>,
}

impl PersonalityCatalog {
    /// Load the catalog shipped with the binary
    pub fn builtin() -> Result<Self, DataError> {
        Self::parse(include_str!("../../data/catalog.toml"))
    }

    fn parse(source: &str) -> Result<Self, DataError> {
        let raw: BTreeMap<String, PersonalityRecord> =
            toml::from_str(source).map_err(|e| DataError::Parse {
                source_name: "catalog.toml",
                message: e.to_string(),
            })?;

        let records = raw
            .into_iter()
            .map(|(key, record)| {
                key.parse::<PersonalityCode>()
                    .map(|code| (code, record))
                    .map_err(|error| DataError::Code {
                        source_name: "catalog.toml",
                        error,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_records(records))
    }

    pub fn from_records(
        records: impl IntoIterator<Item = (PersonalityCode, PersonalityRecord)>,
    ) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// The stored record, if this code has one
    pub fn get(&self, code: PersonalityCode) -> Option<&PersonalityRecord> {
        self.records.get(&code)
    }

    /// The stored record, or the fallback record for unknown codes
    pub fn lookup(&self, code: PersonalityCode) -> PersonalityRecord {
        match self.get(code) {
            Some(record) => record.clone(),
            None => {
                tracing::debug!(%code, "No catalog entry, using fallback record");
                PersonalityRecord::fallback(code)
            }
        }
    }

    pub fn contains(&self, code: PersonalityCode) -> bool {
        self.records.contains_key(&code)
    }

    /// Codes with an entry, sorted
    pub fn codes(&self) -> Vec<PersonalityCode> {
        let mut codes: Vec<PersonalityCode> = self.records.keys().copied().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
