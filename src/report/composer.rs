// Report composition
//
// Pure aggregation of profile, tally, resolved code and the two reference
// tables. No I/O happens here.

use serde::Serialize;

use crate::assessment::{resolve, Dimension, PersonalityCode, TraitLetter, TraitTally};
use crate::catalog::{CompatibilityTable, PersonalityCatalog, PersonalityRecord};
use crate::profile::UserProfile;

/// Final result of one run. Immutable once composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    profile: UserProfile,
    code: PersonalityCode,
    tally: TraitTally,
    record: PersonalityRecord,
    catalogued: bool,
    compatible: Vec<PersonalityCode>,
}

impl Report {
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn code(&self) -> PersonalityCode {
        self.code
    }

    pub fn tally(&self) -> &TraitTally {
        &self.tally
    }

    /// Catalog record, or the fallback record when the code has no entry
    pub fn record(&self) -> &PersonalityRecord {
        &self.record
    }

    /// Whether `record` came from the catalog rather than the fallback
    pub fn is_catalogued(&self) -> bool {
        self.catalogued
    }

    pub fn compatible(&self) -> &[PersonalityCode] {
        &self.compatible
    }

    /// Per-dimension counts as (dimension, chosen letter, first pole count,
    /// second pole count)
    pub fn dimension_scores(&self) -> Vec<(Dimension, TraitLetter, u32, u32)> {
        Dimension::ALL
            .iter()
            .map(|d| {
                let (first, second) = self.tally.pair(*d);
                (*d, self.code.letter(*d), first, second)
            })
            .collect()
    }
}

/// Builds reports from the shared reference tables
#[derive(Clone, Copy)]
pub struct ReportComposer<'a> {
    catalog: &'a PersonalityCatalog,
    compatibility: &'a CompatibilityTable,
}

impl<'a> ReportComposer<'a> {
    pub fn new(catalog: &'a PersonalityCatalog, compatibility: &'a CompatibilityTable) -> Self {
        Self {
            catalog,
            compatibility,
        }
    }

    /// Assemble the report for an already resolved `code`
    pub fn compose(
        &self,
        profile: &UserProfile,
        tally: &TraitTally,
        code: PersonalityCode,
    ) -> Report {
        Report {
            profile: profile.clone(),
            code,
            tally: tally.clone(),
            record: self.catalog.lookup(code),
            catalogued: self.catalog.contains(code),
            compatible: self.compatibility.lookup(code).to_vec(),
        }
    }

    /// Resolve the tally and assemble the report
    pub fn compose_from_tally(&self, profile: &UserProfile, tally: &TraitTally) -> Report {
        self.compose(profile, tally, resolve(tally))
    }
}
