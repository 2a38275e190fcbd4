// Compatibility table
//
// Independent of the personality catalog: a code can have compatible
// types without having a description, and vice versa.

use std::collections::{BTreeMap, HashMap};

use crate::assessment::PersonalityCode;
use crate::errors::DataError;

/// Most compatible types listed per code
pub const MAX_COMPATIBLE: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct CompatibilityTable {
    entries: HashMap<PersonalityCode, Vec<PersonalityCode>>,
}

impl CompatibilityTable {
    /// Load the table shipped with the binary
    pub fn builtin() -> Result<Self, DataError> {
        Self::parse(include_str!("../../data/compatibility.toml"))
    }

    fn parse(source: &str) -> Result<Self, DataError> {
        let raw: BTreeMap<String, Vec<String>> =
            toml::from_str(source).map_err(|e| DataError::Parse {
                source_name: "compatibility.toml",
                message: e.to_string(),
            })?;

        let parse_code = |s: &str| {
            s.parse::<PersonalityCode>().map_err(|error| DataError::Code {
                source_name: "compatibility.toml",
                error,
            })
        };

        let mut entries = Vec::with_capacity(raw.len());
        for (key, values) in raw {
            let code = parse_code(key.as_str())?;
            let compatible = values
                .iter()
                .map(|v| parse_code(v.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((code, compatible));
        }

        Self::from_entries(entries)
    }

    /// Build a table, rejecting codes with more than three matches
    pub fn from_entries(
        entries: impl IntoIterator<Item = (PersonalityCode, Vec<PersonalityCode>)>,
    ) -> Result<Self, DataError> {
        let mut map = HashMap::new();
        for (code, compatible) in entries {
            if compatible.len() > MAX_COMPATIBLE {
                return Err(DataError::TooManyCompatible {
                    code: code.to_string(),
                    count: compatible.len(),
                });
            }
            map.insert(code, compatible);
        }
        Ok(Self { entries: map })
    }

    /// Compatible types for `code`, best match first. Unknown codes yield
    /// an empty slice.
    pub fn lookup(&self, code: PersonalityCode) -> &[PersonalityCode] {
        match self.entries.get(&code) {
            Some(list) => list.as_slice(),
            None => {
                tracing::debug!(%code, "No compatibility data");
                &[]
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
