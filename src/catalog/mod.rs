// Catalog module
// Static reference tables: type descriptions and compatible types

mod compatibility;
mod personality;

pub use compatibility::{CompatibilityTable, MAX_COMPATIBLE};
pub use personality::{PersonalityCatalog, PersonalityRecord, FALLBACK_DESCRIPTION};
