use serde::{Deserialize, Serialize};

/// One entry in the static medication reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationEntry {
    /// Display name, capitalized ("Ibuprofen"). Table lookup is by the
    /// lower-cased form.
    pub name: String,
    pub used_for: String,
    pub dosage: String,
    pub side_effects: Vec<String>,
    pub warnings: Vec<String>,
}
