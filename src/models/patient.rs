use serde::{Deserialize, Serialize};

/// Read-only patient snapshot supplied by the demographic dataset.
/// Consumed by the pre-visit summary builder; the engine never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSnapshot {
    pub name: String,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub last_visit: Option<String>,
}
