//! DIR-01 Patient Directory — read-only demo snapshot store.
//!
//! The demographic dataset is an external collaborator: the engine only
//! reads from it, for pre-visit summary personalization. Snapshots arrive as
//! JSON from the hosting application; `demo()` bundles the sample records
//! the dashboard ships with.

use thiserror::Error;

use crate::models::PatientSnapshot;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Malformed snapshot data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read-only collection of patient snapshots.
pub struct PatientDirectory {
    snapshots: Vec<PatientSnapshot>,
}

impl PatientDirectory {
    /// Parse a directory from a JSON array of snapshots.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let snapshots: Vec<PatientSnapshot> = serde_json::from_str(json)?;
        Ok(Self { snapshots })
    }

    /// The sample records bundled with the demo dashboard.
    pub fn demo() -> Self {
        Self {
            snapshots: vec![
                PatientSnapshot {
                    name: "Michael Johnson".into(),
                    symptoms: Some("Chest pain, shortness of breath".into()),
                    medical_history: vec!["Mild hypertension".into()],
                    last_visit: Some("2026-07-10".into()),
                },
                PatientSnapshot {
                    name: "Emily Davis".into(),
                    symptoms: Some("Recurring headaches, dizziness".into()),
                    medical_history: vec!["Tension headache".into()],
                    last_visit: Some("2026-07-22".into()),
                },
                PatientSnapshot {
                    name: "Raj Kumar".into(),
                    symptoms: Some("Lower back pain".into()),
                    medical_history: vec![],
                    last_visit: None,
                },
            ],
        }
    }

    pub fn snapshots(&self) -> &[PatientSnapshot] {
        &self.snapshots
    }

    /// Case-insensitive lookup by patient name.
    pub fn find(&self, name: &str) -> Option<&PatientSnapshot> {
        let key = name.to_lowercase();
        self.snapshots
            .iter()
            .find(|s| s.name.to_lowercase() == key)
    }
}
