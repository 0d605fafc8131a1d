//! KB-02 Medication Reference — static formulary and info cards.
//!
//! Lookup is keyed by the lower-cased medication name and never fails: an
//! unknown name yields a literal no-data message naming the requested key.

use crate::models::MedicationEntry;

/// Static medication reference table.
pub struct MedicationFormulary {
    entries: Vec<MedicationEntry>,
}

impl MedicationFormulary {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                MedicationEntry {
                    name: "Amlodipine".into(),
                    used_for: "Treatment of high blood pressure and chest pain (angina)".into(),
                    dosage: "Usually 5-10mg once daily".into(),
                    side_effects: vec![
                        "Swelling in ankles".into(),
                        "Dizziness".into(),
                        "Flushing".into(),
                        "Fatigue".into(),
                    ],
                    warnings: vec!["Avoid grapefruit".into(), "Do not stop suddenly".into()],
                },
                MedicationEntry {
                    name: "Ibuprofen".into(),
                    used_for: "Pain relief, fever reduction, anti-inflammatory".into(),
                    dosage: "200-400mg every 4-6 hours as needed".into(),
                    side_effects: vec![
                        "Stomach upset".into(),
                        "Nausea".into(),
                        "Dizziness".into(),
                    ],
                    warnings: vec![
                        "Take with food".into(),
                        "Avoid if you have stomach ulcers".into(),
                    ],
                },
                MedicationEntry {
                    name: "Metformin".into(),
                    used_for: "Management of type 2 diabetes".into(),
                    dosage: "500-2000mg daily in divided doses".into(),
                    side_effects: vec![
                        "Nausea".into(),
                        "Diarrhea".into(),
                        "Stomach upset".into(),
                    ],
                    warnings: vec!["Take with meals".into(), "Stay hydrated".into()],
                },
            ],
        }
    }

    /// Case-insensitive lookup by medication name.
    pub fn lookup(&self, name: &str) -> Option<&MedicationEntry> {
        let key = name.to_lowercase();
        self.entries.iter().find(|e| e.name.to_lowercase() == key)
    }

    /// Render the info card for a medication, or the no-data message.
    /// The card heading uses the table's canonical name, so differently-cased
    /// requests produce identical output.
    pub fn medication_info(&self, name: &str) -> String {
        match self.lookup(name) {
            Some(entry) => render_card(entry),
            None => {
                tracing::debug!(requested = %name, "medication not in formulary");
                format!(
                    "I don't have specific information about \"{name}\" in my database. \
                     Please consult your pharmacist or doctor for accurate medication \
                     information."
                )
            }
        }
    }
}

fn render_card(entry: &MedicationEntry) -> String {
    let side_effects = bullets(&entry.side_effects);
    let warnings = bullets(&entry.warnings);
    format!(
        "## {}\n\
         \n\
         **Use:** {}\n\
         \n\
         **Typical Dosage:** {}\n\
         \n\
         **Common Side Effects:**\n\
         {side_effects}\n\
         \n\
         **Warnings:**\n\
         {warnings}\n\
         \n\
         ---\n\
         *Always follow your doctor's prescription. This is general information only.*",
        entry.name, entry.used_for, entry.dosage,
    )
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("• {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}
