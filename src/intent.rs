//! EN-02 Intent Router — non-symptom conversational intents.
//!
//! Each intent has an independent keyword set; detection is keyword
//! containment over the lower-cased input, checked in fixed priority order.
//! Symptom topics are NOT handled here — the combined responder checks the
//! guidance catalog first and only then consults this router.

use serde::{Deserialize, Serialize};

/// Non-symptom conversational category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Medication,
    Appointment,
    Greeting,
}

const MEDICATION_KEYWORDS: &[&str] = &["medication", "medicine", "drug"];
const APPOINTMENT_KEYWORDS: &[&str] = &["appointment", "book", "schedule"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey"];

impl Intent {
    /// Priority order for the combined responder.
    pub const PRIORITY: [Intent; 3] = [Intent::Medication, Intent::Appointment, Intent::Greeting];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Medication => MEDICATION_KEYWORDS,
            Intent::Appointment => APPOINTMENT_KEYWORDS,
            Intent::Greeting => GREETING_KEYWORDS,
        }
    }
}

/// Detect the first intent whose keyword set matches the input, or None.
pub fn detect_intent(text: &str) -> Option<Intent> {
    let lower = text.to_lowercase();
    let intent = Intent::PRIORITY
        .into_iter()
        .find(|intent| intent.keywords().iter().any(|k| lower.contains(k)));
    if let Some(i) = intent {
        tracing::debug!(intent = ?i, "matched conversational intent");
    }
    intent
}
