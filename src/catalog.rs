//! KB-01 Guidance Catalog — the ordered symptom-topic table.
//!
//! Pure data. The table is deliberately an ordered `Vec`, not a map: the
//! classifier returns the FIRST entry whose topic key is contained in the
//! input, so entry order is the documented tie-break. Construct once at
//! startup and share by reference; there are no mutation operations.

use crate::models::{TopicProfile, Urgency};

/// Disclaimer attached to most guidance entries and to the fallback.
pub const STANDARD_DISCLAIMER: &str = "This is AI-generated guidance for information only. \
     Please consult a doctor for proper diagnosis.";

/// Ordered symptom-topic table plus the synthetic fallback profile.
pub struct GuidanceCatalog {
    topics: Vec<TopicProfile>,
    fallback: TopicProfile,
}

impl GuidanceCatalog {
    /// The built-in demo catalog. Entry order is part of the contract.
    pub fn builtin() -> Self {
        Self {
            topics: vec![
                profile(
                    "headache",
                    Urgency::Low,
                    &["Tension Headache", "Migraine", "Dehydration"],
                    &[
                        "Rest in a quiet, dark room",
                        "Stay hydrated - drink plenty of water",
                        "Consider over-the-counter pain relief",
                        "Apply a cold compress to your forehead",
                    ],
                    STANDARD_DISCLAIMER,
                ),
                profile(
                    "chest pain",
                    Urgency::High,
                    &["Muscle Strain", "Anxiety", "Acid Reflux", "Cardiac Issue"],
                    &[
                        "If severe, seek emergency care immediately",
                        "Note when the pain started and any triggers",
                        "Avoid strenuous activity",
                        "Schedule an appointment with a cardiologist",
                    ],
                    "Chest pain can indicate serious conditions. \
                     Seek immediate medical attention if symptoms are severe.",
                ),
                profile(
                    "fever",
                    Urgency::Medium,
                    &["Viral Infection", "Bacterial Infection", "Flu"],
                    &[
                        "Rest and stay hydrated",
                        "Take temperature regularly",
                        "Use fever-reducing medication if above 101°F",
                        "Consult a doctor if fever persists over 3 days",
                    ],
                    STANDARD_DISCLAIMER,
                ),
                profile(
                    "cough",
                    Urgency::Low,
                    &[
                        "Common Cold",
                        "Allergies",
                        "Bronchitis",
                        "Respiratory Infection",
                    ],
                    &[
                        "Stay hydrated with warm fluids",
                        "Use honey and ginger for sore throat",
                        "Avoid irritants like smoke and dust",
                        "See a doctor if cough persists over 2 weeks",
                    ],
                    STANDARD_DISCLAIMER,
                ),
                profile(
                    "stomach pain",
                    Urgency::Medium,
                    &["Indigestion", "Gastritis", "Food Poisoning", "IBS"],
                    &[
                        "Eat light, bland foods",
                        "Avoid spicy and fatty foods",
                        "Stay hydrated",
                        "Consult a doctor if pain is severe or persistent",
                    ],
                    STANDARD_DISCLAIMER,
                ),
            ],
            fallback: profile(
                "general",
                Urgency::Low,
                &["Unable to determine - please provide more details"],
                &[
                    "Please describe your symptoms in more detail",
                    "Note when symptoms started and their severity",
                    "Consider booking an appointment with a general physician",
                ],
                STANDARD_DISCLAIMER,
            ),
        }
    }

    /// Topic entries in match-priority order.
    pub fn topics(&self) -> &[TopicProfile] {
        &self.topics
    }

    /// Profile returned when no topic key matches.
    pub fn fallback(&self) -> &TopicProfile {
        &self.fallback
    }
}

fn profile(
    topic: &str,
    urgency: Urgency,
    conditions: &[&str],
    recommendations: &[&str],
    disclaimer: &str,
) -> TopicProfile {
    TopicProfile {
        topic: topic.into(),
        possible_conditions: conditions.iter().map(|c| (*c).into()).collect(),
        urgency,
        recommendations: recommendations.iter().map(|r| (*r).into()).collect(),
        disclaimer: disclaimer.into(),
    }
}
