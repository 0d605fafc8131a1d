use serde::{Deserialize, Serialize};

use super::enums::Urgency;

/// Structured guidance for one symptom topic.
///
/// `possible_conditions` and `recommendations` are non-empty for every real
/// catalog entry; only the synthetic fallback profile is exempt from that
/// invariant (it still ships non-empty lists in practice).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicProfile {
    /// Canonical matching keyword, lower-case ("headache", "chest pain").
    pub topic: String,
    pub possible_conditions: Vec<String>,
    pub urgency: Urgency,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}
