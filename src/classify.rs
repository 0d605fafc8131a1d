//! EN-01 Symptom Classifier — keyword containment over the guidance catalog.
//!
//! First textual containment wins: the catalog is scanned in its fixed order
//! and the first topic key found as a literal substring of the lower-cased
//! input decides the profile. No scoring, no multi-match resolution.
//! Classification is total — unmatched input degrades to the fallback
//! profile, never an error.

use crate::catalog::GuidanceCatalog;
use crate::models::TopicProfile;

/// Classify free-text input into a topic profile. Always succeeds.
pub fn classify<'a>(catalog: &'a GuidanceCatalog, text: &str) -> &'a TopicProfile {
    match match_topic(catalog, text) {
        Some(profile) => profile,
        None => {
            tracing::debug!("no topic key matched, using fallback profile");
            catalog.fallback()
        }
    }
}

/// Find the earliest catalog entry whose topic key is contained in the
/// input, or None. Case-insensitive.
pub fn match_topic<'a>(catalog: &'a GuidanceCatalog, text: &str) -> Option<&'a TopicProfile> {
    let lower = text.to_lowercase();
    let profile = catalog.topics().iter().find(|t| lower.contains(&t.topic));
    if let Some(p) = profile {
        tracing::debug!(topic = %p.topic, urgency = p.urgency.as_str(), "matched symptom topic");
    }
    profile
}
