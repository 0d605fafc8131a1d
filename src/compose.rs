//! EN-03 Response Composer — renders guidance and intent replies.
//!
//! Output is the markup dialect the demo display layer interprets
//! (`**bold**`, `*italic*`, `## heading`, `• ` bullets, `---` dividers).
//! The engine does not escape user-supplied text inside replies; the
//! renderer owns safe interpretation of the tokens.
//!
//! Rendering is deterministic given its input. The only randomness in the
//! conversational flow — picking a generic follow-up prompt — lives in the
//! assistant, which passes an index into [`follow_up_reply`].

use std::fmt::Write;

use thiserror::Error;

use crate::intent::Intent;
use crate::models::{TopicProfile, Urgency};

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Failed to render reply: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Generic follow-up prompts used when nothing matches.
pub const FOLLOW_UP_PROMPTS: [&str; 4] = [
    "I understand you're not feeling well. Could you describe your symptoms in more detail?",
    "Based on what you've shared, I recommend scheduling an appointment with a healthcare \
     professional for a proper evaluation.",
    "Remember, while I can provide general health information, only a qualified doctor can \
     diagnose and treat medical conditions.",
    "Is there anything specific about your symptoms you'd like to know more about?",
];

/// Urgency marker glyph. Total and fixed.
pub fn urgency_glyph(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "🚨",
        Urgency::Medium => "⚠️",
        Urgency::Low => "ℹ️",
    }
}

/// Render a symptom analysis reply from a topic profile.
/// Bullet order preserves profile order.
pub fn compose_analysis(profile: &TopicProfile) -> Result<String, ComposeError> {
    let mut out = String::new();

    writeln!(
        out,
        "{} **Symptom Analysis: {}**",
        urgency_glyph(profile.urgency),
        capitalize_first(&profile.topic)
    )?;
    writeln!(out)?;
    writeln!(out, "**Possible Conditions:**")?;
    for condition in &profile.possible_conditions {
        writeln!(out, "• {condition}")?;
    }
    writeln!(out)?;
    writeln!(out, "**Recommendations:**")?;
    for recommendation in &profile.recommendations {
        writeln!(out, "• {recommendation}")?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;
    write!(out, "⚕️ *{}*", profile.disclaimer)?;

    Ok(out)
}

/// Render the canned multi-section template for a non-symptom intent.
pub fn compose_intent(intent: Intent) -> String {
    match intent {
        Intent::Medication => "💊 **Medication Information**\n\
             \n\
             I can provide general information about medications. However, please note:\n\
             \n\
             • Always follow your doctor's prescription exactly\n\
             • Never change dosage without consulting your doctor\n\
             • Report any side effects to your healthcare provider\n\
             • Check for drug interactions before taking new medications\n\
             \n\
             Which specific medication would you like to know about?\n\
             \n\
             ---\n\
             ⚕️ *This is general information only. Consult your doctor or pharmacist for \
             specific advice.*"
            .to_string(),
        Intent::Appointment => "📅 **Appointment Assistance**\n\
             \n\
             I can help you with appointment information:\n\
             \n\
             • To book a new appointment, go to the **Appointments** section\n\
             • View your upcoming appointments in your dashboard\n\
             • You can also reschedule or cancel appointments there\n\
             \n\
             Would you like me to guide you through the booking process?"
            .to_string(),
        Intent::Greeting => "👋 Hello! I'm your AI Health Assistant.\n\
             \n\
             I can help you with:\n\
             • Symptom information and general guidance\n\
             • Medication information\n\
             • Appointment assistance\n\
             • General health questions\n\
             \n\
             How can I assist you today?\n\
             \n\
             ---\n\
             ⚕️ *Remember: I provide information only. For medical diagnosis and treatment, \
             please consult a qualified healthcare professional.*"
            .to_string(),
    }
}

/// Render the generic follow-up reply for the given prompt index.
/// The index is taken modulo the prompt pool size, so any value is safe.
pub fn follow_up_reply(index: usize) -> String {
    let prompt = FOLLOW_UP_PROMPTS[index % FOLLOW_UP_PROMPTS.len()];
    format!(
        "{prompt}\n\n---\n⚕️ *{}*",
        crate::catalog::STANDARD_DISCLAIMER
    )
}

/// The assistant greeting a fresh chat session opens with.
pub fn welcome_message() -> String {
    "👋 Hello! I'm your AI Health Assistant.\n\
     \n\
     I can help you with:\n\
     • **Symptom information** - Describe how you're feeling\n\
     • **Medication guidance** - Learn about your prescriptions\n\
     • **Appointment help** - Navigate booking and scheduling\n\
     • **General health questions** - Get reliable information\n\
     \n\
     How can I assist you today?\n\
     \n\
     ---\n\
     ⚕️ *Remember: I provide information only. For medical diagnosis and treatment, please \
     consult a qualified healthcare professional.*"
        .to_string()
}

/// Apology substituted when reply generation faults. The fault is logged;
/// the caller always receives a well-formed assistant turn.
pub const APOLOGY_REPLY: &str = "I apologize, but I encountered an error. Please try again.";

/// Upper-case the first character, UTF-8 safe ("chest pain" → "Chest pain").
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GuidanceCatalog;

    fn bullet_count(section: &str) -> usize {
        section.lines().filter(|l| l.starts_with("• ")).count()
    }

    #[test]
    fn glyph_mapping_is_total_and_fixed() {
        assert_eq!(urgency_glyph(Urgency::High), "🚨");
        assert_eq!(urgency_glyph(Urgency::Medium), "⚠️");
        assert_eq!(urgency_glyph(Urgency::Low), "ℹ️");
    }

    #[test]
    fn analysis_has_one_bullet_per_item() {
        let catalog = GuidanceCatalog::builtin();
        for profile in catalog.topics() {
            let reply = compose_analysis(profile).unwrap();
            let (conditions, recommendations) = reply
                .split_once("**Recommendations:**")
                .expect("missing recommendations section");
            assert_eq!(
                bullet_count(conditions),
                profile.possible_conditions.len(),
                "condition bullets for {}",
                profile.topic
            );
            assert_eq!(
                bullet_count(recommendations),
                profile.recommendations.len(),
                "recommendation bullets for {}",
                profile.topic
            );
        }
    }

    #[test]
    fn analysis_preserves_bullet_order() {
        let catalog = GuidanceCatalog::builtin();
        let headache = &catalog.topics()[0];
        let reply = compose_analysis(headache).unwrap();
        let mut last = 0;
        for condition in &headache.possible_conditions {
            let pos = reply.find(condition.as_str()).expect("condition missing");
            assert!(pos > last, "bullets out of order");
            last = pos;
        }
    }

    #[test]
    fn analysis_title_capitalizes_topic() {
        let catalog = GuidanceCatalog::builtin();
        let chest_pain = &catalog.topics()[1];
        let reply = compose_analysis(chest_pain).unwrap();
        assert!(reply.starts_with("🚨 **Symptom Analysis: Chest pain**"));
    }

    #[test]
    fn analysis_ends_with_disclaimer_footer() {
        let catalog = GuidanceCatalog::builtin();
        let fever = &catalog.topics()[2];
        let reply = compose_analysis(fever).unwrap();
        assert!(reply.contains("\n---\n"));
        assert!(reply.ends_with(&format!("⚕️ *{}*", fever.disclaimer)));
    }

    #[test]
    fn intent_templates_are_multi_section() {
        for intent in Intent::PRIORITY {
            let reply = compose_intent(intent);
            assert!(bullet_count(&reply) >= 3, "{intent:?} template too bare");
        }
        assert!(compose_intent(Intent::Medication).starts_with("💊"));
        assert!(compose_intent(Intent::Appointment).starts_with("📅"));
        assert!(compose_intent(Intent::Greeting).starts_with("👋"));
    }

    #[test]
    fn follow_up_index_wraps() {
        assert_eq!(follow_up_reply(0), follow_up_reply(FOLLOW_UP_PROMPTS.len()));
        for i in 0..FOLLOW_UP_PROMPTS.len() {
            assert!(follow_up_reply(i).starts_with(FOLLOW_UP_PROMPTS[i]));
            assert!(follow_up_reply(i).contains("---"));
        }
    }

    #[test]
    fn capitalize_first_handles_edge_cases() {
        assert_eq!(capitalize_first("fever"), "Fever");
        assert_eq!(capitalize_first("chest pain"), "Chest pain");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("école"), "École");
    }
}
