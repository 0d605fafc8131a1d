//! PV-01 Pre-Visit Summary — physician-reference summary from a snapshot.
//!
//! Pure formatter over a read-only [`PatientSnapshot`]. Missing fields
//! degrade to the documented placeholder lines; generation never fails.

use crate::models::PatientSnapshot;

/// Build the pre-visit summary for a patient snapshot.
pub fn previsit_summary(patient: &PatientSnapshot) -> String {
    let chief_complaint = patient
        .symptoms
        .as_deref()
        .unwrap_or("No symptoms recorded");

    let history = if patient.medical_history.is_empty() {
        "No significant history recorded".to_string()
    } else {
        patient
            .medical_history
            .iter()
            .map(|h| format!("• {h}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let last_visit = patient.last_visit.as_deref().unwrap_or("First visit");

    format!(
        "## Pre-Visit Summary for {}\n\
         \n\
         ### Chief Complaint\n\
         {chief_complaint}\n\
         \n\
         ### Medical History\n\
         {history}\n\
         \n\
         ### Last Visit\n\
         {last_visit}\n\
         \n\
         ### AI Observations\n\
         Based on the available information, consider:\n\
         • Review current medications for interactions\n\
         • Check vital signs including blood pressure\n\
         • Discuss lifestyle factors if applicable\n\
         \n\
         ---\n\
         *AI-generated summary for physician reference. Verify all information with patient.*",
        patient.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> PatientSnapshot {
        PatientSnapshot {
            name: "Michael Johnson".into(),
            symptoms: Some("Chest pain and shortness of breath".into()),
            medical_history: vec!["Hypertension".into(), "Type 2 Diabetes".into()],
            last_visit: Some("2026-07-15".into()),
        }
    }

    #[test]
    fn summary_includes_all_sections() {
        let summary = previsit_summary(&full_snapshot());
        assert!(summary.starts_with("## Pre-Visit Summary for Michael Johnson"));
        assert!(summary.contains("### Chief Complaint\nChest pain and shortness of breath"));
        assert!(summary.contains("• Hypertension\n• Type 2 Diabetes"));
        assert!(summary.contains("### Last Visit\n2026-07-15"));
        assert!(summary.contains("### AI Observations"));
        assert!(summary.ends_with("Verify all information with patient.*"));
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let patient = PatientSnapshot {
            name: "Emily Davis".into(),
            symptoms: None,
            medical_history: vec![],
            last_visit: None,
        };
        let summary = previsit_summary(&patient);
        assert!(summary.contains("### Chief Complaint\nNo symptoms recorded"));
        assert!(summary.contains("### Medical History\nNo significant history recorded"));
        assert!(summary.contains("### Last Visit\nFirst visit"));
    }

    #[test]
    fn one_bullet_per_history_entry() {
        let summary = previsit_summary(&full_snapshot());
        let history_section = summary
            .split("### Medical History")
            .nth(1)
            .unwrap()
            .split("### Last Visit")
            .next()
            .unwrap();
        let bullet_lines = history_section
            .lines()
            .filter(|l| l.starts_with("• "))
            .count();
        assert_eq!(bullet_lines, 2);
    }
}
