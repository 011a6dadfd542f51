//! Canonical record types and status lookup tables.
//!
//! Records reach the engine as loosely-typed JSON; `parsing::normalizer`
//! maps them onto the canonical schema defined here. The engine never
//! mutates a record after normalization.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel used for every string field that arrives empty or absent.
///
/// The historical record store is Portuguese, and the dashboards display the
/// sentinel verbatim, so it stays in its original spelling.
pub const UNSPECIFIED: &str = "Não especificado";

/// One logged maintenance event, read-only to the analytics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,
    pub equipment_id: String,
    pub equipment_type: String,
    pub technician: String,
    /// Event date. Absent when only a registration timestamp was recoverable.
    pub date: Option<NaiveDate>,
    /// When the event was logged; may differ from the event date.
    pub registration_date: Option<DateTime<Utc>>,
    pub area: String,
    pub location: String,
    pub maintenance_type: String,
    pub is_critical: bool,
    pub problem_category: String,
    pub problem_description: String,
    pub additional_notes: Option<String>,
    /// Raw status value as logged. Canonical grouping happens in the
    /// aggregators through [`CanonicalStatus::from_raw`].
    pub status: String,
}

impl MaintenanceRecord {
    /// The date used for period filtering: the event date, falling back to
    /// the registration timestamp's calendar date.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.date
            .or_else(|| self.registration_date.map(|dt| dt.date_naive()))
    }
}

/// One verification outcome tied to a maintenance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub maintenance_id: String,
    pub verifier: String,
    pub date: Option<DateTime<Utc>>,
    /// Raw result value; grouped via [`VerificationOutcome::from_raw`].
    pub result: String,
    pub comments: String,
}

/// Canonical status groups after synonym collapsing.
///
/// This table is the single authority for status grouping; both the
/// dashboard and the report assembler consume it, so the two can never
/// disagree on which synonyms map where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalStatus {
    Pending,
    Verified,
    Completed,
    Rejected,
    Other,
}

impl CanonicalStatus {
    /// Collapse a raw status value into its canonical group.
    ///
    /// The lookup is a fixed table over the known historical spellings;
    /// anything unrecognized lands in `Other`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Pendente" | "Pending" | "Aguardando Verificação" | "Aguardando" => {
                CanonicalStatus::Pending
            }
            "Verificado" | "Verified" | "Aprovado" | "Approved" | "Ajustes"
            | "Aprovado com Ajustes" => CanonicalStatus::Verified,
            "Concluído" | "Concluido" | "Completed" | "Finalizado" => CanonicalStatus::Completed,
            "Reprovado" | "Rejeitado" | "Rejected" => CanonicalStatus::Rejected,
            _ => CanonicalStatus::Other,
        }
    }

    /// Display label used as the bucket label in distributions.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalStatus::Pending => "Pending",
            CanonicalStatus::Verified => "Verified",
            CanonicalStatus::Completed => "Completed",
            CanonicalStatus::Rejected => "Rejected",
            CanonicalStatus::Other => "Other",
        }
    }

    /// All groups in the fixed display order used by the status chart.
    pub fn all() -> [CanonicalStatus; 5] {
        [
            CanonicalStatus::Pending,
            CanonicalStatus::Verified,
            CanonicalStatus::Completed,
            CanonicalStatus::Rejected,
            CanonicalStatus::Other,
        ]
    }
}

/// Canonical verification outcome groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationOutcome {
    Approved,
    Adjustments,
    Rejected,
    Other,
}

impl VerificationOutcome {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Aprovado" | "Approved" => VerificationOutcome::Approved,
            "Ajustes" | "Adjustments" | "Aprovado com Ajustes" => VerificationOutcome::Adjustments,
            "Reprovado" | "Rejeitado" | "Rejected" => VerificationOutcome::Rejected,
            _ => VerificationOutcome::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationOutcome::Approved => "Approved",
            VerificationOutcome::Adjustments => "Adjustments",
            VerificationOutcome::Rejected => "Rejected",
            VerificationOutcome::Other => "Other",
        }
    }

    pub fn all() -> [VerificationOutcome; 4] {
        [
            VerificationOutcome::Approved,
            VerificationOutcome::Adjustments,
            VerificationOutcome::Rejected,
            VerificationOutcome::Other,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_synonyms_collapse() {
        assert_eq!(CanonicalStatus::from_raw("Pendente"), CanonicalStatus::Pending);
        assert_eq!(CanonicalStatus::from_raw("Aprovado"), CanonicalStatus::Verified);
        assert_eq!(CanonicalStatus::from_raw("Ajustes"), CanonicalStatus::Verified);
        assert_eq!(CanonicalStatus::from_raw("Concluído"), CanonicalStatus::Completed);
        assert_eq!(CanonicalStatus::from_raw("Reprovado"), CanonicalStatus::Rejected);
    }

    #[test]
    fn test_unrecognized_status_is_other() {
        assert_eq!(CanonicalStatus::from_raw("???"), CanonicalStatus::Other);
        assert_eq!(CanonicalStatus::from_raw(""), CanonicalStatus::Other);
        assert_eq!(CanonicalStatus::from_raw(UNSPECIFIED), CanonicalStatus::Other);
    }

    #[test]
    fn test_status_trims_whitespace() {
        assert_eq!(CanonicalStatus::from_raw("  Pendente  "), CanonicalStatus::Pending);
    }

    #[test]
    fn test_verification_outcomes() {
        assert_eq!(
            VerificationOutcome::from_raw("Aprovado"),
            VerificationOutcome::Approved
        );
        assert_eq!(
            VerificationOutcome::from_raw("Ajustes"),
            VerificationOutcome::Adjustments
        );
        assert_eq!(
            VerificationOutcome::from_raw("Reprovado"),
            VerificationOutcome::Rejected
        );
        assert_eq!(
            VerificationOutcome::from_raw("Pendente"),
            VerificationOutcome::Other
        );
    }

    #[test]
    fn test_effective_date_falls_back_to_registration() {
        let record = MaintenanceRecord {
            id: "M-1".to_string(),
            equipment_id: "EQ-1".to_string(),
            equipment_type: "Pump".to_string(),
            technician: UNSPECIFIED.to_string(),
            date: None,
            registration_date: Some(
                DateTime::parse_from_rfc3339("2025-03-10T14:30:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            area: UNSPECIFIED.to_string(),
            location: UNSPECIFIED.to_string(),
            maintenance_type: UNSPECIFIED.to_string(),
            is_critical: false,
            problem_category: UNSPECIFIED.to_string(),
            problem_description: UNSPECIFIED.to_string(),
            additional_notes: None,
            status: "Pendente".to_string(),
        };

        assert_eq!(
            record.effective_date(),
            NaiveDate::from_ymd_opt(2025, 3, 10)
        );
    }
}
