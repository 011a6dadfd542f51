//! Record normalizer: alias tables onto the canonical schema.
//!
//! Historical exports of the maintenance store renamed several fields over
//! the years (and the oldest ones are Portuguese), so the same concept can
//! arrive under any of several keys. For each canonical field an ordered
//! alias list is consulted and the first present, non-empty value wins.
//! Doing this once at ingestion keeps the fallback chains out of every
//! aggregator.
//!
//! A record is only rejected when neither an id nor any usable date can be
//! recovered; everything downstream needs at least one of the two. All other
//! misses take the documented sentinel (or `false` for the critical flag).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::error::EngineError;
use crate::models::record::UNSPECIFIED;
use crate::models::{MaintenanceRecord, VerificationRecord};

const ID_ALIASES: &[&str] = &["id", "recordId", "registroId"];
const EQUIPMENT_ID_ALIASES: &[&str] = &["equipmentId", "equipamentoId", "equipamento"];
const EQUIPMENT_TYPE_ALIASES: &[&str] = &["equipmentType", "tipoEquipamento"];
const TECHNICIAN_ALIASES: &[&str] = &["technician", "tecnico", "responsavel"];
const DATE_ALIASES: &[&str] = &["date", "data", "maintenanceDate", "dataManutencao"];
const REGISTRATION_DATE_ALIASES: &[&str] = &["registrationDate", "dataRegistro", "createdAt"];
const AREA_ALIASES: &[&str] = &["area", "setor"];
const LOCATION_ALIASES: &[&str] = &["location", "local", "localizacao"];
const MAINTENANCE_TYPE_ALIASES: &[&str] = &["maintenanceType", "tipoManutencao", "tipo"];
const CRITICAL_ALIASES: &[&str] = &["isCritical", "critical", "critica"];
const PROBLEM_CATEGORY_ALIASES: &[&str] = &["problemCategory", "categoriaProblema", "categoria"];
const PROBLEM_DESCRIPTION_ALIASES: &[&str] =
    &["problemDescription", "descricaoProblema", "descricao"];
const NOTES_ALIASES: &[&str] = &["additionalNotes", "observacoes", "notas"];
const STATUS_ALIASES: &[&str] = &["status", "situacao"];

const MAINTENANCE_ID_ALIASES: &[&str] = &["maintenanceId", "manutencaoId", "registroId"];
const VERIFIER_ALIASES: &[&str] = &["verifier", "verificador"];
const RESULT_ALIASES: &[&str] = &["result", "resultado"];
const COMMENTS_ALIASES: &[&str] = &["comments", "comentarios", "observacoes"];
const VERIFICATION_DATE_ALIASES: &[&str] = &["date", "data", "verificationDate", "dataVerificacao"];

/// Result of normalizing a whole batch: the surviving records plus a count
/// of records dropped as unrecoverable, retained for diagnostics.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub records: Vec<MaintenanceRecord>,
    pub dropped: usize,
}

/// Batch outcome for the verification collection.
#[derive(Debug, Clone)]
pub struct VerificationOutcomeBatch {
    pub records: Vec<VerificationRecord>,
    pub dropped: usize,
}

/// First present, non-empty string value among the aliases.
fn first_string(raw: &Value, aliases: &[&str]) -> Option<String> {
    for key in aliases {
        if let Some(v) = raw.get(key) {
            match v {
                Value::String(s) if !s.trim().is_empty() => return Some(s.trim().to_string()),
                Value::Number(n) => return Some(n.to_string()),
                _ => {}
            }
        }
    }
    None
}

fn string_or_unspecified(raw: &Value, aliases: &[&str]) -> String {
    first_string(raw, aliases).unwrap_or_else(|| UNSPECIFIED.to_string())
}

/// Boolean fields arrive as real booleans or as legacy string flags.
fn first_bool(raw: &Value, aliases: &[&str]) -> bool {
    for key in aliases {
        match raw.get(key) {
            Some(Value::Bool(b)) => return *b,
            Some(Value::String(s)) => {
                return matches!(s.trim().to_lowercase().as_str(), "true" | "sim" | "yes" | "1")
            }
            Some(Value::Number(n)) => return n.as_i64() == Some(1),
            _ => {}
        }
    }
    false
}

/// Parse a calendar date from the formats seen in the historical data:
/// `%Y-%m-%d`, RFC 3339 (date part taken), and legacy `%d/%m/%Y`.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()
}

/// Parse a timestamp: RFC 3339, naive `%Y-%m-%d %H:%M:%S` (taken as UTC),
/// or a bare date (midnight UTC).
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(ndt.and_utc());
    }
    parse_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|ndt| ndt.and_utc())
}

/// Normalize one raw maintenance record.
///
/// # Errors
///
/// `InvalidRecord` when both the id and every date field are unrecoverable.
pub fn normalize_record(raw: &Value) -> Result<MaintenanceRecord, EngineError> {
    let id = first_string(raw, ID_ALIASES);
    let date = first_string(raw, DATE_ALIASES).and_then(|s| parse_date(&s));
    let registration_date =
        first_string(raw, REGISTRATION_DATE_ALIASES).and_then(|s| parse_datetime(&s));

    if id.is_none() && date.is_none() && registration_date.is_none() {
        return Err(EngineError::InvalidRecord(
            "record has neither id nor any recoverable date".to_string(),
        ));
    }

    Ok(MaintenanceRecord {
        id: id.unwrap_or_else(|| UNSPECIFIED.to_string()),
        equipment_id: string_or_unspecified(raw, EQUIPMENT_ID_ALIASES),
        equipment_type: string_or_unspecified(raw, EQUIPMENT_TYPE_ALIASES),
        technician: string_or_unspecified(raw, TECHNICIAN_ALIASES),
        date,
        registration_date,
        area: string_or_unspecified(raw, AREA_ALIASES),
        location: string_or_unspecified(raw, LOCATION_ALIASES),
        maintenance_type: string_or_unspecified(raw, MAINTENANCE_TYPE_ALIASES),
        is_critical: first_bool(raw, CRITICAL_ALIASES),
        problem_category: string_or_unspecified(raw, PROBLEM_CATEGORY_ALIASES),
        problem_description: string_or_unspecified(raw, PROBLEM_DESCRIPTION_ALIASES),
        additional_notes: first_string(raw, NOTES_ALIASES),
        status: string_or_unspecified(raw, STATUS_ALIASES),
    })
}

/// Normalize a whole batch, recovering locally from malformed records.
///
/// Bad records are dropped with a warning and counted; the batch itself
/// never fails.
pub fn normalize_batch(raw: &[Value]) -> NormalizeOutcome {
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for value in raw {
        match normalize_record(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                dropped += 1;
                log::warn!("dropping unrecoverable maintenance record: {}", e);
            }
        }
    }

    NormalizeOutcome { records, dropped }
}

/// Normalize one raw verification record.
///
/// # Errors
///
/// `InvalidRecord` when the maintenance id it should attach to is missing.
pub fn normalize_verification(raw: &Value) -> Result<VerificationRecord, EngineError> {
    let maintenance_id = first_string(raw, MAINTENANCE_ID_ALIASES).ok_or_else(|| {
        EngineError::InvalidRecord("verification record has no maintenance id".to_string())
    })?;

    Ok(VerificationRecord {
        maintenance_id,
        verifier: string_or_unspecified(raw, VERIFIER_ALIASES),
        date: first_string(raw, VERIFICATION_DATE_ALIASES).and_then(|s| parse_datetime(&s)),
        result: string_or_unspecified(raw, RESULT_ALIASES),
        comments: first_string(raw, COMMENTS_ALIASES).unwrap_or_default(),
    })
}

/// Batch variant of [`normalize_verification`], same drop policy as
/// [`normalize_batch`].
pub fn normalize_verification_batch(raw: &[Value]) -> VerificationOutcomeBatch {
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for value in raw {
        match normalize_verification(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                dropped += 1;
                log::warn!("dropping unrecoverable verification record: {}", e);
            }
        }
    }

    VerificationOutcomeBatch { records, dropped }
}
