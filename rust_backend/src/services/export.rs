//! Export pipeline contract.
//!
//! Document generation is delegated to an external collaborator; the
//! engine's responsibility is validating the request and surfacing typed
//! failures. The contract is asynchronous so a real exporter can be
//! substituted for the in-process simulated one without touching callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::models::ReportDescriptor;

/// Recognized export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(EngineError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Opaque reference to a generated artifact. The engine does not interpret
/// it; rendering collaborators hand it to the download surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub reference: String,
    pub file_name: String,
    pub content_type: String,
}

/// Collaborator that turns an assembled report into a downloadable artifact.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    async fn export(
        &self,
        descriptor: &ReportDescriptor,
        format: ExportFormat,
    ) -> Result<ExportArtifact, EngineError>;
}

/// In-process stand-in for the document generation service. Produces a
/// plausible artifact reference without rendering anything.
pub struct SimulatedExporter;

#[async_trait]
impl ReportExporter for SimulatedExporter {
    async fn export(
        &self,
        descriptor: &ReportDescriptor,
        format: ExportFormat,
    ) -> Result<ExportArtifact, EngineError> {
        let file_name = format!("{}.{}", slugify(&descriptor.title), format.extension());
        Ok(ExportArtifact {
            reference: format!("exports/{}/{}", descriptor.id, file_name),
            file_name,
            content_type: format.content_type().to_string(),
        })
    }
}

fn slugify(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Validate an export request and delegate it to the exporter.
///
/// # Errors
///
/// - `NoActiveReport` when no report has been assembled
/// - `UnsupportedFormat` when `format` is not pdf/xlsx/csv/json
/// - whatever failure the exporter itself surfaces
pub async fn export_report<E: ReportExporter + ?Sized>(
    exporter: &E,
    descriptor: Option<&ReportDescriptor>,
    format: &str,
) -> Result<ExportArtifact, EngineError> {
    let descriptor = descriptor.ok_or(EngineError::NoActiveReport)?;
    let format = format.parse::<ExportFormat>()?;
    exporter.export(descriptor, format).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodSelector, ReportConfig};
    use crate::services::reports::build_report;
    use crate::transformations::RecordFilters;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn descriptor() -> ReportDescriptor {
        let config = ReportConfig {
            title: "Relatório Mensal".to_string(),
            period: PeriodSelector::All,
            filters: RecordFilters::default(),
            visualizations: BTreeSet::new(),
        };
        build_report(&config, &[], NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()).unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("XLSX".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(EngineError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_export_without_report_fails() {
        let result = export_report(&SimulatedExporter, None, "pdf").await;
        assert!(matches!(result, Err(EngineError::NoActiveReport)));
    }

    #[tokio::test]
    async fn test_export_unsupported_format_fails() {
        let descriptor = descriptor();
        let result = export_report(&SimulatedExporter, Some(&descriptor), "docx").await;
        assert!(matches!(result, Err(EngineError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_simulated_export_yields_artifact() {
        let descriptor = descriptor();
        let artifact = export_report(&SimulatedExporter, Some(&descriptor), "pdf")
            .await
            .unwrap();
        assert!(artifact.reference.contains(&descriptor.id));
        assert_eq!(artifact.content_type, "application/pdf");
        assert!(artifact.file_name.ends_with(".pdf"));
    }
}
