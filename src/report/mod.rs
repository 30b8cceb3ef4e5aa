pub mod json;
pub mod md;
pub mod sarif;

use crate::error::DroneScoreError;
use crate::types::report::InspectionReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(report: &InspectionReport, format: OutputFormat) -> Result<String, DroneScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(DroneScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(DroneScoreError::Json),
    }
}
