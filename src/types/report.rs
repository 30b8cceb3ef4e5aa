use crate::types::scoring::{Rating, Score};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    pub fn blocking(id: &str, title: &str, body: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.into(),
            blocking: true,
        }
    }

    pub fn warning(id: &str, title: &str, body: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.into(),
            blocking: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub min_score: Option<Score>,
    pub mean_score: Option<Score>,
    pub max_score: Option<Score>,
    pub ratings: BTreeMap<Rating, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    pub path: String,
    pub summary: DatasetSummary,
    pub findings: Vec<Finding>,
}

impl InspectionReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }
}
