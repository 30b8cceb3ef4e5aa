use crate::error::{DroneScoreError, Result};
use crate::types::sample::{DatasetRow, DATASET_COLUMNS};
use std::path::Path;

/// Reads a dataset written by `generate`. The header must list the seven
/// columns in their documented order.
pub fn read_dataset(path: &Path) -> Result<Vec<DatasetRow>> {
    if !path.exists() {
        return Err(DroneScoreError::PathNotFound(path.display().to_string()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    if !headers.iter().eq(DATASET_COLUMNS.iter().copied()) {
        return Err(DroneScoreError::HeaderMismatch(format!(
            "expected [{}], found [{}]",
            DATASET_COLUMNS.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let rows = reader
        .deserialize::<DatasetRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    tracing::debug!(rows = rows.len(), path = %path.display(), "dataset read");
    Ok(rows)
}
