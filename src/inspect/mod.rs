pub mod reader;

use crate::error::Result;
use crate::generator::manifest;
use crate::scoring::rating;
use crate::types::report::{DatasetSummary, Finding, InspectionReport};
use crate::types::sample::{
    min_arm_length, DatasetRow, CENTER_OF_MASS_BOUNDS, MOTOR_KV_RANGE, PROPELLER_SIZES,
    THRUST_TO_WEIGHT_BOUNDS, TOTAL_WEIGHT_BOUNDS,
};
use crate::types::scoring::{MAX_SCORE, MIN_SCORE};
use std::path::Path;

/// Slack for comparing rounded CSV values against computed bounds.
const BOUND_TOLERANCE: f64 = 1e-6;

struct RangeCheck {
    id: &'static str,
    title: &'static str,
    violates: fn(&DatasetRow) -> bool,
}

const RANGE_CHECKS: [RangeCheck; 7] = [
    RangeCheck {
        id: "range.score",
        title: "Score outside [0, 100]",
        violates: |row| !(MIN_SCORE..=MAX_SCORE).contains(&row.score),
    },
    RangeCheck {
        id: "range.total_weight",
        title: "Total weight outside [500, 2500] g",
        violates: |row| {
            !(TOTAL_WEIGHT_BOUNDS.0..=TOTAL_WEIGHT_BOUNDS.1).contains(&row.total_weight)
        },
    },
    RangeCheck {
        id: "range.center_of_mass_offset",
        title: "Center of mass offset outside [0, 10]",
        violates: |row| {
            !(CENTER_OF_MASS_BOUNDS.0..=CENTER_OF_MASS_BOUNDS.1)
                .contains(&row.center_of_mass_offset)
        },
    },
    RangeCheck {
        id: "range.thrust_to_weight",
        title: "Thrust-to-weight outside [0.8, 3.5]",
        violates: |row| {
            !(THRUST_TO_WEIGHT_BOUNDS.0..=THRUST_TO_WEIGHT_BOUNDS.1)
                .contains(&row.thrust_to_weight)
        },
    },
    RangeCheck {
        id: "range.propeller_size",
        title: "Unsupported propeller size",
        violates: |row| !PROPELLER_SIZES.contains(&row.propeller_size),
    },
    RangeCheck {
        id: "range.motor_kv",
        title: "Motor KV outside [1400, 2700)",
        violates: |row| !MOTOR_KV_RANGE.contains(&row.motor_kv),
    },
    RangeCheck {
        id: "bound.arm_length",
        title: "Arm too short for propeller",
        violates: |row| row.arm_length + BOUND_TOLERANCE < min_arm_length(row.propeller_size),
    },
];

pub fn inspect(path: &Path) -> Result<InspectionReport> {
    let rows = reader::read_dataset(path)?;
    let mut findings = range_findings(&rows);

    if rows.is_empty() {
        findings.push(Finding::warning(
            "dataset.empty",
            "Dataset has no rows",
            "The file holds a header but no configuration samples.",
        ));
    }

    match manifest::read_manifest(path)? {
        Some(recorded) => {
            let actual = manifest::sha256_file(path)?;
            if recorded.sha256 != actual {
                findings.push(Finding::blocking(
                    "manifest.digest_mismatch",
                    "Dataset differs from its manifest",
                    format!(
                        "Manifest records sha256 {} but the file hashes to {}.",
                        recorded.sha256, actual
                    ),
                ));
            }
        }
        None => findings.push(Finding::warning(
            "manifest.missing",
            "No run manifest",
            format!(
                "{} not found; provenance cannot be verified.",
                manifest::manifest_path(path).display()
            ),
        )),
    }

    tracing::info!(
        rows = rows.len(),
        findings = findings.len(),
        "dataset inspected"
    );
    Ok(InspectionReport {
        path: path.display().to_string(),
        summary: summarize(&rows),
        findings,
    })
}

pub fn range_findings(rows: &[DatasetRow]) -> Vec<Finding> {
    RANGE_CHECKS
        .iter()
        .filter_map(|check| {
            let mut offending = rows
                .iter()
                .enumerate()
                .filter(|(_, row)| (check.violates)(row))
                .map(|(index, _)| index);
            let first = offending.next()?;
            let count = 1 + offending.count();
            Some(Finding::blocking(
                check.id,
                check.title,
                format!("{count} row(s) violate this bound; first at row {first}."),
            ))
        })
        .collect()
}

pub fn summarize(rows: &[DatasetRow]) -> DatasetSummary {
    let mut summary = DatasetSummary {
        rows: rows.len(),
        ..DatasetSummary::default()
    };
    if rows.is_empty() {
        return summary;
    }

    let scores = rows.iter().map(|row| row.score);
    summary.min_score = scores.clone().reduce(f64::min);
    summary.max_score = scores.clone().reduce(f64::max);
    summary.mean_score = Some(scores.sum::<f64>() / rows.len() as f64);
    for row in rows {
        *summary
            .ratings
            .entry(rating::interpret(row.score))
            .or_insert(0) += 1;
    }
    summary
}
