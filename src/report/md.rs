use crate::types::report::InspectionReport;
use crate::types::scoring::{Rating, ScoreCard};

pub fn to_markdown(report: &InspectionReport) -> String {
    let summary = &report.summary;
    let mut output = String::new();
    output.push_str("# Dataset Inspection\n\n");
    output.push_str(&format!("File: {}\n\n", report.path));
    output.push_str("## Summary\n\n");
    output.push_str(&format!("- rows: {}\n", summary.rows));
    match (summary.min_score, summary.mean_score, summary.max_score) {
        (Some(min), Some(mean), Some(max)) => output.push_str(&format!(
            "- score: min {min:.1} / mean {mean:.2} / max {max:.1}\n"
        )),
        _ => output.push_str("- score: n/a\n"),
    }
    for rating in Rating::ALL {
        let count = summary.ratings.get(&rating).copied().unwrap_or(0);
        output.push_str(&format!("- {}: {}\n", rating.label(), count));
    }
    output.push('\n');

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
    }

    output
}

pub fn score_to_markdown(card: &ScoreCard) -> String {
    let config = &card.config;
    let breakdown = &card.breakdown;
    let mut output = String::new();
    output.push_str("# Drone Configuration Score\n\n");
    output.push_str("## Configuration\n\n");
    output.push_str(&format!(
        "- total_weight: {} g\n- center_of_mass_offset: {}\n- thrust_to_weight: {}\n- arm_length: {} mm\n- propeller_size: {} in\n- motor_kv: {}\n\n",
        config.total_weight,
        config.center_of_mass_offset,
        config.thrust_to_weight,
        config.arm_length,
        config.propeller_size,
        config.motor_kv
    ));

    output.push_str("## Penalties\n\n");
    output.push_str(&format!(
        "- center_of_mass: {:.2}\n- thrust_to_weight: {:.2}\n- motor_propeller_mismatch: {:.2}\n- propeller_overload: {:.2}\n- noise: {:+.2}\n\n",
        breakdown.center_of_mass,
        breakdown.thrust_to_weight,
        breakdown.motor_propeller_mismatch,
        breakdown.propeller_overload,
        breakdown.noise
    ));

    output.push_str(&format!("Score: {:.1}\n", card.score));
    output.push_str(&format!(
        "Rating: {} ({})\n",
        card.rating.label(),
        card.explanation
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use crate::types::report::{DatasetSummary, Finding};
    use crate::types::sample::DroneConfig;

    #[test]
    fn markdown_report_contains_sections() {
        let report = InspectionReport {
            path: "rating.csv".to_string(),
            summary: DatasetSummary::default(),
            findings: vec![Finding::blocking(
                "range.score",
                "Score outside [0, 100]",
                "1 row(s) violate this bound; first at row 0.",
            )],
        };

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Dataset Inspection"));
        assert!(rendered.contains("- score: n/a"));
        assert!(rendered.contains("[blocking] Score outside [0, 100]"));
    }

    #[test]
    fn markdown_score_lists_penalties_and_rating() {
        let card = scoring::score_with_noise(
            DroneConfig {
                total_weight: 900.0,
                center_of_mass_offset: 0.7,
                thrust_to_weight: 2.1,
                arm_length: 220.0,
                propeller_size: 5,
                motor_kv: 2300,
            },
            -1.0,
        );

        let rendered = score_to_markdown(&card);
        assert!(rendered.contains("- center_of_mass: 2.63"));
        assert!(rendered.contains("- noise: -1.00"));
        assert!(rendered.contains("Score: 96.4"));
        assert!(rendered.contains("Rating: excellent"));
    }
}
