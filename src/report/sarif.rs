use crate::types::report::InspectionReport;
use serde_json::json;

pub fn to_sarif(report: &InspectionReport) -> Result<String, serde_json::Error> {
    let results: Vec<_> = report
        .findings
        .iter()
        .map(|finding| {
            json!({
                "ruleId": finding.id,
                "level": if finding.blocking { "error" } else { "warning" },
                "message": { "text": finding.body },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": { "uri": report.path }
                    }
                }],
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "dronescore",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
