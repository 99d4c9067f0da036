//! JSON format report generation

use serde_json::json;

use super::{CycleReport, ReportGenerator};
use crate::error::RoundaboutError;
use crate::utils::paths::display_relative;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, RoundaboutError> {
        let cycles: Vec<_> = report
            .sorted_cycles()
            .iter()
            .map(|reported| {
                let files: Vec<String> = reported
                    .cycle
                    .files()
                    .iter()
                    .map(|file| display_relative(file, report.workspace_root()))
                    .collect();

                json!({
                    "files": files,
                    "length": reported.cycle.len(),
                    "type_only": reported.type_only,
                    "chain": reported.display_chain(report.workspace_root()),
                })
            })
            .collect();

        let payload = json!({
            "has_cycles": report.has_cycles(),
            "cycle_count": report.cycle_count(),
            "files_scanned": report.files_scanned(),
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&payload).map_err(RoundaboutError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::super::test_support::{empty_report, sample_report};
    use super::*;

    #[test]
    fn test_json_report_no_cycles() {
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&empty_report()).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cycle_count"], 0);
        assert_eq!(json["files_scanned"], 5);
        assert_eq!(json["cycles"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_cycles() {
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&sample_report()).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["cycle_count"], 2);

        let cycles = json["cycles"].as_array().unwrap();
        assert_eq!(cycles.len(), 2);

        let first = &cycles[0];
        assert_eq!(first["length"], 2);
        assert_eq!(first["type_only"], false);
        let files = first["files"].as_array().unwrap();
        assert_eq!(files.first().unwrap(), files.last().unwrap());
    }

    #[test]
    fn test_json_report_cycle_structure() {
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&sample_report()).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let cycle = &json["cycles"][0];
        assert!(cycle.get("files").is_some());
        assert!(cycle.get("chain").is_some());
        assert!(cycle.get("type_only").is_some());
        assert_eq!(cycle["chain"], "src/a.ts -> src/b.ts -> src/a.ts");
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&empty_report()).unwrap();

        // Pretty formatted JSON should have newlines and indentation
        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
