//! GitHub Actions format report generation

use std::fmt::Write;

use super::{CycleReport, ReportGenerator};
use crate::error::RoundaboutError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, RoundaboutError> {
        let mut output = String::new();

        if !report.has_cycles() {
            writeln!(
                output,
                "::notice title=Import Check::No circular imports detected! ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Circular Imports::Found {} circular {}",
            report.cycle_count(),
            pluralize("import", report.cycle_count())
        )?;

        for (i, reported) in report.sorted_cycles().iter().enumerate() {
            let level = if reported.type_only {
                "notice"
            } else {
                "warning"
            };
            let suffix = if reported.type_only {
                " (type-only)"
            } else {
                ""
            };
            writeln!(
                output,
                "::{} title=Cycle {}::{}{}",
                level,
                i + 1,
                reported.display_chain(report.workspace_root()),
                suffix
            )?;
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break a cycle, move the shared pieces into a \
             module both sides can import."
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{empty_report, sample_report};
    use super::*;

    #[test]
    fn test_github_report_no_cycles() {
        let generator = GitHubReportGenerator::new();
        let output = generator.generate_report(&empty_report()).unwrap();

        assert!(output.starts_with("::notice title=Import Check::"));
    }

    #[test]
    fn test_github_report_annotations() {
        let generator = GitHubReportGenerator::new();
        let output = generator.generate_report(&sample_report()).unwrap();

        assert!(output.contains("::error title=Circular Imports::Found 2 circular imports"));
        assert!(output.contains("::warning title=Cycle 1::src/a.ts -> src/b.ts -> src/a.ts"));
        // Type-only cycles demote to notices.
        assert!(output.contains("::notice title=Cycle 2::"));
        assert!(output.contains("(type-only)"));
    }
}
