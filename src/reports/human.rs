//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{CycleReport, ReportGenerator};
use crate::error::RoundaboutError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, RoundaboutError> {
        let mut output = String::new();

        if !report.has_cycles() {
            write!(
                output,
                "\n{} No circular imports detected across {} scanned {}.\n",
                style("✅").green().bold(),
                style(report.files_scanned()).bold(),
                pluralize("file", report.files_scanned())
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found {} circular {}:\n\n",
            style("❌").red().bold(),
            style(report.cycle_count()).red().bold(),
            pluralize("import", report.cycle_count())
        )?;

        let total_cycles = report.cycle_count();
        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);

        let sorted = report.sorted_cycles();
        let cycles_to_show = match self.max_cycles {
            Some(limit) => &sorted[..limit.min(sorted.len())],
            None => &sorted[..],
        };

        for (i, reported) in cycles_to_show.iter().enumerate() {
            let type_marker = if reported.type_only {
                format!(" {}", style("(type-only)").dim())
            } else {
                String::new()
            };
            writeln!(
                output,
                "{} Cycle #{} ({} {}){}",
                style("🔄").yellow(),
                i + 1,
                reported.cycle.len(),
                pluralize("file", reported.cycle.len()),
                type_marker
            )?;

            writeln!(
                output,
                "    {}",
                style(reported.display_chain(report.workspace_root())).bold()
            )?;
            writeln!(output)?;
        }

        if !showing_all {
            writeln!(
                output,
                "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(
                    self.max_cycles
                        .expect("max_cycles must be Some when !showing_all")
                )
                .yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} To break a cycle, invert or remove at least one of its imports.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Extracting the shared pieces into a module both sides import is usually the \
             cleanest fix.",
            style("💡").yellow()
        )?;
        if report.cycles().iter().any(|reported| reported.type_only) {
            writeln!(
                output,
                "{} Type-only cycles vanish at runtime; they matter for build tooling, not for \
                 execution order.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}
