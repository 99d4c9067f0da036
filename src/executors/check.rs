//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cache::AnalysisCache;
use crate::cli::OutputFormat;
use crate::config::CheckImportsConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::extractor::ImportExtractor;
use crate::progress::ProgressReporter;
use crate::reports::{
    CycleReport, GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
    ReportedCycle,
};
use crate::source_discovery::SourceDiscovery;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckImportsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking for circular imports...\n",
            style("🔄").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let options = config
            .resolve
            .analysis_options()
            .wrap_err("Failed to load analysis options")?
            .with_report_all_cycles(!config.first_only);

        eprintln!(
            "  {} Workspace root: {}",
            style("→").dim(),
            style(options.workspace_root.display()).bold()
        );
        eprintln!(
            "  {} Max depth: {}",
            style("→").dim(),
            style(options.max_depth).bold()
        );
        eprintln!(
            "  {} Mode: {}",
            style("→").dim(),
            if config.first_only {
                style("first cycle only").yellow()
            } else {
                style("all cycles").green()
            }
        );

        // Discover source files
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }
        let discovery = SourceDiscovery::new(&options);
        let files = discovery
            .discover_all(&config.paths, progress.as_ref())
            .wrap_err("Failed to discover source files")?;
        if let Some(p) = progress.as_mut() {
            p.finish_discovery(files.len());
        }

        if files.is_empty() {
            eprintln!("{} No source files found to analyze", style("ℹ").blue());
            return Ok(());
        }

        // Detect cycles from every discovered file through one shared cache;
        // the reported-signature set keeps each structural cycle unique.
        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection(files.len());
        }

        let detector = CycleDetector::new(&options);
        let mut cache = AnalysisCache::new();
        let mut cycles = Vec::new();
        for file in &files {
            if let Some(p) = progress.as_ref() {
                p.update_cycle_detection(file);
            }
            cycles.extend(detector.find_cycles(file, &mut cache));
            if !options.report_all_cycles && !cycles.is_empty() {
                break;
            }
        }

        if let Some(p) = progress.as_mut() {
            p.finish_cycle_detection(cycles.len());
        }

        // Classify cycles; purely type-level ones carry no runtime circularity
        let extractor = ImportExtractor::new(&options);
        let mut reported = Vec::new();
        for cycle in cycles {
            let type_only = extractor.has_only_type_imports(cycle.files(), &mut cache);
            if type_only && config.ignore_type_cycles {
                continue;
            }
            reported.push(ReportedCycle { cycle, type_only });
        }

        let report = CycleReport::new(options.workspace_root.clone(), files.len(), reported);

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles);
                generator.generate_report(&report)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&report)
            }
            OutputFormat::GitHub => {
                let generator = GitHubReportGenerator::new();
                generator.generate_report(&report)
            }
        };

        match report_result {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
