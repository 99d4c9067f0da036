//! Graph command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cache::AnalysisCache;
use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::core::ImportCycle;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, ImportGraphBuilder};
use crate::progress::ProgressReporter;
use crate::source_discovery::SourceDiscovery;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Rendering the import graph...\n", style("📊").cyan());

        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let options = config
            .resolve
            .analysis_options()
            .wrap_err("Failed to load analysis options")?;

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

        let mut cache = AnalysisCache::new();

        if let Some(p) = progress.as_mut() {
            p.start_graph_building(files.len());
        }
        let mut builder = ImportGraphBuilder::new(&options);
        builder
            .build_from(&files, &mut cache, progress.as_ref())
            .wrap_err("Failed to build the import graph")?;
        if let Some(p) = progress.as_mut() {
            p.finish_graph_building();
        }

        // Cycles are only traced when they are going to be highlighted
        let cycles: Vec<ImportCycle> = if config.highlight_cycles {
            let detector = CycleDetector::new(&options);
            files
                .iter()
                .flat_map(|file| detector.find_cycles(file, &mut cache))
                .collect()
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_cycles, config.show_specifiers);
        let mut rendered = Vec::new();
        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(builder.graph(), &cycles, &mut rendered)
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(builder.graph(), &cycles, &mut rendered)
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(builder.graph(), &cycles, &mut rendered)
                .wrap_err("Failed to render DOT graph")?,
        }

        match &config.output {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to write graph to '{}'", path.display()))?;
                eprintln!(
                    "{} Graph written to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
            }
            None => {
                std::io::stdout()
                    .write_all(&rendered)
                    .into_diagnostic()
                    .wrap_err("Failed to write graph to stdout")?;
            }
        }

        Ok(())
    }
}
