//! Imports command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde_json::json;

use crate::cache::AnalysisCache;
use crate::config::ImportsConfig;
use crate::error::RoundaboutError;
use crate::executors::CommandExecutor;
use crate::extractor::scan_source;
use crate::graph::ImportLink;
use crate::resolver::{ModuleResolver, file_id};
use crate::utils::paths::display_relative;
use crate::utils::string::pluralize;

pub struct ImportsExecutor;

impl CommandExecutor for ImportsExecutor {
    type Config = ImportsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let options = config
            .resolve
            .analysis_options()
            .wrap_err("Failed to load analysis options")?;

        let file = file_id(&config.file, &options.workspace_root);
        let content = std::fs::read_to_string(&file)
            .map_err(|e| RoundaboutError::FileReadError {
                path: file.clone(),
                source: e,
            })
            .into_diagnostic()?;

        let scanned = scan_source(&content);
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();

        if config.json {
            let references: Vec<_> = scanned
                .iter()
                .map(|import| {
                    let resolved = resolver.resolve(&import.specifier, &file, &mut cache);
                    json!({
                        "specifier": import.specifier,
                        "line": import.line,
                        "kind": ImportLink::kind_of(import.dynamic, import.type_only).label(),
                        "resolved": resolved
                            .map(|target| display_relative(&target, &options.workspace_root)),
                    })
                })
                .collect();

            let payload = json!({
                "file": display_relative(&file, &options.workspace_root),
                "references": references,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload)
                    .map_err(RoundaboutError::Json)
                    .into_diagnostic()?
            );
            return Ok(());
        }

        println!(
            "\n{} {} - {} {}\n",
            style("📄").cyan(),
            style(display_relative(&file, &options.workspace_root)).bold(),
            style(scanned.len()).yellow(),
            pluralize("reference", scanned.len())
        );

        for import in &scanned {
            let kind = ImportLink::kind_of(import.dynamic, import.type_only);
            let target = match resolver.resolve(&import.specifier, &file, &mut cache) {
                Some(resolved) => style(display_relative(&resolved, &options.workspace_root))
                    .green()
                    .to_string(),
                None => style("(external)").dim().to_string(),
            };
            println!(
                "  {:>4}  {:<9}  {}  {}  {}",
                style(import.line).dim(),
                kind.label(),
                style(&import.specifier).bold(),
                style("→").dim(),
                target
            );
        }

        Ok(())
    }
}
