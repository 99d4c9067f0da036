//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - github: GitHub Actions format for PR annotations

pub mod github;
pub mod human;
pub mod json;

use std::path::{Path, PathBuf};

use crate::core::ImportCycle;
use crate::error::RoundaboutError;
use crate::utils::paths::display_relative;

/// One detected cycle plus its classification for reporting
#[derive(Debug, Clone)]
pub struct ReportedCycle {
    pub cycle: ImportCycle,
    /// Every edge on the cycle is a type-only reference; no runtime
    /// circularity exists
    pub type_only: bool,
}

impl ReportedCycle {
    /// Workspace-relative rendering of the cycle chain
    pub fn display_chain(&self, workspace_root: &Path) -> String {
        self.cycle
            .files()
            .iter()
            .map(|file| display_relative(file, workspace_root))
            .collect::<Vec<_>>()
            .join(crate::detector::CYCLE_ARROW)
    }
}

/// Outcome of one analysis run, the input to every report generator
#[derive(Debug, Clone)]
pub struct CycleReport {
    workspace_root: PathBuf,
    files_scanned: usize,
    cycles: Vec<ReportedCycle>,
}

impl CycleReport {
    pub fn new(workspace_root: PathBuf, files_scanned: usize, cycles: Vec<ReportedCycle>) -> Self {
        Self {
            workspace_root,
            files_scanned,
            cycles,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn cycles(&self) -> &[ReportedCycle] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Cycles sorted by their display chain for stable output
    pub fn sorted_cycles(&self) -> Vec<&ReportedCycle> {
        let mut sorted: Vec<&ReportedCycle> = self.cycles.iter().collect();
        sorted.sort_by_key(|reported| reported.display_chain(&self.workspace_root));
        sorted
    }
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, report: &CycleReport) -> Result<String, RoundaboutError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
