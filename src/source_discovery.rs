use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use miette::Result;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::constants::discovery::SKIP_DIRS;
use crate::core::AnalysisOptions;
use crate::progress::ProgressReporter;
use crate::resolver::file_id;

pub struct SourceDiscovery<'a> {
    options: &'a AnalysisOptions,
}

impl<'a> SourceDiscovery<'a> {
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self { options }
    }

    /// Discover analyzable source files under the given paths
    ///
    /// A path pointing at a file is taken as-is (when its extension is
    /// analyzable); directories are walked recursively, skipping the usual
    /// vendored and generated trees. Results are normalized file identities,
    /// deduplicated and sorted for stable output.
    pub fn discover_all(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        let mut files = BTreeSet::new();

        for path in paths {
            let anchored = file_id(path, &self.options.workspace_root);

            if !anchored.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    console::style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if anchored.is_file() {
                files.insert(anchored);
                continue;
            }

            files.extend(self.walk_directory(&anchored, progress));
        }

        Ok(files.into_iter().collect())
    }

    fn walk_directory(&self, root: &Path, progress: Option<&ProgressReporter>) -> Vec<PathBuf> {
        let candidates: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| {
                // The walk root itself is always entered, whatever its name
                if entry.depth() == 0 {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !SKIP_DIRS.contains(&name.as_ref()) && !name.starts_with('.')
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();

        candidates
            .into_par_iter()
            .filter(|path| {
                if let Some(p) = progress {
                    p.scanning_file(path);
                }
                self.is_analyzable(path)
            })
            .map(|path| file_id(&path, &self.options.workspace_root))
            .collect()
    }

    fn is_analyzable(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                self.options
                    .extensions
                    .iter()
                    .any(|known| known == extension)
            })
    }
}
