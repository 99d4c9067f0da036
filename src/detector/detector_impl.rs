use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::cache::AnalysisCache;
use crate::core::{AnalysisOptions, ImportCycle};
use crate::detector::canonical::{cycle_signature, minimal_cycle};
use crate::extractor::ImportExtractor;
use crate::resolver::file_id;

/// Detector for circular imports reachable from a starting file
///
/// The traversal is synchronous and single-threaded; one run goes to
/// completion (or depth exhaustion) before returning. It never revisits a
/// file that is currently on the path stack, but it may visit the same file
/// again on other branches - the same file can legitimately sit on several
/// distinct cycles reachable through different paths, so there is no global
/// visited set.
pub struct CycleDetector<'a> {
    options: &'a AnalysisOptions,
    extractor: ImportExtractor<'a>,
}

struct Traversal {
    path: Vec<PathBuf>,
    on_path: HashSet<PathBuf>,
    cycles: Vec<ImportCycle>,
    done: bool,
}

impl<'a> CycleDetector<'a> {
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self {
            options,
            extractor: ImportExtractor::new(options),
        }
    }

    /// Find cycles reachable from `start`
    ///
    /// Returns only cycles whose signature has not already been recorded in
    /// `cache` by earlier calls of the same session, so running over several
    /// entry points reports each structural cycle exactly once. With
    /// `report_all_cycles` unset the traversal stops at the first newly
    /// recorded cycle.
    pub fn find_cycles(&self, start: &Path, cache: &mut AnalysisCache) -> Vec<ImportCycle> {
        let start = file_id(start, &self.options.workspace_root);
        let mut traversal = Traversal {
            path: Vec::new(),
            on_path: HashSet::new(),
            cycles: Vec::new(),
            done: false,
        };
        self.walk(&start, 0, &mut traversal, cache);
        traversal.cycles
    }

    fn walk(&self, file: &Path, depth: usize, traversal: &mut Traversal, cache: &mut AnalysisCache) {
        traversal.path.push(file.to_path_buf());
        traversal.on_path.insert(file.to_path_buf());

        let edges = self.extractor.imports_of(file, cache);
        for edge in edges.iter() {
            if traversal.done {
                break;
            }
            // Dynamic references bind at runtime and are not part of the
            // static cycle graph.
            if edge.dynamic {
                continue;
            }
            let Some(target) = edge.resolved.as_deref() else {
                continue;
            };

            if traversal.on_path.contains(target) {
                let mut raw_path = traversal.path.clone();
                raw_path.push(target.to_path_buf());
                let signature = cycle_signature(&raw_path);
                if cache.mark_reported(signature) {
                    traversal.cycles.push(ImportCycle::new(minimal_cycle(&raw_path)));
                    if !self.options.report_all_cycles {
                        traversal.done = true;
                    }
                }
            } else if depth < self.options.max_depth {
                self.walk(target, depth + 1, traversal, cache);
            }
        }

        traversal.path.pop();
        traversal.on_path.remove(file);
    }
}
