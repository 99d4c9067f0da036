use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{ImportLink, ModuleNode};
use crate::cache::AnalysisCache;
use crate::core::AnalysisOptions;
use crate::extractor::ImportExtractor;
use crate::progress::ProgressReporter;
use crate::utils::paths::display_relative;

/// Builder for the materialized import graph
///
/// Expands outward from a set of seed files, following resolved references
/// through the same cached extractor the detector uses. Every reachable
/// workspace file becomes a node; external references never appear since
/// they do not resolve.
pub struct ImportGraphBuilder<'a> {
    options: &'a AnalysisOptions,
    graph: DiGraph<ModuleNode, ImportLink>,
    indices: HashMap<PathBuf, NodeIndex>,
}

impl<'a> ImportGraphBuilder<'a> {
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self {
            options,
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Expand the graph from `files` until no unvisited reachable file
    /// remains
    pub fn build_from(
        &mut self,
        files: &[PathBuf],
        cache: &mut AnalysisCache,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        let extractor = ImportExtractor::new(self.options);

        let mut queue: VecDeque<PathBuf> = files.iter().cloned().collect();
        let mut visited: HashSet<PathBuf> = files.iter().cloned().collect();

        while let Some(file) = queue.pop_front() {
            if let Some(p) = progress {
                p.update_graph_progress(&file);
            }

            let from = self.ensure_node(&file);
            let edges = extractor.imports_of(&file, cache);
            for edge in edges.iter() {
                let Some(target) = edge.resolved.as_deref() else {
                    continue;
                };
                let to = self.ensure_node(target);
                self.graph.add_edge(
                    from,
                    to,
                    ImportLink {
                        specifier: edge.specifier.clone(),
                        kind: ImportLink::kind_of(edge.dynamic, edge.type_only),
                        line: edge.line,
                    },
                );
                if visited.insert(target.to_path_buf()) {
                    queue.push_back(target.to_path_buf());
                }
            }
        }

        Ok(())
    }

    fn ensure_node(&mut self, file: &Path) -> NodeIndex {
        if let Some(&index) = self.indices.get(file) {
            return index;
        }
        let node = ModuleNode {
            name: display_relative(file, &self.options.workspace_root),
            path: file.to_path_buf(),
        };
        let index = self.graph.add_node(node);
        self.indices.insert(file.to_path_buf(), index);
        index
    }

    pub fn graph(&self) -> &DiGraph<ModuleNode, ImportLink> {
        &self.graph
    }
}
