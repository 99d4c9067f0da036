use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::ImportCycle;
use crate::error::RoundaboutError;
use crate::graph::{ImportKind, ImportLink, ModuleNode};

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const TYPE_EDGE: &str = "#90A4AE"; // Blue-grey
    pub const DYNAMIC_EDGE: &str = "#81C784"; // Soft green
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(RoundaboutError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(RoundaboutError::from)
    };
}

pub struct GraphRenderer {
    highlight_cycles: bool,
    show_specifiers: bool,
}

/// Lookup tables for cycle membership, derived once per render
struct CycleIndex {
    files: HashSet<PathBuf>,
    edges: HashSet<(PathBuf, PathBuf)>,
}

impl CycleIndex {
    fn new(cycles: &[ImportCycle]) -> Self {
        let mut files = HashSet::new();
        let mut edges = HashSet::new();
        for cycle in cycles {
            files.extend(cycle.files().iter().cloned());
            for pair in cycle.files().windows(2) {
                edges.insert((pair[0].clone(), pair[1].clone()));
            }
        }
        Self { files, edges }
    }

    fn contains_file(&self, file: &Path) -> bool {
        self.files.contains(file)
    }

    fn contains_edge(&self, from: &Path, to: &Path) -> bool {
        self.edges
            .contains(&(from.to_path_buf(), to.to_path_buf()))
    }
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool, show_specifiers: bool) -> Self {
        Self {
            highlight_cycles,
            show_specifiers,
        }
    }

    pub fn render_ascii(
        &self,
        graph: &DiGraph<ModuleNode, ImportLink>,
        cycles: &[ImportCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No source files found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Import Graph\n")?;

        let index = CycleIndex::new(cycles);

        // Sort nodes by name for consistent output
        let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
        nodes.sort_by_key(|&idx| graph[idx].name.clone());

        for node_idx in nodes {
            let node = &graph[node_idx];
            let in_cycle = self.highlight_cycles && index.contains_file(&node.path);

            if in_cycle {
                writeln_out!(output, "{} ⚠️  IN CYCLE", node.name)?;
            } else {
                writeln_out!(output, "{}", node.name)?;
            }

            let mut edges: Vec<_> = graph.edges(node_idx).collect();
            edges.sort_by_key(|edge| (graph[edge.target()].name.clone(), edge.weight().line));

            if edges.is_empty() {
                writeln_out!(output, "  └── (no workspace imports)")?;
            } else {
                for (i, edge) in edges.iter().enumerate() {
                    let target = &graph[edge.target()];
                    let link = edge.weight();
                    let prefix = if i == edges.len() - 1 { "└──" } else { "├──" };

                    let cycle_marker = if self.highlight_cycles
                        && index.contains_edge(&node.path, &target.path)
                    {
                        " ⚠️  [CYCLE]"
                    } else {
                        ""
                    };

                    let specifier = if self.show_specifiers {
                        format!(" as '{}' (line {})", link.specifier, link.line)
                    } else {
                        String::new()
                    };

                    writeln_out!(
                        output,
                        "  {} → {} ({}){}{}",
                        prefix,
                        target.name,
                        link.kind.label(),
                        specifier,
                        cycle_marker
                    )?;
                }
            }

            writeln_out!(output)?; // Empty line between files
        }

        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output, "⚠️  = Part of an import cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<ModuleNode, ImportLink>,
        cycles: &[ImportCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        let index = CycleIndex::new(cycles);

        let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
        nodes.sort_by_key(|&idx| graph[idx].name.clone());

        for node_idx in &nodes {
            let node = &graph[*node_idx];
            writeln_out!(
                output,
                "    {}[\"{}\"]",
                mermaid_id(&node.name),
                node.name
            )?;
            if self.highlight_cycles && index.contains_file(&node.path) {
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{}",
                    mermaid_id(&node.name),
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;
        for edge in graph.edge_references() {
            let from = &graph[edge.source()];
            let to = &graph[edge.target()];
            let link = edge.weight();

            let arrow = match link.kind {
                ImportKind::Static => "-->",
                ImportKind::TypeOnly => "-.->",
                ImportKind::Dynamic => "-. dynamic .->",
            };

            if self.show_specifiers && link.kind == ImportKind::Static {
                writeln_out!(
                    output,
                    "    {} {}|\"{}\"| {}",
                    mermaid_id(&from.name),
                    arrow,
                    link.specifier,
                    mermaid_id(&to.name)
                )?;
            } else {
                writeln_out!(
                    output,
                    "    {} {} {}",
                    mermaid_id(&from.name),
                    arrow,
                    mermaid_id(&to.name)
                )?;
            }
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<ModuleNode, ImportLink>,
        cycles: &[ImportCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph imports {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=\"rounded,filled\"];")?;
        writeln_out!(output)?;

        let index = CycleIndex::new(cycles);

        let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
        nodes.sort_by_key(|&idx| graph[idx].name.clone());

        for node_idx in &nodes {
            let node = &graph[*node_idx];
            let (fill, stroke) = if self.highlight_cycles && index.contains_file(&node.path) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                "    \"{}\" [fillcolor=\"{}\", color=\"{}\"];",
                node.name,
                fill,
                stroke
            )?;
        }

        writeln_out!(output)?;
        for edge in graph.edge_references() {
            let from = &graph[edge.source()];
            let to = &graph[edge.target()];
            let link = edge.weight();

            let in_cycle =
                self.highlight_cycles && index.contains_edge(&from.path, &to.path);
            let color = if in_cycle {
                colors::CYCLE_EDGE
            } else {
                match link.kind {
                    ImportKind::Static => colors::NORMAL_EDGE,
                    ImportKind::TypeOnly => colors::TYPE_EDGE,
                    ImportKind::Dynamic => colors::DYNAMIC_EDGE,
                }
            };
            let style = match link.kind {
                ImportKind::Static => "solid",
                ImportKind::TypeOnly => "dotted",
                ImportKind::Dynamic => "dashed",
            };
            let width = if in_cycle { ", penwidth=2.0" } else { "" };

            if self.show_specifiers {
                writeln_out!(
                    output,
                    "    \"{}\" -> \"{}\" [color=\"{}\", style={}, label=\"{}\"{}];",
                    from.name,
                    to.name,
                    color,
                    style,
                    link.specifier,
                    width
                )?;
            } else {
                writeln_out!(
                    output,
                    "    \"{}\" -> \"{}\" [color=\"{}\", style={}{}];",
                    from.name,
                    to.name,
                    color,
                    style,
                    width
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

/// Mermaid node ids admit only a narrow character set
fn mermaid_id(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
