use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs, ResolveArgs};

#[derive(Parser)]
#[command(
    name = "roundabout",
    about = "🔄 Detect circular imports in JavaScript and TypeScript source trees",
    long_about = "roundabout follows import specifiers from file to file to find circular \
                  import chains. It resolves relative paths, configured alias prefixes and \
                  barrel files the way your bundler does, keeps per-file results cached within \
                  a run, and reports each structural cycle exactly once no matter how many \
                  entry points reach it.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a source tree for circular imports
    ///
    /// Discovers source files under the given paths, traces their import
    /// chains and reports every circular chain found. Cycles that exist
    /// only at the type level are flagged separately, since they carry no
    /// runtime circularity.
    #[command(
        long_about = "Scan source files and trace their resolved imports depth-first to find \
                      circular chains. Relative specifiers, alias prefixes and barrel files are \
                      resolved against the workspace; bare specifiers (external packages, \
                      built-in modules) end the chain. Dynamic `import()` references are \
                      excluded from cycle detection because they bind at runtime. Each \
                      structural cycle is reported once, however many entry points reach it."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "ROUNDABOUT_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Stop at the first cycle instead of collecting all of them
        #[arg(long, env = "ROUNDABOUT_FIRST_ONLY")]
        first_only: bool,

        /// Suppress cycles made up exclusively of type-only imports
        #[arg(long, env = "ROUNDABOUT_IGNORE_TYPE_CYCLES")]
        ignore_type_cycles: bool,
    },

    /// Render the resolved import graph
    ///
    /// Builds the import graph reachable from the discovered source files
    /// and renders it as ASCII art, a Mermaid diagram or a Graphviz DOT
    /// file, optionally highlighting the files and edges that sit on
    /// cycles.
    #[command(
        long_about = "Materialize the import graph reachable from the discovered files and \
                      render it for humans. Edge styling distinguishes static, type-only and \
                      dynamic references; with cycle highlighting enabled, files and edges \
                      participating in a circular chain are marked."
    )]
    Graph {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "ROUNDABOUT_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "ROUNDABOUT_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(long, default_value = "true", env = "ROUNDABOUT_HIGHLIGHT_CYCLES")]
        highlight_cycles: bool,

        /// Label edges with the raw import specifiers
        #[arg(long, env = "ROUNDABOUT_SHOW_SPECIFIERS")]
        show_specifiers: bool,
    },

    /// Show the resolved imports of a single file
    ///
    /// The debugging window into extraction and resolution: prints every
    /// reference found in the file with its line, kind, and what it
    /// resolved to (or that it is external).
    #[command(
        long_about = "Scan one file and print each discovered reference with its source line, \
                      binding kind (static, type-only, dynamic) and resolution result. \
                      References that do not resolve to a workspace file are shown as external; \
                      those are exactly the edges cycle detection never follows."
    )]
    Imports {
        /// File to inspect
        #[arg(value_name = "FILE", env = "ROUNDABOUT_FILE")]
        file: PathBuf,

        #[command(flatten)]
        resolve: ResolveArgs,

        /// Emit JSON instead of the human listing
        #[arg(long, env = "ROUNDABOUT_JSON")]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
