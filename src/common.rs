//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};

use crate::core::AnalysisOptions;
use crate::manifest::Manifest;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Paths to analyze (defaults to the workspace root)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Module resolution flags shared by every command
///
/// Flags override the `roundabout.toml` manifest, which overrides the
/// built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Workspace root (defaults to the current directory)
    #[arg(long, env = "ROUNDABOUT_WORKSPACE_ROOT")]
    pub workspace_root: Option<PathBuf>,

    /// Source subdirectory that alias prefixes resolve against
    #[arg(long, env = "ROUNDABOUT_SOURCE_DIR")]
    pub source_dir: Option<String>,

    /// Alias prefix resolved against the source directory (repeatable)
    #[arg(long = "alias", value_name = "PREFIX")]
    pub aliases: Vec<String>,

    /// Extension probed for extensionless specifiers (repeatable, in order)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Barrel file name probed inside directory specifiers (repeatable)
    #[arg(long = "barrel", value_name = "NAME")]
    pub barrels: Vec<String>,

    /// Glob pattern for import specifiers to ignore (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Traversal depth ceiling
    #[arg(long, env = "ROUNDABOUT_MAX_DEPTH")]
    pub max_depth: Option<usize>,
}

impl CommonArgs {
    /// Get paths, using the workspace root if none provided
    ///
    /// Relative paths are later anchored at the workspace root, so the bare
    /// `.` default always means "the whole workspace".
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }
}

impl ResolveArgs {
    /// Layer the manifest and these flags over the built-in defaults
    pub fn analysis_options(&self) -> Result<AnalysisOptions> {
        let workspace_root = match &self.workspace_root {
            Some(root) => root.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        let manifest = Manifest::load(&workspace_root)?;
        let mut options = manifest.apply(AnalysisOptions::new(workspace_root));

        if let Some(source_dir) = &self.source_dir {
            options.source_dir = source_dir.clone();
        }
        if !self.aliases.is_empty() {
            options.alias_prefixes = self.aliases.clone();
        }
        if !self.extensions.is_empty() {
            options.extensions = self.extensions.clone();
        }
        if !self.barrels.is_empty() {
            options.barrel_names = self.barrels.clone();
        }
        if !self.ignore.is_empty() {
            options.ignore_specifiers = self.ignore.clone();
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }

        // The core silently skips patterns that do not compile; the CLI can
        // afford to reject them up front instead.
        for pattern in &options.ignore_specifiers {
            glob::Pattern::new(pattern)
                .map_err(|source| crate::error::RoundaboutError::PatternError {
                    pattern: pattern.clone(),
                    source,
                })
                .into_diagnostic()?;
        }

        Ok(options)
    }
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "ROUNDABOUT_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "ROUNDABOUT_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::RoundaboutError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::RoundaboutError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_args_get_paths_empty() {
        let args = CommonArgs {
            paths: vec![],
            resolve: ResolveArgs::default(),
        };

        assert_eq!(args.get_paths(), vec![PathBuf::from(".")]);
    }

    #[test]
    fn test_common_args_get_paths_with_values() {
        let test_paths = vec![PathBuf::from("src"), PathBuf::from("tools")];

        let args = CommonArgs {
            paths: test_paths.clone(),
            resolve: ResolveArgs::default(),
        };

        assert_eq!(args.get_paths(), test_paths);
    }

    #[test]
    fn test_resolve_args_flag_overrides() {
        let temp = tempfile::TempDir::new().unwrap();
        let args = ResolveArgs {
            workspace_root: Some(temp.path().to_path_buf()),
            source_dir: Some("app".to_string()),
            aliases: vec!["#/".to_string()],
            max_depth: Some(7),
            ..ResolveArgs::default()
        };

        let options = args.analysis_options().unwrap();
        assert_eq!(options.workspace_root, temp.path());
        assert_eq!(options.source_dir, "app");
        assert_eq!(options.alias_prefixes, vec!["#/"]);
        assert_eq!(options.max_depth, 7);
        // Untouched knobs keep their defaults.
        assert_eq!(options.extensions, vec!["ts", "tsx", "js", "jsx"]);
    }

    #[test]
    fn test_resolve_args_rejects_invalid_ignore_pattern() {
        let temp = tempfile::TempDir::new().unwrap();
        let args = ResolveArgs {
            workspace_root: Some(temp.path().to_path_buf()),
            ignore: vec!["[".to_string()],
            ..ResolveArgs::default()
        };

        assert!(args.analysis_options().is_err());
    }

    #[test]
    fn test_resolve_args_manifest_then_flags() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("roundabout.toml"),
            "[detect]\nmax-depth = 9\n\n[resolve]\nsource-dir = \"lib\"\n",
        )
        .unwrap();

        let args = ResolveArgs {
            workspace_root: Some(temp.path().to_path_buf()),
            source_dir: Some("app".to_string()),
            ..ResolveArgs::default()
        };

        let options = args.analysis_options().unwrap();
        // The flag wins over the manifest; the manifest wins over defaults.
        assert_eq!(options.source_dir, "app");
        assert_eq!(options.max_depth, 9);
    }
}
