use std::path::Path;

use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::core::AnalysisOptions;
use crate::error::RoundaboutError;

/// Workspace manifest file name looked up at the workspace root
pub const MANIFEST_FILE: &str = "roundabout.toml";

/// Optional `roundabout.toml` at the workspace root
///
/// Every field is optional; absent values fall back to the built-in
/// defaults, and command-line flags override the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    pub resolve: Option<ResolveSection>,
    pub detect: Option<DetectSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveSection {
    #[serde(rename = "source-dir")]
    pub source_dir: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub barrels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectSection {
    #[serde(rename = "max-depth")]
    pub max_depth: Option<usize>,
    pub ignore: Option<Vec<String>>,
}

impl Manifest {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RoundaboutError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        toml::from_str(&content)
            .map_err(|e| {
                // Try to extract span information from the error
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                RoundaboutError::ManifestParseError(Box::new(crate::error::ManifestParseError {
                    file: path.display().to_string(),
                    source_code: NamedSource::new(path.display().to_string(), content.clone()),
                    span,
                    source: e,
                }))
            })
            .into_diagnostic()
    }

    /// Load the manifest from `workspace_root`, or defaults when absent
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = workspace_root.join(MANIFEST_FILE);
        if path.is_file() {
            Self::parse_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Fold manifest values into `options`, keeping defaults for anything
    /// the manifest does not set
    pub fn apply(&self, mut options: AnalysisOptions) -> AnalysisOptions {
        if let Some(resolve) = &self.resolve {
            if let Some(source_dir) = &resolve.source_dir {
                options.source_dir = source_dir.clone();
            }
            if let Some(aliases) = &resolve.aliases {
                options.alias_prefixes = aliases.clone();
            }
            if let Some(extensions) = &resolve.extensions {
                options.extensions = extensions.clone();
            }
            if let Some(barrels) = &resolve.barrels {
                options.barrel_names = barrels.clone();
            }
        }
        if let Some(detect) = &self.detect {
            if let Some(max_depth) = detect.max_depth {
                options.max_depth = max_depth;
            }
            if let Some(ignore) = &detect.ignore {
                options.ignore_specifiers = ignore.clone();
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let toml_content = r##"
[resolve]
source-dir = "app"
aliases = ["#/"]
extensions = ["ts"]
barrels = ["index.ts"]

[detect]
max-depth = 12
ignore = ["*.generated"]
"##;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let manifest = Manifest::parse_file(file.path()).unwrap();
        let options = manifest.apply(AnalysisOptions::new("/ws"));

        assert_eq!(options.source_dir, "app");
        assert_eq!(options.alias_prefixes, vec!["#/"]);
        assert_eq!(options.extensions, vec!["ts"]);
        assert_eq!(options.barrel_names, vec!["index.ts"]);
        assert_eq!(options.max_depth, 12);
        assert_eq!(options.ignore_specifiers, vec!["*.generated"]);
    }

    #[test]
    fn test_partial_manifest_keeps_defaults() {
        let toml_content = "[detect]\nmax-depth = 3\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let manifest = Manifest::parse_file(file.path()).unwrap();
        let options = manifest.apply(AnalysisOptions::new("/ws"));

        assert_eq!(options.max_depth, 3);
        assert_eq!(options.source_dir, "src");
        assert_eq!(options.extensions, vec!["ts", "tsx", "js", "jsx"]);
    }

    #[test]
    fn test_load_without_manifest_is_default() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::load(temp.path()).unwrap();
        assert!(manifest.resolve.is_none());
        assert!(manifest.detect.is_none());
    }

    #[test]
    fn test_parse_invalid_manifest_reports_span() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[resolve\nsource-dir = 1").unwrap();

        assert!(Manifest::parse_file(file.path()).is_err());
    }
}
