//! Path display helpers

use std::path::Path;

/// Render a file relative to the workspace root when possible
///
/// Reports and graphs stay readable with workspace-relative names; files
/// outside the root fall back to their absolute spelling.
pub fn display_relative(file: &Path, workspace_root: &Path) -> String {
    file.strip_prefix(workspace_root)
        .unwrap_or(file)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_relative_inside_root() {
        assert_eq!(
            display_relative(Path::new("/ws/src/a.ts"), Path::new("/ws")),
            "src/a.ts"
        );
    }

    #[test]
    fn test_display_relative_outside_root() {
        assert_eq!(
            display_relative(Path::new("/elsewhere/a.ts"), Path::new("/ws")),
            "/elsewhere/a.ts"
        );
    }
}
