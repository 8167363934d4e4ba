//! Temporary files and directories for tests that touch the filesystem.

use std::io::Write;
use std::path::PathBuf;

/// Returns the workspace root directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Creates a temporary directory for test output.
///
/// The directory is cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Writes `contents` to a named temporary file with the given suffix
/// (e.g. `".yaml"`), kept alive as long as the returned handle.
pub fn temp_file_with(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("ocean_test_")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temporary test file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary test file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_temp_test_dir() {
        let dir = temp_test_dir();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_temp_file_with() {
        let file = temp_file_with(".yaml", "isotherm_c: 26.0\n");
        let path_str = file.path().to_string_lossy();
        assert!(path_str.ends_with(".yaml"));
        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "isotherm_c: 26.0\n"
        );
    }
}
