use std::fs;
use std::path::{Path, PathBuf};

/// A changelog in the usual "Keep a Changelog" shape
pub const SAMPLE_CHANGELOG: &str = r"# Changelog

All notable changes to this project will be documented in this file.

## [1.2.0] - 2024-05-01
### Added
- Export to JSON

### Fixed
- Crash when the config file is empty

## [1.1.0] - 2024-02-10
### Changed
- Faster startup

## [1.0.0] - 2023-12-24
### Added
- Initial release
";

/// Writes `content` to `CHANGELOG.md` inside `dir` and returns its path
pub fn write_changelog(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_changelog_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_changelog(temp_dir.path(), SAMPLE_CHANGELOG).unwrap();

        assert!(path.ends_with("CHANGELOG.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), SAMPLE_CHANGELOG);
    }
}
