use std::path::Path;

use tracing::{debug, info};

use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::map::ChangelogMap;
use crate::parser::Parser;
use crate::types::{Release, Result};

/// A changelog document with its raw contents and parsed version sections
#[derive(Debug, Clone)]
pub struct Changelog {
    content: String,
    sections: ChangelogMap,
    config: ChangelogConfig,
}

impl Changelog {
    /// Reads the changelog at `config.path` and parses it.
    ///
    /// # Errors
    /// Returns `ChangelogError::ReadError` (with the path as context) if the
    /// file cannot be read or is not valid UTF-8. Nothing is parsed in that case.
    pub async fn load(config: ChangelogConfig) -> Result<Self> {
        debug!(path = %config.path.display(), "reading changelog");

        let content = tokio::fs::read_to_string(&config.path)
            .await
            .map_err(|e| {
                ChangelogError::ReadError(e)
                    .with_context(format!("Failed to read {}", config.path.display()))
            })?;

        let changelog = Self::from_content(content, config);
        info!(
            path = %changelog.path().display(),
            versions = changelog.sections.len(),
            "loaded changelog"
        );
        Ok(changelog)
    }

    /// Parses changelog text that has already been read.
    pub fn from_content(content: impl Into<String>, config: ChangelogConfig) -> Self {
        let content = content.into();
        let sections = Parser::new().parse(&content);

        Self {
            content,
            sections,
            config,
        }
    }

    /// Gets the path the changelog was configured with
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Gets the raw content of the changelog
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Gets a reference to all version sections
    #[must_use]
    pub const fn sections(&self) -> &ChangelogMap {
        &self.sections
    }

    #[must_use]
    pub const fn config(&self) -> &ChangelogConfig {
        &self.config
    }

    /// The topmost version label, if the document has any version heading
    #[must_use]
    pub fn first_version(&self) -> Option<&str> {
        self.sections.first_version()
    }

    /// The topmost version section
    #[must_use]
    pub fn latest(&self) -> Option<Release<'_>> {
        self.iter_releases().next()
    }

    /// Looks up the notes of an exact version label
    ///
    /// # Errors
    /// Returns `ChangelogError::MissingVersionSection` if no heading carries that label
    pub fn release(&self, version: &str) -> Result<Release<'_>> {
        self.sections
            .iter()
            .find(|(label, _)| *label == version)
            .map(|(version, notes)| Release { version, notes })
            .ok_or_else(|| ChangelogError::MissingVersionSection(version.to_string()))
    }

    /// Returns an iterator over all version sections in document order
    pub fn iter_releases(&self) -> impl Iterator<Item = Release<'_>> + '_ {
        self.sections
            .iter()
            .map(|(version, notes)| Release { version, notes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "# Changelog\n\n## [Unreleased]\n- wip\n\n## [1.2.0] - 2024-05-01\n### Added\n- Feature\n";

    #[test]
    fn test_from_content_parses_sections() {
        let changelog = Changelog::from_content(SAMPLE, ChangelogConfig::default());

        assert_eq!(changelog.first_version(), Some("[Unreleased]"));
        assert_eq!(changelog.sections().len(), 2);
        assert_eq!(changelog.content(), SAMPLE);
        assert_eq!(changelog.path(), Path::new("./CHANGELOG.md"));
    }

    #[test]
    fn test_latest_and_release_lookup() {
        let changelog = Changelog::from_content(SAMPLE, ChangelogConfig::default());

        let latest = changelog.latest().unwrap();
        assert_eq!(latest.version, "[Unreleased]");
        assert_eq!(latest.notes, "- wip\n\n");

        let release = changelog.release("[1.2.0] - 2024-05-01").unwrap();
        assert_eq!(release.notes, "### Added\n- Feature\n");
    }

    #[test]
    fn test_release_for_unknown_version() {
        let changelog = Changelog::from_content(SAMPLE, ChangelogConfig::default());

        let err = changelog.release("1.2.0").unwrap_err();
        assert!(matches!(err, ChangelogError::MissingVersionSection(v) if v == "1.2.0"));
    }

    #[test]
    fn test_no_versions() {
        let changelog = Changelog::from_content("nothing here\n", ChangelogConfig::default());

        assert_eq!(changelog.first_version(), None);
        assert!(changelog.latest().is_none());
        assert_eq!(changelog.iter_releases().count(), 0);
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");
        fs::write(&path, "## 2.0.0\nnew\n## 1.0.0\nold\n").unwrap();

        let changelog = Changelog::load(ChangelogConfig::new(&path)).await.unwrap();

        assert_eq!(changelog.first_version(), Some("2.0.0"));
        assert_eq!(changelog.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("MISSING.md");

        let err = Changelog::load(ChangelogConfig::new(&path)).await.unwrap_err();

        assert!(matches!(err.root(), ChangelogError::ReadError(_)));
        assert!(err.user_message().contains("MISSING.md"));
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");
        fs::write(&path, [0x23, 0x23, 0x20, 0xff, 0xfe]).unwrap();

        let err = Changelog::load(ChangelogConfig::new(&path)).await.unwrap_err();

        assert!(matches!(err.root(), ChangelogError::ReadError(_)));
    }
}
