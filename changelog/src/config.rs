use std::path::PathBuf;

/// Location used when no changelog path is given
pub const DEFAULT_CHANGELOG_PATH: &str = "./CHANGELOG.md";

/// Configuration options for locating and reading a changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogConfig {
    pub path: PathBuf,
}

impl ChangelogConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHANGELOG_PATH)
    }
}
