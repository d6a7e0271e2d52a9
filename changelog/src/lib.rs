//! Parsing of `## `-headed changelogs into ordered release notes.
//!
//! ```
//! let sections = changelog::parse_changelog("## 2.0.0\nAdd feature\n## 1.0.0\nFix bug\n");
//! assert_eq!(sections.first_version(), Some("2.0.0"));
//! assert_eq!(sections.get("1.0.0"), Some("Fix bug\n"));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod map;
pub mod parser;
pub mod types;
pub mod utils;

pub use config::{ChangelogConfig, DEFAULT_CHANGELOG_PATH};
pub use document::Changelog;
pub use error::ChangelogError;
pub use map::ChangelogMap;
pub use parser::Parser;
pub use types::{Release, Result};

/// Parses changelog text into its version sections
#[must_use]
pub fn parse_changelog(content: &str) -> ChangelogMap {
    Parser::new().parse(content)
}

/// Returns the topmost version label of a changelog
#[must_use]
pub fn first_version(content: &str) -> Option<String> {
    parse_changelog(content).first_version().map(str::to_string)
}
