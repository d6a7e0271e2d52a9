/// Marker that opens a version section. Only matched at the start of a line.
pub const VERSION_HEADER_PREFIX: &str = "## ";

/// Extracts the version label from a heading line.
///
/// Returns `None` for lines that are not version headings. A heading whose
/// label trims to nothing yields `Some("")`.
#[must_use]
pub fn version_label(line: &str) -> Option<&str> {
    line.strip_prefix(VERSION_HEADER_PREFIX).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label_strips_prefix_and_trims() {
        assert_eq!(version_label("## 1.2.3"), Some("1.2.3"));
        assert_eq!(version_label("##   [2.0.0] - 2024-01-01  \r"), Some("[2.0.0] - 2024-01-01"));
    }

    #[test]
    fn test_version_label_only_matches_at_line_start() {
        assert_eq!(version_label(" ## 1.0.0"), None);
        assert_eq!(version_label("### Added"), None);
        assert_eq!(version_label("##1.0.0"), None);
        assert_eq!(version_label("text ## 1.0.0"), None);
    }

    #[test]
    fn test_empty_heading_yields_empty_label() {
        assert_eq!(version_label("## "), Some(""));
        assert_eq!(version_label("##    "), Some(""));
    }

    #[test]
    fn test_only_leading_marker_is_removed() {
        assert_eq!(version_label("## 1.0.0 ## hotfix"), Some("1.0.0 ## hotfix"));
    }
}
