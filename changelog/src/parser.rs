use tracing::{debug, trace};

use crate::map::ChangelogMap;
use crate::utils::version_label;

#[derive(Debug, Clone, Default)]
struct ParserState {
    // Empty while no version is active.
    current_version: String,
}

/// Splits a changelog into version sections.
///
/// Every line starting with `"## "` opens (or re-opens) the section named by
/// the rest of the line. Other lines are appended to the active section, or
/// dropped when no section is active.
#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn parse(&self, content: &str) -> ChangelogMap {
        let mut sections = ChangelogMap::new();
        let mut state = ParserState::default();

        // `split_terminator` keeps '\r' and does not yield an empty line after a final '\n'.
        for (line_num, line) in content.split_terminator('\n').enumerate() {
            self.parse_line(line, &mut state, &mut sections, line_num);
        }

        debug!(versions = sections.len(), "parsed changelog");
        sections
    }

    fn parse_line(
        &self,
        line: &str,
        state: &mut ParserState,
        sections: &mut ChangelogMap,
        line_num: usize,
    ) {
        match version_label(line) {
            Some(version) => self.handle_version_header(version, state, sections, line_num),
            None => self.handle_other_line(line, state, sections, line_num),
        }
    }

    fn handle_version_header(
        &self,
        version: &str,
        state: &mut ParserState,
        sections: &mut ChangelogMap,
        line_num: usize,
    ) {
        state.current_version = version.to_string();

        if version.is_empty() {
            debug!(line = line_num + 1, "empty version heading, following lines are dropped");
            return;
        }

        if sections.open_section(version) {
            trace!(line = line_num + 1, version, "version section");
        } else {
            debug!(line = line_num + 1, version, "repeated version heading, appending to existing notes");
        }
    }

    fn handle_other_line(
        &self,
        line: &str,
        state: &ParserState,
        sections: &mut ChangelogMap,
        line_num: usize,
    ) {
        if state.current_version.is_empty() {
            trace!(line = line_num + 1, "line outside any version section dropped");
            return;
        }
        sections.append_line(&state.current_version, line);
    }
}
