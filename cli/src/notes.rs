use crate::error::{CliError, Result};
use crate::ui;
use changelog::Changelog;

pub fn render(changelog: &Changelog, version: &str) -> Result<String> {
    let release = changelog
        .release(version)
        .map_err(|e| CliError::Changelog(e).with_context("Unable to show release notes"))?;
    Ok(release.notes.to_string())
}

pub fn execute(changelog: &Changelog, version: &str) -> Result<()> {
    let notes = render(changelog, version)?;
    ui::print_report(&notes)?;
    Ok(())
}
