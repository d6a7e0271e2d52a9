use crate::error::{CliError, Result};
use crate::ui;
use changelog::Changelog;

pub fn render(changelog: &Changelog, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(changelog.sections())
            .map_err(|e| CliError::from(e).with_context("Failed to render changelog as JSON"))?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for version in changelog.sections().versions() {
        out.push_str(version);
        out.push('\n');
    }
    Ok(out)
}

pub fn execute(changelog: &Changelog, json: bool) -> Result<()> {
    let out = render(changelog, json)?;
    ui::print_report(&out)?;
    Ok(())
}
