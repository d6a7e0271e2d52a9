use crate::error::Result;
use crate::ui;
use changelog::Changelog;
use tracing::warn;

pub fn render(changelog: &Changelog) -> Option<String> {
    changelog.first_version().map(|version| format!("{version}\n"))
}

pub fn execute(changelog: &Changelog) -> Result<()> {
    match render(changelog) {
        Some(line) => ui::print_report(&line)?,
        None => warn!(
            path = %changelog.path().display(),
            "no version headings found in changelog"
        ),
    }
    Ok(())
}
