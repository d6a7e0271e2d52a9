use colored::Colorize;
use std::io::{self, Write};

/// Write report output to stdout exactly as given
pub fn print_report(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// Print an error message to stderr
pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message);
}
