//! Shared report rendering for CLI commands

use crate::app::models::ImportResult;
use colored::Colorize;

/// Print the two-bucket import report
///
/// A summary line, then (unless quieted) one line per rejected row with
/// its original spreadsheet line number and the reasons, suitable for an
/// operator fixing the file side by side.
pub fn render_report(result: &ImportResult, quiet: bool) {
    println!();
    println!("{}", result.stats.summary().bold());
    println!(
        "  {} {}",
        "accepted:".green(),
        result.stats.accepted.to_string().green().bold()
    );
    println!(
        "  {} {}",
        "rejected:".red(),
        result.stats.rejected.to_string().red().bold()
    );

    if quiet || result.failed.is_empty() {
        return;
    }

    println!();
    println!("{}", "Rejected rows:".red().bold());
    for failure in &result.failed {
        println!(
            "  {} {}",
            format!("line {}:", failure.row).yellow(),
            failure.errors.join("; ")
        );
    }
}
