//! Report formatting and printing utilities.
//!
//! Displays extraction findings in cargo-style format. Separate from the
//! core engine so hanseek can be used as a library.

use std::fs;
use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::fragment::{FileReport, TextFragment};
use crate::utils::line_col;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print all findings to stdout.
pub fn report(reports: &[FileReport]) {
    report_to(reports, &mut io::stdout().lock());
}

/// Print findings to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(reports: &[FileReport], writer: &mut W) {
    if reports.is_empty() {
        return;
    }

    let mut total = 0;
    for file_report in reports {
        // the fragment list is in replacement order; re-reading the file
        // here is purely presentational
        let source = fs::read_to_string(&file_report.file_path).ok();
        print_file(file_report, source.as_deref(), writer);
        total += file_report.fragments.len();
    }

    let _ = writeln!(
        writer,
        "\n{} {} hardcoded {} in {} {}",
        FAILURE_MARK.red(),
        total,
        if total == 1 { "text" } else { "texts" },
        reports.len(),
        if reports.len() == 1 { "file" } else { "files" }
    );
}

/// Print a success message when nothing was found.
pub fn print_success(scanned: usize) {
    print_success_to(scanned, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no hardcoded text found",
            scanned,
            if scanned == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_file<W: Write>(report: &FileReport, source: Option<&str>, writer: &mut W) {
    // fragments arrive in replacement order (descending offsets); display
    // them top-down instead
    for fragment in report.fragments.iter().rev() {
        let _ = writeln!(
            writer,
            "{}: \"{}\"  {}",
            "found".bold().red(),
            fragment.text,
            context_label(fragment).dimmed().cyan()
        );

        match source {
            Some(source) => {
                let (line, col) = line_col(source, fragment.range.start);
                let _ = writeln!(
                    writer,
                    "  {} {}:{}:{}",
                    "-->".blue(),
                    report.file_path,
                    line,
                    col
                );
                if let Some(line_text) = source.lines().nth(line - 1) {
                    let prefix: String = line_text.chars().take(col - 1).collect();
                    let padding = UnicodeWidthStr::width(prefix.as_str());
                    let _ = writeln!(writer, "   {}", "|".blue());
                    let _ = writeln!(writer, "   {} {}", "|".blue(), line_text);
                    let _ = writeln!(writer, "   {} {:>pad$}{}", "|".blue(), "", "^".red(), pad = padding);
                }
            }
            None => {
                let _ = writeln!(
                    writer,
                    "  {} {}:{}..{}",
                    "-->".blue(),
                    report.file_path,
                    fragment.range.start,
                    fragment.range.end
                );
            }
        }
        let _ = writeln!(writer);
    }
}

fn context_label(fragment: &TextFragment) -> String {
    if fragment.is_attribute {
        format!(
            "attribute({})",
            fragment.attribute_name.as_deref().unwrap_or("?")
        )
    } else if fragment.in_mustache {
        "mustache".to_string()
    } else if fragment.in_template_string {
        "template-literal".to_string()
    } else if fragment.is_template {
        "template".to_string()
    } else {
        "script".to_string()
    }
}
