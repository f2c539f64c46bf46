//! Report formatting and printing utilities.
//!
//! The audit result is first turned into a flat list of styled segments and
//! only then rendered; nothing in `core` knows about colors or terminals.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::AuditOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Visual role of a piece of report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Header lines (resource location, key counts).
    Accent,
    Success,
    Failure,
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn paint(&self) -> ColoredString {
        match self.style {
            Style::Plain => self.text.normal(),
            Style::Accent => self.text.cyan(),
            Style::Success => self.text.green(),
            Style::Failure => self.text.red(),
            Style::Notice => self.text.yellow(),
        }
    }
}

/// Accumulates segments; styled text never spans a line break.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    fn push(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.segments.push(Segment::new(text, style));
        self
    }

    fn plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text, Style::Plain)
    }

    fn line(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.push(text, style).plain("\n")
    }
}

/// Lay out the audit result as styled segments.
///
/// Order: resource location, key counts, coverage, unused count, then the
/// full missing and unused key lists.
pub fn build_report(outcome: &AuditOutcome) -> Vec<Segment> {
    let report = &outcome.report;
    let mut out = SegmentBuilder::default();

    out.line(
        format!("Translation file at: {}", outcome.layout.resource_display()),
        Style::Accent,
    )
    .plain("\n");

    out.line(
        format!(
            "Found {} keys in {} project files.",
            report.used_count,
            outcome.layout.source_files.len()
        ),
        Style::Accent,
    );
    out.line(
        format!("Found {} keys in translation file.", report.available_count),
        Style::Accent,
    )
    .plain("\n");

    out.plain("Code Coverage: ")
        .push(format!("{:.2} %", report.coverage_percent()), Style::Success)
        .plain(" (")
        .push(
            format!("{:.2} % missing", report.missing_percent()),
            Style::Failure,
        )
        .plain(")\n");

    out.plain("Not In Use: ")
        .line(report.unused.len().to_string(), Style::Notice);

    if !report.missing.is_empty() {
        out.plain("\n- Missing Keys -\n");
    }
    for key in &report.missing {
        out.line(key.as_str(), Style::Plain);
    }

    if !report.unused.is_empty() {
        out.plain("\n\n- Unused Keys -\n");
    }
    for key in &report.unused {
        out.line(key.as_str(), Style::Plain);
    }

    out.segments
}

/// Write segments, painting them only when `color` is set.
pub fn render_to<W: Write>(segments: &[Segment], writer: &mut W, color: bool) -> io::Result<()> {
    for segment in segments {
        if color {
            write!(writer, "{}", segment.paint())?;
        } else {
            write!(writer, "{}", segment.text)?;
        }
    }
    writer.flush()
}

/// Print the text report to stdout.
pub fn print_text(outcome: &AuditOutcome) -> Result<()> {
    let segments = build_report(outcome);
    render_to(&segments, &mut io::stdout().lock(), true).context("Failed to write report")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    resource_file: String,
    source_files: usize,
    used_keys: usize,
    available_keys: usize,
    coverage: f64,
    missing_percent: f64,
    covered: &'a [String],
    missing: &'a [String],
    unused: &'a [String],
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn json_report(outcome: &AuditOutcome) -> Result<String> {
    let report = &outcome.report;
    let json = JsonReport {
        resource_file: outcome.layout.resource_display(),
        source_files: outcome.layout.source_files.len(),
        used_keys: report.used_count,
        available_keys: report.available_count,
        coverage: round2(report.coverage_percent()),
        missing_percent: round2(report.missing_percent()),
        covered: &report.covered,
        missing: &report.missing,
        unused: &report.unused,
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize report")
}

/// Print the JSON report to stdout.
pub fn print_json(outcome: &AuditOutcome) -> Result<()> {
    println!("{}", json_report(outcome)?);
    Ok(())
}

/// Print recoverable problems to stderr.
pub fn print_warnings(outcome: &AuditOutcome, verbose: bool) {
    print_warnings_to(outcome, verbose, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(outcome: &AuditOutcome, verbose: bool, writer: &mut W) {
    if let Some(warning) = &outcome.resource_warning {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }

    let unreadable = &outcome.file_errors;
    if verbose {
        for err in unreadable {
            let _ = writeln!(
                writer,
                "{} Cannot read {}: {}",
                "warning:".bold().yellow(),
                err.path.display(),
                err.error
            );
        }
    } else if !unreadable.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} source file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            unreadable.len(),
            "-v".cyan()
        );
    }

    if outcome.layout.skipped_count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            outcome.layout.skipped_count,
            "-v".cyan()
        );
    }
}

/// Print scan details to stderr (verbose mode).
pub fn print_details(outcome: &AuditOutcome) {
    print_details_to(outcome, &mut io::stderr().lock());
}

pub fn print_details_to<W: Write>(outcome: &AuditOutcome, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Read {} of {} source file(s)",
        "note:".bold(),
        outcome.files_scanned,
        outcome.layout.source_files.len()
    );
    let _ = writeln!(
        writer,
        "{} Loaded {} as {}",
        "note:".bold(),
        outcome.layout.resource_display(),
        outcome.resource_format
    );
}
