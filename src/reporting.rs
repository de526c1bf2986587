//! Console output formatting for analysis results.
//!
//! Reporting-line findings are printed first, then salary findings, each in
//! the order the analyzers discovered them.

use crate::types::{AnalysisReport, Finding, FindingKind};
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;
use std::time::Duration;

/// Plain-text message for a finding.
#[must_use]
pub fn describe(finding: &Finding) -> String {
    match finding.kind {
        FindingKind::ReportingLineTooLong => format!(
            "{} has a reporting line that is long by: {}",
            finding.name, finding.magnitude
        ),
        FindingKind::Underpaid => format!(
            "Employee {} is earning less than they should, by: {}",
            finding.name, finding.magnitude
        ),
        FindingKind::Overpaid => format!(
            "Employee {} is earning more than they should, by: {}",
            finding.name, finding.magnitude
        ),
    }
}

/// Prints a formatted report to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &AnalysisReport) -> Result<()> {
    print_section(report, "Reporting lines", &[FindingKind::ReportingLineTooLong]);
    print_section(
        report,
        "Salaries",
        &[FindingKind::Underpaid, FindingKind::Overpaid],
    );
    print_summary(report);
    Ok(())
}

fn print_section(report: &AnalysisReport, title: &str, kinds: &[FindingKind]) {
    let findings: Vec<&Finding> = report
        .findings
        .iter()
        .filter(|f| kinds.contains(&f.kind))
        .collect();
    if findings.is_empty() {
        return;
    }

    println!("{}", title.bold());
    for f in findings {
        let line = describe(f);
        let tag = format!("[{}]", f.kind.code());
        match f.kind {
            FindingKind::ReportingLineTooLong => println!("  {} {}", tag.yellow(), line),
            FindingKind::Underpaid => println!("  {} {}", tag.cyan(), line),
            FindingKind::Overpaid => println!("  {} {}", tag.red(), line),
        }
        println!("     {} employee id {}", "-->".blue(), f.employee_id);
    }
    println!();
}

fn print_summary(report: &AnalysisReport) {
    #[allow(clippy::cast_possible_truncation)]
    let duration = Duration::from_millis(report.duration_ms as u64);
    let employees = report.employees;

    if !report.has_findings() {
        println!(
            "{} No findings across {employees} {} ({duration:?}).",
            "OK".green().bold(),
            pluralize("employee", employees)
        );
        return;
    }

    let mut parts: Vec<String> = Vec::new();
    for kind in [
        FindingKind::ReportingLineTooLong,
        FindingKind::Underpaid,
        FindingKind::Overpaid,
    ] {
        let n = report.count(kind);
        if n > 0 {
            parts.push(format!("{n} {kind}"));
        }
    }

    println!(
        "{} orgcheck found {} {} across {employees} {}: {} ({duration:?}).",
        "~".yellow().bold(),
        report.findings.len(),
        pluralize("finding", report.findings.len()),
        pluralize("employee", employees),
        parts.join(", ")
    );
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Formats a report as plain text, one finding per line.
///
/// # Errors
/// Returns error if formatting fails.
pub fn format_report_string(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();
    for f in &report.findings {
        writeln!(
            out,
            "KIND: {} | ID: {} | {}",
            f.kind.code(),
            f.employee_id,
            describe(f)
        )?;
    }
    Ok(out)
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
