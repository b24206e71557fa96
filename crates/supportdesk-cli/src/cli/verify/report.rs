//! Rendering of verifier results: the per-check sections, the summary table
//! and the closing banner. Plain text goes through `console` styling, the
//! summary through `comfy-table`, `--json` through `serde_json`.

use std::fmt::Write;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use supportdesk_core::verify::checks::{
    CONNECTIVITY_CHECK, CREDENTIAL_CHECK, DEPENDENCIES_CHECK, TOOLCHAIN_CHECK,
};
use supportdesk_types::check::{CheckReport, CheckResult, CheckStatus, DetailKind};

pub const REPORT_TITLE: &str = "Support Desk Setup Verification";
pub const SUCCESS_LINE: &str = "🎉 All systems go! You're ready to run support-chat";
pub const SUCCESS_HINT: &str = "Run: support-chat";
pub const FAILURE_LINE: &str = "⚠️  Some tests failed. See above for details.";

fn rule() -> String {
    "=".repeat(60)
}

/// Section heading printed above a check's detail lines.
pub fn heading(check: &str) -> String {
    let label = match check {
        TOOLCHAIN_CHECK => "Checking Toolchain Version...",
        DEPENDENCIES_CHECK => "Checking Required Dependencies...",
        CREDENTIAL_CHECK => "Checking API Key Configuration...",
        CONNECTIVITY_CHECK => "Testing OpenAI API Connection...",
        other => return format!("🔍 Checking {other}..."),
    };
    format!("🔍 {label}")
}

fn detail_line(kind: DetailKind, message: &str) -> String {
    match kind {
        DetailKind::Ok => format!("   ✅ {message}"),
        DetailKind::Error => format!("   ❌ {message}"),
        DetailKind::Warning => format!("   ⚠️  {}", style(message).yellow()),
        DetailKind::Hint => format!("      → {}", style(message).dim()),
    }
}

fn write_section(out: &mut String, result: &CheckResult) -> std::fmt::Result {
    writeln!(out, "{}", style(heading(&result.name)).bold())?;
    for detail in &result.details {
        writeln!(out, "{}", detail_line(detail.kind, &detail.message))?;
    }
    writeln!(out)
}

fn status_cell(status: CheckStatus) -> Cell {
    let cell = Cell::new(status.to_string());
    match status {
        CheckStatus::Passed => cell.fg(Color::Green),
        CheckStatus::Failed => cell.fg(Color::Red),
        CheckStatus::Skipped => cell.fg(Color::DarkGrey),
    }
}

/// Per-check PASS/FAIL/SKIPPED table.
pub fn summary_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Check").fg(Color::White),
        Cell::new("Status").fg(Color::White),
    ]);
    for result in &report.results {
        table.add_row(vec![Cell::new(&result.name).fg(Color::Cyan), status_cell(result.status)]);
    }
    table
}

/// Full human-readable report.
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &CheckReport) -> std::fmt::Result {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "{}", style(REPORT_TITLE).bold())?;
    writeln!(out, "{}\n", rule())?;

    for result in &report.results {
        write_section(out, result)?;
    }

    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", style("Summary").bold())?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", summary_table(report))?;
    writeln!(out, "\nTotal: {}/{} tests passed\n", report.passed(), report.total())?;

    if report.all_passed() {
        writeln!(out, "{}", style(SUCCESS_LINE).green().bold())?;
        writeln!(out, "\n{SUCCESS_HINT}\n")
    } else {
        writeln!(out, "{}\n", style(FAILURE_LINE).yellow())
    }
}

/// Machine-readable report for `--json`.
pub fn render_json(report: &CheckReport) -> serde_json::Value {
    serde_json::json!({
        "checks": report.results,
        "passed": report.passed(),
        "total": report.total(),
        "all_passed": report.all_passed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use supportdesk_types::check::CheckDetail;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    fn missing_key_report() -> CheckReport {
        let mut report = CheckReport::default();
        report.push(
            CheckResult::new(TOOLCHAIN_CHECK, CheckStatus::Passed)
                .with_detail(CheckDetail::ok("rustc 1.85.0 (Good!)")),
        );
        report.push(
            CheckResult::new(DEPENDENCIES_CHECK, CheckStatus::Passed)
                .with_detail(CheckDetail::ok("Tokio runtime")),
        );
        report.push(
            CheckResult::new(CREDENTIAL_CHECK, CheckStatus::Failed)
                .with_detail(CheckDetail::error("API Key Not Found"))
                .with_detail(CheckDetail::hint("Create a .env file in this directory")),
        );
        report.push(
            CheckResult::new(CONNECTIVITY_CHECK, CheckStatus::Skipped).with_detail(
                CheckDetail::warning("API Key not available, skipping connection test"),
            ),
        );
        report
    }

    #[test]
    fn test_headings() {
        assert_eq!(heading(TOOLCHAIN_CHECK), "🔍 Checking Toolchain Version...");
        assert_eq!(heading(CONNECTIVITY_CHECK), "🔍 Testing OpenAI API Connection...");
        assert_eq!(heading("Disk"), "🔍 Checking Disk...");
    }

    #[test]
    fn test_missing_key_report_text() {
        let text = plain(&render_text(&missing_key_report()));
        assert!(text.contains("   ❌ API Key Not Found"));
        assert!(text.contains("      → Create a .env file in this directory"));
        assert!(text.contains("   ⚠️  API Key not available, skipping connection test"));
        assert!(text.contains("SKIPPED"));
        assert!(text.contains("Total: 2/3 tests passed"));
        assert!(text.contains(FAILURE_LINE));
        assert!(!text.contains(SUCCESS_LINE));
    }

    #[test]
    fn test_all_passed_report_text() {
        let mut report = CheckReport::default();
        report.push(CheckResult::new(TOOLCHAIN_CHECK, CheckStatus::Passed));
        report.push(CheckResult::new(CREDENTIAL_CHECK, CheckStatus::Passed));
        let text = plain(&render_text(&report));
        assert!(text.contains("Total: 2/2 tests passed"));
        assert!(text.contains(SUCCESS_LINE));
        assert!(text.contains(SUCCESS_HINT));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&missing_key_report());
        assert_eq!(json["passed"], 2);
        assert_eq!(json["total"], 3);
        assert_eq!(json["all_passed"], false);
        assert_eq!(json["checks"][3]["status"], "skipped");
        assert_eq!(json["checks"][2]["details"][1]["kind"], "hint");
    }
}
