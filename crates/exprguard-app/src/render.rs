//! Report serialization and terminal summaries.

use exprguard_types::{GuardMode, GuardReport, Verdict};

/// Serialize a report as pretty JSON with a trailing newline.
pub fn serialize_report(report: &GuardReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report)?;
    data.push(b'\n');
    Ok(data)
}

/// One-paragraph summary for stderr/stdout.
pub fn format_summary(report: &GuardReport) -> String {
    let mode = match report.mode {
        GuardMode::Resource => "resource",
        GuardMode::Operation => "operation",
        GuardMode::WriteAttribute => "write-attribute",
    };
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };

    let mut out = format!("exprguard: {} {} {}\n", verdict, mode, report.address);
    if let Some(message) = &report.message {
        out.push_str(&format!("  - {}\n", message));
    }
    out
}
