use std::path::PathBuf;

use symaudit::commands::{ReportFormat, Reporter};
use symaudit::use_color;
use symaudit_core::analysis::build_symbol_table;
use symaudit_core::{AuditReport, RunOutcome};

fn report(forbidden: &[&str]) -> AuditReport {
    AuditReport {
        binary: PathBuf::from("a.out"),
        binary_sha256: "00".repeat(32),
        scanned_at: "2026-01-01T00:00:00+00:00".into(),
        symbols: build_symbol_table(["puts", "malloc@GLIBC_2.2.5", "free@GLIBC_2.2.5"]),
        forbidden: forbidden.iter().map(|s| s.to_string()).collect(),
        outcome: if forbidden.is_empty() { RunOutcome::Clean } else { RunOutcome::Failed },
    }
}

fn render(format: ReportFormat, report: &AuditReport) -> String {
    let mut out = Vec::new();
    Reporter::new(format, false).write(&mut out, report).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn text_report_lists_libraries_then_unknown() {
    let text = render(ReportFormat::Text, &report(&[]));
    let expected = "\
Functions found in the binary:
Functions from GLIBC:
    - malloc
    - free
Functions from unknown libraries:
    - puts
No forbidden functions found.
";
    assert_eq!(text, expected);
}

#[test]
fn text_report_lists_forbidden_functions() {
    let text = render(ReportFormat::Text, &report(&["free", "puts"]));
    assert!(text.ends_with("Forbidden functions found:\n    - free\n    - puts\n"), "{text}");
}

#[test]
fn plain_text_has_no_ansi_escapes() {
    let text = render(ReportFormat::Text, &report(&["puts"]));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn json_report_round_trips_through_serde() {
    let original = report(&["puts"]);
    let text = render(ReportFormat::Json, &original);
    let parsed: AuditReport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn no_color_flag_disables_colors() {
    assert!(!use_color(true));
}
