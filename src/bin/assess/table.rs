// Plain-text rendering of an assessment report

use assessment_engine::format::format_grouped;
use assessment_engine::{AssessmentReport, ReportEntry};
use std::fmt::Write;

pub fn render(shown: &[&ReportEntry], report: &AssessmentReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n  AI Value Assessment");
    let _ = writeln!(out, "  {:<28} {:>14} {:>16}", "Scenario", "Input", "Annual Savings");
    let _ = writeln!(out, "  {}", "-".repeat(60));

    for entry in shown {
        let _ = writeln!(
            out,
            "  {:<28} {:>14} {:>16}",
            entry.label,
            format_grouped(entry.primary),
            entry.savings_display,
        );
        let _ = writeln!(out, "      {}", entry.estimate.explanation);
    }

    let _ = writeln!(out, "  {}", "-".repeat(60));
    let _ = writeln!(out, "  {:<43} {:>16}\n", "Total Potential Annual Savings:", report.total_display);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_engine::AssessmentForm;

    #[test]
    fn table_lists_rows_and_total() {
        let form = AssessmentForm::from_pairs([("customerService", "100000")]).expect("test: known field");
        let report = AssessmentReport::from_form(&form);
        let shown: Vec<&ReportEntry> = report.entries.iter().collect();
        let text = render(&shown, &report);
        assert!(text.contains("Customer Service AI Agent"));
        assert!(text.contains("100,000"));
        assert!(text.contains("$70,000"));
        assert!(text.contains("Total Potential Annual Savings:"));
    }
}
