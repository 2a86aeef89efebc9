// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Assessment Report

// Structured snapshot of a filled-in assessment, shared by the CLI (JSON
// file / stdout) and the wasm interface (JS object).

use serde::Serialize;

use crate::form::AssessmentForm;
use crate::format::format_usd;
use crate::scenarios::definition;
use crate::types::Estimate;

// ─── Per-Scenario Entry ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub label: &'static str,
    pub question: &'static str,
    pub primary: f64,
    pub savings_display: String,
    pub estimate: Estimate,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub entries: Vec<ReportEntry>,
    pub total_savings: i64,
    pub total_display: String,
}

impl AssessmentReport {
    pub fn from_form(form: &AssessmentForm) -> Self {
        let entries: Vec<ReportEntry> = form
            .estimates()
            .into_iter()
            .map(|estimate| {
                let def = definition(estimate.scenario);
                ReportEntry {
                    label: def.label,
                    question: def.primary_input_label,
                    primary: form.primary(estimate.scenario),
                    savings_display: format_usd(estimate.savings),
                    estimate,
                }
            })
            .collect();

        let total_savings = entries
            .iter()
            .map(|e| e.estimate.savings)
            .fold(0i64, i64::saturating_add);

        Self {
            entries,
            total_savings,
            total_display: format_usd(total_savings),
        }
    }

    /// Entries whose scenario key or label contains `filter` (case-insensitive).
    pub fn filtered(&self, filter: &str) -> Vec<&ReportEntry> {
        let f = filter.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.estimate.scenario.key().to_lowercase().contains(&f)
                    || e.label.to_lowercase().contains(&f)
            })
            .collect()
    }
}
