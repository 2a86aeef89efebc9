// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Type Definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::EstimateError;

/// Caller-supplied overrides keyed by secondary input id (e.g. `perLeadValue`).
pub type SecondaryInputs = BTreeMap<String, f64>;

// ─── Scenario Id ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioId {
    CustomerService = 0,
    VirtualReceptionist = 1,
    AppointmentSetter = 2,
    Onboarding = 3,
    Workflow = 4,
}

impl ScenarioId {
    /// Display order on the assessment page.
    pub const ALL: [ScenarioId; 5] = [
        Self::CustomerService,
        Self::VirtualReceptionist,
        Self::AppointmentSetter,
        Self::Onboarding,
        Self::Workflow,
    ];

    /// Wire key, also the form field id of the primary input.
    pub fn key(&self) -> &'static str {
        match self {
            Self::CustomerService => "customerService",
            Self::VirtualReceptionist => "virtualReceptionist",
            Self::AppointmentSetter => "appointmentSetter",
            Self::Onboarding => "onboarding",
            Self::Workflow => "workflow",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioId {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| EstimateError::UnknownScenario(s.to_string()))
    }
}

// ─── Citation ───────────────────────────────────────────────────────────────

/// A published claim backing a scenario's assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub text: &'static str,
    pub url: &'static str,
}

// ─── Input Spec ─────────────────────────────────────────────────────────────

/// An optional numeric override and the value used when it is left blank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub default: f64,
}

impl InputSpec {
    /// Resolve this input against caller overrides.
    ///
    /// Missing, zero and non-finite overrides all fall back to `default`,
    /// the same way a blank calculator field does.
    pub fn resolve(&self, secondaries: &SecondaryInputs) -> f64 {
        match secondaries.get(self.id) {
            Some(&v) if v != 0.0 && v.is_finite() => v,
            Some(&v) => {
                log::trace!("{}: override {} replaced by default {}", self.id, v, self.default);
                self.default
            }
            None => self.default,
        }
    }
}

// ─── Calculation / Estimate ─────────────────────────────────────────────────

/// Raw formula output, before the scenario's citations are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub savings: i64,
    pub explanation: String,
}

/// Estimated annual savings for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub scenario: ScenarioId,
    pub savings: i64,
    pub explanation: String,
    pub citations: &'static [Citation],
}

// ─── Tests ──────────────────────────────────────────────────────────────────
