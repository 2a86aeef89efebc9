// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Savings Estimator

//! Stateless entry points over the scenario table.
//!
//! [`estimate`] is total: it accepts any number and never fails. The only
//! rejected input is a scenario key that names nothing, which
//! [`estimate_by_key`] reports as [`EstimateError::UnknownScenario`].

use std::collections::BTreeMap;

use crate::error::EstimateError;
use crate::scenarios::definition;
use crate::types::{Estimate, ScenarioId, SecondaryInputs};

/// Inputs for a single scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioInputs {
    pub primary: f64,
    pub secondaries: SecondaryInputs,
}

impl ScenarioInputs {
    pub fn new(primary: f64) -> Self {
        Self { primary, secondaries: SecondaryInputs::new() }
    }

    pub fn with(mut self, field: &str, value: f64) -> Self {
        self.secondaries.insert(field.to_string(), value);
        self
    }
}

/// Estimate annual savings for one scenario.
///
/// A non-finite `primary` counts as 0. Secondary overrides that are missing,
/// zero or non-finite take the scenario default.
pub fn estimate(id: ScenarioId, primary: f64, secondaries: &SecondaryInputs) -> Estimate {
    let primary = if primary.is_finite() { primary } else { 0.0 };
    let result = definition(id).evaluate(primary, secondaries);
    log::debug!("estimate {id}: primary={primary} savings={}", result.savings);
    result
}

/// [`estimate`] addressed by wire key (e.g. `"virtualReceptionist"`).
pub fn estimate_by_key(
    key: &str,
    primary: f64,
    secondaries: &SecondaryInputs,
) -> Result<Estimate, EstimateError> {
    let id: ScenarioId = key.parse()?;
    Ok(estimate(id, primary, secondaries))
}

/// Sum of savings across all five scenarios.
///
/// Scenarios missing from `inputs` are evaluated with a zero primary, which
/// contributes nothing.
pub fn total_savings(inputs: &BTreeMap<ScenarioId, ScenarioInputs>) -> i64 {
    let empty = ScenarioInputs::default();
    ScenarioId::ALL
        .iter()
        .map(|&id| {
            let input = inputs.get(&id).unwrap_or(&empty);
            estimate(id, input.primary, &input.secondaries).savings
        })
        .fold(0i64, i64::saturating_add)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
