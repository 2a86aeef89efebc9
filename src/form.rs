// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Assessment Form

//! Raw field text as the visitor typed it, plus the coercion to numbers.
//!
//! Field ids are the five scenario keys (primary inputs) and every secondary
//! input id from the scenario table. Values stay as text until read so the
//! caller can echo back exactly what was entered.

use std::collections::BTreeMap;

use crate::error::EstimateError;
use crate::estimator::{estimate, total_savings, ScenarioInputs};
use crate::scenarios::{definition, scenarios};
use crate::types::{Estimate, ScenarioId, SecondaryInputs};

/// Coerce field text to a number: blank, unparseable or non-finite gives 0.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::trace!("coercing {trimmed:?} to 0");
            0.0
        }
    }
}

/// Whether `field` names a primary or secondary input.
pub fn is_known_field(field: &str) -> bool {
    field.parse::<ScenarioId>().is_ok() || scenarios().iter().any(|d| d.has_secondary(field))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentForm {
    values: BTreeMap<String, String>,
}

impl AssessmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from `(field, text)` pairs, failing on the first unknown field.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, EstimateError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::new();
        for (field, raw) in pairs {
            form.set(field, raw)?;
        }
        Ok(form)
    }

    /// Load a form saved as a flat JSON object of field -> string or number.
    ///
    /// `null` clears a field. Any other JSON type is rejected.
    pub fn from_json(json: &str) -> Result<Self, EstimateError> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut form = Self::new();
        for (field, value) in raw {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Null => String::new(),
                _ => return Err(EstimateError::InvalidFieldValue(field)),
            };
            form.set(&field, &text)?;
        }
        Ok(form)
    }

    /// Store the text for `field`. Unknown fields are rejected and leave the form unchanged.
    pub fn set(&mut self, field: &str, raw: &str) -> Result<(), EstimateError> {
        if !is_known_field(field) {
            log::warn!("rejected unknown field {field:?}");
            return Err(EstimateError::UnknownField(field.to_string()));
        }
        self.values.insert(field.to_string(), raw.to_string());
        Ok(())
    }

    /// Raw text for `field`, empty when never set.
    pub fn raw(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn primary(&self, id: ScenarioId) -> f64 {
        parse_number(self.raw(id.key()))
    }

    /// Numeric secondary overrides for `id`. Blank fields are omitted so the
    /// scenario default applies.
    pub fn secondaries(&self, id: ScenarioId) -> SecondaryInputs {
        definition(id)
            .secondary_inputs
            .iter()
            .filter(|spec| !self.raw(spec.id).trim().is_empty())
            .map(|spec| (spec.id.to_string(), parse_number(self.raw(spec.id))))
            .collect()
    }

    pub fn inputs(&self, id: ScenarioId) -> ScenarioInputs {
        ScenarioInputs {
            primary: self.primary(id),
            secondaries: self.secondaries(id),
        }
    }

    pub fn estimate(&self, id: ScenarioId) -> Estimate {
        let ScenarioInputs { primary, secondaries } = self.inputs(id);
        estimate(id, primary, &secondaries)
    }

    /// One estimate per scenario, in display order.
    pub fn estimates(&self) -> Vec<Estimate> {
        ScenarioId::ALL.iter().map(|&id| self.estimate(id)).collect()
    }

    pub fn total_savings(&self) -> i64 {
        let inputs: BTreeMap<ScenarioId, ScenarioInputs> =
            ScenarioId::ALL.iter().map(|&id| (id, self.inputs(id))).collect();
        total_savings(&inputs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_coercions() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("  12 "), 12.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("-4.5"), -4.5);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number("1,000"), 0.0);
    }

    #[test]
    fn known_fields() {
        assert!(is_known_field("customerService"));
        assert!(is_known_field("perLeadValue"));
        assert!(is_known_field("currentOnboardingHours"));
        assert!(!is_known_field("email"));
    }

    #[test]
    fn set_rejects_unknown_field() {
        let mut form = AssessmentForm::new();
        let err = form.set("email", "a@b.c");
        assert!(matches!(err, Err(EstimateError::UnknownField(ref f)) if f == "email"));
        assert_eq!(form, AssessmentForm::new());
    }

    #[test]
    fn blank_secondary_is_omitted() {
        let form = AssessmentForm::from_pairs([("virtualReceptionist", "1000"), ("perLeadValue", " ")])
            .expect("test: known fields");
        assert!(form.secondaries(ScenarioId::VirtualReceptionist).is_empty());
        assert_eq!(form.estimate(ScenarioId::VirtualReceptionist).savings, 25_000);
    }

    #[test]
    fn garbage_secondary_falls_back_to_default() {
        let form = AssessmentForm::from_pairs([("appointmentSetter", "100"), ("avgDealValue", "lots")])
            .expect("test: known fields");
        assert_eq!(form.secondaries(ScenarioId::AppointmentSetter).get("avgDealValue"), Some(&0.0));
        assert_eq!(form.estimate(ScenarioId::AppointmentSetter).savings, 17_000);
    }

    #[test]
    fn secondaries_only_cover_own_scenario() {
        let form = AssessmentForm::from_pairs([("perLeadValue", "50"), ("manualHourlyRate", "80")])
            .expect("test: known fields");
        let s = form.secondaries(ScenarioId::Workflow);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("manualHourlyRate"), Some(&80.0));
    }

    #[test]
    fn inputs_coerce_primary_and_keep_filled_secondaries() {
        let form = AssessmentForm::from_pairs([
            ("onboarding", " 10 "),
            ("onboardingSalary", "5000"),
            ("currentOnboardingHours", ""),
        ])
        .expect("test: known fields");
        let inputs = form.inputs(ScenarioId::Onboarding);
        assert_eq!(inputs, ScenarioInputs::new(10.0).with("onboardingSalary", 5000.0));
        assert_eq!(
            form.estimate(ScenarioId::Onboarding),
            estimate(ScenarioId::Onboarding, inputs.primary, &inputs.secondaries)
        );
    }

    #[test]
    fn empty_form_totals_zero() {
        assert_eq!(AssessmentForm::new().total_savings(), 0);
    }

    #[test]
    fn from_json_accepts_strings_numbers_and_null() {
        let form = AssessmentForm::from_json(
            r#"{"customerService": "100000", "workflow": 100, "manualHourlyRate": null}"#,
        )
        .expect("test: valid form");
        assert_eq!(form.raw("customerService"), "100000");
        assert_eq!(form.raw("workflow"), "100");
        assert_eq!(form.raw("manualHourlyRate"), "");
        assert_eq!(form.total_savings(), 70_000 + 76_920);
    }

    #[test]
    fn from_json_rejects_bad_shapes() {
        assert!(matches!(
            AssessmentForm::from_json(r#"{"workflow": [1]}"#),
            Err(EstimateError::InvalidFieldValue(ref f)) if f == "workflow"
        ));
        assert!(matches!(
            AssessmentForm::from_json(r#"{"nope": "1"}"#),
            Err(EstimateError::UnknownField(_))
        ));
        assert!(matches!(
            AssessmentForm::from_json("not json"),
            Err(EstimateError::MalformedForm(_))
        ));
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = AssessmentForm::from_pairs([("onboarding", "10")]).expect("test: known field");
        form.clear();
        assert_eq!(form.raw("onboarding"), "");
        assert_eq!(form.total_savings(), 0);
    }
}
