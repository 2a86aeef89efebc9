// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Savings Engine

pub mod types;
pub mod error;
pub mod format;
pub mod formulas;
pub mod scenarios;
pub mod estimator;
pub mod form;
pub mod report;

pub use types::*;
pub use error::EstimateError;
pub use estimator::{estimate, estimate_by_key, total_savings, ScenarioInputs};
pub use form::{parse_number, AssessmentForm};
pub use report::{AssessmentReport, ReportEntry};
pub use scenarios::{definition, scenarios, ScenarioDefinition};

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

fn install_hooks() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        // Already initialised on a second call; nothing to do.
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

/// Route panics and `log` records to the browser console.
#[wasm_bindgen(js_name = initConsole)]
pub fn init_console() {
    install_hooks();
}

/// Stateless estimate for the scenario named `key`.
///
/// `secondaries` is a plain object of overrides, or `undefined`/`null`.
/// Throws on an unknown scenario key.
#[wasm_bindgen(js_name = estimate)]
pub fn estimate_js(key: &str, primary: f64, secondaries: JsValue) -> Result<JsValue, JsError> {
    let secondaries: SecondaryInputs = if secondaries.is_undefined() || secondaries.is_null() {
        SecondaryInputs::new()
    } else {
        serde_wasm_bindgen::from_value(secondaries).map_err(|e| JsError::new(&e.to_string()))?
    };
    let result = estimate_by_key(key, primary, &secondaries)?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
}

/// The scenario table, for rendering prompts and placeholders.
#[wasm_bindgen(js_name = scenarios)]
pub fn scenarios_js() -> JsValue {
    serde_wasm_bindgen::to_value(&scenarios()).unwrap_or(JsValue::NULL)
}

/// Assessment page state held on the Rust side.
#[wasm_bindgen]
pub struct SavingsEngine {
    form: AssessmentForm,
}

#[wasm_bindgen]
impl SavingsEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        install_hooks();
        Self { form: AssessmentForm::new() }
    }

    /// Store raw field text. Throws on a field id no scenario uses.
    pub fn set_field(&mut self, field: &str, raw: &str) -> Result<(), JsError> {
        self.form.set(field, raw)?;
        Ok(())
    }

    pub fn get_field(&self, field: &str) -> String {
        self.form.raw(field).to_string()
    }

    pub fn estimate(&self, key: &str) -> Result<JsValue, JsError> {
        let id: ScenarioId = key.parse()?;
        serde_wasm_bindgen::to_value(&self.form.estimate(id)).map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn estimates(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.form.estimates()).unwrap_or(JsValue::NULL)
    }

    /// Whole dollars. `f64` so JS receives a number rather than a BigInt.
    pub fn total_savings(&self) -> f64 {
        self.form.total_savings() as f64
    }

    pub fn total_display(&self) -> String {
        format::format_usd(self.form.total_savings())
    }

    pub fn report(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&AssessmentReport::from_form(&self.form)).unwrap_or(JsValue::NULL)
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        self.form.clear();
    }
}

impl Default for SavingsEngine {
    fn default() -> Self {
        Self::new()
    }
}
