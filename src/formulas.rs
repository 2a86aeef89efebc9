// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Savings Formulas

//! Per-scenario savings models.
//!
//! Every formula is a plain `fn` over `f64`: no I/O, no error path, same
//! output for the same input. Arithmetic is IEEE-754 double and operations
//! are evaluated in the same order as the calculator page, so rounded figures
//! agree with what the browser shows.

use crate::format::{format_grouped, format_plain};
use crate::types::{Calculation, InputSpec, SecondaryInputs};

/// Signature shared by every entry in the scenario table.
pub type Formula = fn(f64, &SecondaryInputs) -> Calculation;

// -- Constants ---------------------------------------------------------------

/// Share of customer-service spend an AI agent removes.
pub const SUPPORT_COST_REDUCTION: f64 = 0.7;

/// Share of inbound calls that go unanswered today.
pub const MISSED_CALL_RATE: f64 = 0.25;

pub const CURRENT_CONVERSION_RATE: f64 = 0.04;
pub const AI_CONVERSION_RATE: f64 = 0.21;

pub const ONBOARDING_TIME_REDUCTION: f64 = 0.90;
/// Working hours in a month, for salary -> hourly conversion.
pub const HOURS_PER_MONTH: f64 = 160.0;

pub const ERROR_COST_MULTIPLIER: f64 = 200.0;
pub const CURRENT_ERROR_RATE: f64 = 0.15;
/// Fraction of manual hours left after automation.
pub const AI_HOURS_FACTOR: f64 = 0.3;
/// Fraction of the current error rate left after automation (15% -> 1.5%).
pub const AI_ERROR_FACTOR: f64 = 0.1;

pub const MONTHS_PER_YEAR: f64 = 12.0;

// -- Secondary inputs --------------------------------------------------------

pub const PER_LEAD_VALUE: InputSpec = InputSpec {
    id: "perLeadValue",
    label: "Average value per lead ($)",
    default: 100.0,
};

pub const AVG_DEAL_VALUE: InputSpec = InputSpec {
    id: "avgDealValue",
    label: "Average deal value per lead ($)",
    default: 1000.0,
};

pub const ONBOARDING_SALARY: InputSpec = InputSpec {
    id: "onboardingSalary",
    label: "Monthly salary for onboarding staff ($)",
    default: 4000.0,
};

pub const CURRENT_ONBOARDING_HOURS: InputSpec = InputSpec {
    id: "currentOnboardingHours",
    label: "Current onboarding time per client (hours)",
    default: 20.0,
};

pub const MANUAL_HOURLY_RATE: InputSpec = InputSpec {
    id: "manualHourlyRate",
    label: "Average cost of manual hour ($)",
    default: 50.0,
};

// -- Rounding ----------------------------------------------------------------

/// Round to the nearest integer with ties toward +∞ (`Math.round`).
///
/// `f64::round` sends ties away from zero, which differs for negative halves:
/// `-2.5` must become `-2`, not `-3`.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounded dollars as an integer. Saturates on overflow.
fn to_dollars(x: f64) -> i64 {
    debug_assert!(!x.is_nan(), "savings must never be NaN");
    round_half_up(x) as i64
}

/// `before - after`, or the factored form when both sides overflowed and the
/// subtraction came out as ∞ - ∞.
fn difference_or(difference: f64, factored: impl FnOnce() -> f64) -> f64 {
    if difference.is_nan() {
        factored()
    } else {
        difference
    }
}

// -- Formulas ----------------------------------------------------------------

pub fn customer_service(budget: f64, _secondaries: &SecondaryInputs) -> Calculation {
    Calculation {
        savings: to_dollars(budget * SUPPORT_COST_REDUCTION),
        explanation: "Industry research shows significant cost reduction with AI implementation"
            .to_string(),
    }
}

pub fn virtual_receptionist(calls: f64, secondaries: &SecondaryInputs) -> Calculation {
    let lead_value = PER_LEAD_VALUE.resolve(secondaries);
    let missed = round_half_up(calls * MISSED_CALL_RATE);
    let revenue = missed * lead_value;

    Calculation {
        savings: to_dollars(revenue),
        explanation: format!(
            "Based on {} typically missed calls (25%) at ${} average value per lead",
            format_grouped(missed),
            format_plain(lead_value),
        ),
    }
}

pub fn appointment_setter(leads: f64, secondaries: &SecondaryInputs) -> Calculation {
    let deal_value = AVG_DEAL_VALUE.resolve(secondaries);
    let current = leads * CURRENT_CONVERSION_RATE * deal_value;
    let potential = leads * AI_CONVERSION_RATE * deal_value;

    Calculation {
        savings: to_dollars(difference_or(potential - current, || {
            leads * (AI_CONVERSION_RATE - CURRENT_CONVERSION_RATE) * deal_value
        })),
        explanation: format!(
            "Based on increasing conversion rate from 4% to 21% with 5-minute response time, at ${} average deal value",
            format_plain(deal_value),
        ),
    }
}

pub fn onboarding(clients: f64, secondaries: &SecondaryInputs) -> Calculation {
    let salary = ONBOARDING_SALARY.resolve(secondaries);
    let old_hours = CURRENT_ONBOARDING_HOURS.resolve(secondaries);
    let new_hours = old_hours * (1.0 - ONBOARDING_TIME_REDUCTION);

    let hourly = salary / HOURS_PER_MONTH;
    let current_cost = clients * old_hours * hourly;
    let new_cost = clients * new_hours * hourly;
    let monthly = difference_or(current_cost - new_cost, || {
        clients * hourly * (old_hours - new_hours)
    });

    Calculation {
        savings: to_dollars(monthly * MONTHS_PER_YEAR),
        explanation: format!(
            "Based on {} new clients per month, reducing onboarding time from {} hours to {} hours per client.",
            format_plain(round_half_up(clients)),
            format_plain(round_half_up(old_hours)),
            format_plain(round_half_up(new_hours)),
        ),
    }
}

pub fn workflow(hours: f64, secondaries: &SecondaryInputs) -> Calculation {
    let rate = MANUAL_HOURLY_RATE.resolve(secondaries);

    let current_labor = hours * rate;
    let current_errors = (hours * CURRENT_ERROR_RATE) * ERROR_COST_MULTIPLIER;
    let current_total = current_labor + current_errors;

    let ai_hours = hours * AI_HOURS_FACTOR;
    let ai_labor = ai_hours * rate;
    let ai_errors = (ai_hours * (CURRENT_ERROR_RATE * AI_ERROR_FACTOR)) * ERROR_COST_MULTIPLIER;
    let ai_total = ai_labor + ai_errors;

    let monthly = difference_or(current_total - ai_total, || {
        let current_per_hour = rate + CURRENT_ERROR_RATE * ERROR_COST_MULTIPLIER;
        let ai_per_hour =
            AI_HOURS_FACTOR * (rate + CURRENT_ERROR_RATE * AI_ERROR_FACTOR * ERROR_COST_MULTIPLIER);
        hours * (current_per_hour - ai_per_hour)
    });

    Calculation {
        savings: to_dollars(monthly * MONTHS_PER_YEAR),
        explanation: format!(
            "Based on {} monthly manual hours at ${}/hour with error reduction from 15% to 1.5%",
            format_plain(hours),
            format_plain(rate),
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
