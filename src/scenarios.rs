// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Scenario Catalog

// Five fixed scenarios, in display order. All scenario logic lives in the
// formula functions; this table only wires ids, prompts and sources to them.

use serde::Serialize;

use crate::formulas::{self, Formula};
use crate::types::{Calculation, Citation, Estimate, InputSpec, ScenarioId, SecondaryInputs};

// ─── Scenario Definition ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDefinition {
    pub id: ScenarioId,
    pub label: &'static str,
    pub primary_input_label: &'static str,
    pub secondary_inputs: &'static [InputSpec],
    pub citations: &'static [Citation],
    #[serde(skip)]
    pub formula: Formula,
}

impl ScenarioDefinition {
    /// Run the formula and attach this scenario's sources.
    pub fn evaluate(&self, primary: f64, secondaries: &SecondaryInputs) -> Estimate {
        let Calculation { savings, explanation } = (self.formula)(primary, secondaries);
        Estimate {
            scenario: self.id,
            savings,
            explanation,
            citations: self.citations,
        }
    }

    /// Whether `field` is one of this scenario's secondary input ids.
    pub fn has_secondary(&self, field: &str) -> bool {
        self.secondary_inputs.iter().any(|spec| spec.id == field)
    }
}

// ─── Citations ──────────────────────────────────────────────────────────────

const CUSTOMER_SERVICE_CITATIONS: &[Citation] = &[
    Citation {
        text: "Klarna reduced support ticket resolution time from 11 minutes to 2 minutes, generating $40 million in annual profit improvements",
        url: "https://www.singlegrain.com/blog/ms/klarna-ai/",
    },
    Citation {
        text: "Businesses typically save around 30% on their customer support costs by implementing chatbots",
        url: "https://adamconnell.me/chatbot-statistics/",
    },
    Citation {
        text: "Companies can reduce their cost per support ticket from $40 to $8, representing an 80% reduction",
        url: "https://ai-for.business/ai-case-study-saving-80-on-customer-support-costs-with-generative-ai/",
    },
];

const VIRTUAL_RECEPTIONIST_CITATIONS: &[Citation] = &[
    Citation {
        text: "AI virtual receptionists can handle up to 100 calls simultaneously for a single phone number",
        url: "https://dialzara.com/blog/what-is-an-ai-virtual-receptionist-and-how-can-it-benefit-your-business/",
    },
    Citation {
        text: "One business documented savings of $20,000 in lost revenue within just 30 days",
        url: "https://www.reddit.com/r/SideProject/comments/1e2kbdz/i_recreated_an_ai_phone_agent_that_saved_20000_in/",
    },
    Citation {
        text: "Companies can save up to $250,000 over five years compared to employing full-time reception staff",
        url: "https://dialzara.com/blog/how-much-does-an-ai-virtual-receptionist-cost/",
    },
];

const APPOINTMENT_SETTER_CITATIONS: &[Citation] = &[
    Citation {
        text: "Companies that contact leads within 5 minutes are 21 times more likely to qualify them compared to waiting 30 minutes",
        url: "https://www.callpage.io/blog/posts/speed-to-lead",
    },
    Citation {
        text: "Harvard study shows reaching out to leads within 10 seconds can increase conversion rates by up to 381%",
        url: "https://www.trysetter.com/ai-appointment-setter",
    },
    Citation {
        text: "One HVAC company experienced a 20% increase in bookings and conversions in just the first week of implementing AI calling",
        url: "https://www.reddit.com/r/SideProject/comments/1e2kbdz/i_recreated_an_ai_phone_agent_that_saved_20000_in/",
    },
];

const ONBOARDING_CITATIONS: &[Citation] = &[
    Citation {
        text: "Companies report reducing onboarding time from 5+ days to just 10 minutes through automation, representing a 90% reduction in processing time",
        url: "https://qflowbpm.com/process-onboarding/",
    },
    Citation {
        text: "Organizations with automated onboarding processes experience up to 60% year-over-year revenue growth and show 82% improvement in new hire retention",
        url: "https://enboarder.com/blog/employee-engagement-onboarding-stats/",
    },
    Citation {
        text: "Poor onboarding leads to significant costs, with companies losing up to 20% of an employee's salary when they leave within the first 6-12 months",
        url: "https://withe.co/blog/employee-onboarding-statistics",
    },
];

const WORKFLOW_CITATIONS: &[Citation] = &[
    Citation {
        text: "Organizations report 70% reduction in manual processing time and 90% reduction in error rates with AI automation",
        url: "https://beslick.com/what-is-ai-workflow-automation/",
    },
    Citation {
        text: "AI workflow automation scales operations without additional human resources, handling complex tasks including unstructured data",
        url: "https://www.pulpstream.com/resources/blog/ai-workflow-automation",
    },
    Citation {
        text: "Businesses report improved decision-making and enhanced customer experience through faster response times",
        url: "https://www.leewayhertz.com/ai-for-workflow-automation/",
    },
];

// ─── Table ──────────────────────────────────────────────────────────────────

static SCENARIOS: [ScenarioDefinition; 5] = [
    ScenarioDefinition {
        id: ScenarioId::CustomerService,
        label: "Customer Service AI Agent",
        primary_input_label: "What is your current annual customer service budget?",
        secondary_inputs: &[],
        citations: CUSTOMER_SERVICE_CITATIONS,
        formula: formulas::customer_service,
    },
    ScenarioDefinition {
        id: ScenarioId::VirtualReceptionist,
        label: "Virtual Receptionist",
        primary_input_label: "How many calls does your business receive per month?",
        secondary_inputs: &[formulas::PER_LEAD_VALUE],
        citations: VIRTUAL_RECEPTIONIST_CITATIONS,
        formula: formulas::virtual_receptionist,
    },
    ScenarioDefinition {
        id: ScenarioId::AppointmentSetter,
        label: "AI Appointment Setter",
        primary_input_label: "How many leads do you receive per month?",
        secondary_inputs: &[formulas::AVG_DEAL_VALUE],
        citations: APPOINTMENT_SETTER_CITATIONS,
        formula: formulas::appointment_setter,
    },
    ScenarioDefinition {
        id: ScenarioId::Onboarding,
        label: "One-Click Onboarding",
        primary_input_label: "How many new clients do you onboard monthly?",
        secondary_inputs: &[formulas::ONBOARDING_SALARY, formulas::CURRENT_ONBOARDING_HOURS],
        citations: ONBOARDING_CITATIONS,
        formula: formulas::onboarding,
    },
    ScenarioDefinition {
        id: ScenarioId::Workflow,
        label: "Workflow Automation",
        primary_input_label: "How many hours per month do you spend on manual workflows?",
        secondary_inputs: &[formulas::MANUAL_HOURLY_RATE],
        citations: WORKFLOW_CITATIONS,
        formula: formulas::workflow,
    },
];

/// All scenarios in display order.
pub fn scenarios() -> &'static [ScenarioDefinition] {
    &SCENARIOS
}

/// Definition for `id`. The table is indexed by the enum discriminant.
pub fn definition(id: ScenarioId) -> &'static ScenarioDefinition {
    &SCENARIOS[id.index()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for id in ScenarioId::ALL {
            assert_eq!(definition(id).id, id, "{id} sits at the wrong slot");
        }
    }

    #[test]
    fn every_scenario_has_three_citations() {
        for def in scenarios() {
            assert_eq!(def.citations.len(), 3, "{} citation count", def.id);
            for c in def.citations {
                assert!(c.url.starts_with("https://"), "{} has a non-https source", def.id);
                assert!(!c.text.is_empty());
            }
        }
    }

    #[test]
    fn secondary_ids_are_unique_across_scenarios() {
        let mut seen = HashSet::new();
        for def in scenarios() {
            for spec in def.secondary_inputs {
                assert!(seen.insert(spec.id), "duplicate secondary id {}", spec.id);
                assert!(
                    spec.id.parse::<ScenarioId>().is_err(),
                    "{} collides with a scenario key",
                    spec.id
                );
            }
        }
    }

    #[test]
    fn secondary_defaults_match_calculator() {
        let defaults: Vec<(&str, f64)> = scenarios()
            .iter()
            .flat_map(|d| d.secondary_inputs.iter().map(|s| (s.id, s.default)))
            .collect();
        assert_eq!(
            defaults,
            vec![
                ("perLeadValue", 100.0),
                ("avgDealValue", 1000.0),
                ("onboardingSalary", 4000.0),
                ("currentOnboardingHours", 20.0),
                ("manualHourlyRate", 50.0),
            ]
        );
    }

    #[test]
    fn evaluate_attaches_static_citations() {
        let def = definition(ScenarioId::Workflow);
        let a = def.evaluate(10.0, &SecondaryInputs::new());
        let b = def.evaluate(20.0, &SecondaryInputs::new());
        assert_eq!(a.scenario, ScenarioId::Workflow);
        assert!(std::ptr::eq(a.citations, b.citations));
    }

    #[test]
    fn has_secondary_lookup() {
        let def = definition(ScenarioId::Onboarding);
        assert!(def.has_secondary("onboardingSalary"));
        assert!(def.has_secondary("currentOnboardingHours"));
        assert!(!def.has_secondary("perLeadValue"));
    }

    #[test]
    fn definitions_serialize_without_formula() {
        let json = serde_json::to_value(definition(ScenarioId::VirtualReceptionist))
            .expect("test: serialize definition");
        assert_eq!(json["id"], "virtualReceptionist");
        assert_eq!(json["secondaryInputs"][0]["id"], "perLeadValue");
        assert_eq!(json["secondaryInputs"][0]["default"], 100.0);
        assert!(json.get("formula").is_none());
    }
}
