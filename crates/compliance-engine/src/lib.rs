//! Deterministic compliance engine for small Indian businesses.
//!
//! Pipeline: profile → [`classifier`] → classification and triggers →
//! [`mapper`] (reads the bundled [`dataset`]) → obligation list →
//! [`timeline`] → ordered schedule and total cost. Every stage is a
//! pure function over immutable inputs, so the engine is safe to call
//! concurrently from any number of request handlers.

pub mod classifier;
pub mod conditions;
pub mod dataset;
pub mod extractors;
pub mod mapper;
pub mod timeline;

use compliance_types::{BusinessProfile, CompliancePlan, EngineError};

/// ComplianceEngine entry point
pub struct ComplianceEngine {
    dataset: &'static dataset::ReferenceDataset,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self {
            dataset: dataset::bundled(),
        }
    }

    /// Run the full pipeline for one profile.
    pub fn assess(&self, profile: Option<&BusinessProfile>) -> Result<CompliancePlan, EngineError> {
        let classification = classifier::classify(profile)?;
        let obligations = mapper::map_with_dataset(&classification, self.dataset);
        let costed = timeline::build_timeline(&obligations);
        Ok(CompliancePlan {
            classification,
            obligations,
            timeline: costed.timeline,
            total_cost: costed.total_cost,
            checked_at: chrono::Utc::now().timestamp() as u64,
        })
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compliance_types::{EmployeeBand, IndustryCode, StateCode, TurnoverBand};
    use pretty_assertions::assert_eq;

    fn profile(json: &str) -> BusinessProfile {
        serde_json::from_str(json).unwrap()
    }

    fn ids(plan: &CompliancePlan) -> Vec<&str> {
        plan.obligations.iter().map(|o| o.rule.id.as_str()).collect()
    }

    #[test]
    fn test_karnataka_restaurant() {
        let engine = ComplianceEngine::new();
        let plan = engine
            .assess(Some(&profile(
                r#"{"businessType":"restaurant","employees":5,"annualTurnover":6000000,"state":"Karnataka"}"#,
            )))
            .unwrap();

        let c = &plan.classification;
        assert_eq!(c.industry_code, IndustryCode::FoodBeverage);
        assert_eq!(c.turnover_band, TurnoverBand::Small);
        assert!(c.triggers.gst_required);
        assert!(c.triggers.fssai_required);
        assert!(!c.triggers.epf_required);

        let ids = ids(&plan);
        assert!(ids.contains(&"gst-registration"));
        assert!(ids.contains(&"fssai-registration"));
        assert!(ids.contains(&"udyam-registration"));
        assert!(ids.contains(&"ka-shops-establishments"));
        assert!(ids.contains(&"ka-trade-licence"));
    }

    #[test]
    fn test_karnataka_manufacturer_with_inferred_turnover() {
        let engine = ComplianceEngine::new();
        let plan = engine
            .assess(Some(&profile(
                r#"{"businessType":"manufacturing","employees":25,"state":"Karnataka"}"#,
            )))
            .unwrap();

        let c = &plan.classification;
        assert!(c.triggers.factories_act_required);
        assert!(c.triggers.pollution_clearance_required);
        assert!(ids(&plan).contains(&"ka-factories-licence"));
    }

    #[test]
    fn test_empty_profile_still_produces_a_plan() {
        let engine = ComplianceEngine::new();
        let plan = engine.assess(Some(&BusinessProfile::default())).unwrap();

        let c = &plan.classification;
        assert_eq!(c.employee_band, EmployeeBand::Micro);
        assert_eq!(c.state_code, StateCode::Unknown);
        assert!(!plan.obligations.is_empty());
        assert!(ids(&plan).contains(&"udyam-registration"));
    }

    #[test]
    fn test_missing_profile_propagates() {
        let engine = ComplianceEngine::new();
        assert_eq!(
            engine.assess(None).unwrap_err(),
            EngineError::MissingProfile
        );
    }

    #[test]
    fn test_plan_is_deterministic_apart_from_timestamp() {
        let engine = ComplianceEngine::new();
        let p = profile(
            r#"{"businessType":"retail shop","employees":12,"annualTurnover":8000000,"state":"Tamil Nadu","platforms":["flipkart"]}"#,
        );
        let first = engine.assess(Some(&p)).unwrap();
        let second = engine.assess(Some(&p)).unwrap();
        assert_eq!(first.classification, second.classification);
        assert_eq!(first.obligations, second.obligations);
        assert_eq!(first.timeline, second.timeline);
        assert_eq!(first.total_cost, second.total_cost);
    }

    #[test]
    fn test_timeline_matches_obligation_order() {
        let engine = ComplianceEngine::new();
        let plan = engine
            .assess(Some(&profile(
                r#"{"businessType":"restaurant","employees":15,"annualTurnover":9000000,"state":"Maharashtra"}"#,
            )))
            .unwrap();

        assert_eq!(plan.timeline.len(), plan.obligations.len());
        for (entry, obligation) in plan.timeline.iter().zip(&plan.obligations) {
            assert_eq!(entry.obligation_id, obligation.rule.id);
        }
        // Weeks advance every two entries, starting at 1.
        for (index, entry) in plan.timeline.iter().enumerate() {
            assert_eq!(entry.week, index as u32 / 2 + 1);
        }
        let entry_sum: f64 = plan.timeline.iter().map(|entry| entry.cost).sum();
        assert_eq!(plan.total_cost, entry_sum);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The full pipeline never panics on arbitrary caller input.
        #[test]
        fn assess_no_panic(
            business_type in proptest::option::of("\\PC*"),
            state in proptest::option::of("\\PC*"),
            investment in proptest::option::of("\\PC*"),
            employees in proptest::option::of(0u32..100_000),
            turnover in proptest::option::of(0.0f64..1e12),
            platforms in proptest::collection::vec("\\PC*", 0..3),
        ) {
            let engine = ComplianceEngine::new();
            let profile = BusinessProfile {
                business_type,
                state,
                investment,
                employees,
                annual_turnover: turnover,
                scale: None,
                platforms: Some(platforms),
            };
            let plan = engine.assess(Some(&profile)).unwrap();
            // The voluntary Udyam entry keeps every plan non-empty.
            prop_assert!(!plan.obligations.is_empty());
        }
    }
}
