//! Obligation mapping: classification + reference dataset → the
//! de-duplicated, prioritized obligation list.
//!
//! Emission order is part of the contract: central registrations,
//! then the voluntary Udyam entry, then state rules, then industry
//! and platform extras. De-duplication keeps the first emission, and
//! the final sort is stable, so ties keep that order.

use std::collections::HashSet;

use compliance_types::{
    Classification, ComplianceRule, EngineError, IndustryCode, Obligation, Priority,
};

use crate::conditions::{clause_applies, ConditionSubject};
use crate::dataset::{self, states, ReferenceDataset};
use crate::extractors::numeric::extract_timeline_days;

/// Map a classification to its obligation list against the bundled
/// dataset. The only hard failure is an absent classification.
pub fn map_obligations(
    classification: Option<&Classification>,
) -> Result<Vec<Obligation>, EngineError> {
    let classification = classification.ok_or(EngineError::MissingClassification)?;
    Ok(map_with_dataset(classification, dataset::bundled()))
}

pub fn map_with_dataset(
    classification: &Classification,
    data: &ReferenceDataset,
) -> Vec<Obligation> {
    let mut obligations = Vec::new();
    let triggers = &classification.triggers;

    // Central registrations, driven by the classifier's triggers.
    if triggers.gst_required {
        obligations.push(resolve(
            &data.central.gst,
            Priority::High,
            format!(
                "Annual turnover of ₹{:.0} is at or above the ₹40 lakh registration threshold",
                classification.annual_turnover
            ),
        ));
    }
    if triggers.fssai_required {
        obligations.push(resolve(
            &data.central.fssai,
            Priority::High,
            "Business handles food products or food service".to_string(),
        ));
    }
    if triggers.epf_required {
        obligations.push(resolve(
            &data.central.epf,
            Priority::High,
            format!(
                "{} employees is at or above the 20-employee EPF threshold",
                classification.employees
            ),
        ));
    }
    if triggers.esi_required {
        obligations.push(resolve(
            &data.central.esi,
            Priority::High,
            format!(
                "{} employees is at or above the 10-employee ESI threshold",
                classification.employees
            ),
        ));
    }

    // Udyam registration is voluntary but always worth surfacing.
    obligations.push(resolve(
        &data.central.udyam,
        Priority::Medium,
        "Open to every micro, small and medium enterprise".to_string(),
    ));

    // State rules, degrading to a generic entry for unmapped states.
    let state_name = classification.state_code.display_name().to_string();
    match data.state_bundle(&classification.state_code) {
        Some(bundle) => {
            if needs_shops_act(classification) {
                obligations.push(resolve(
                    &bundle.shops_act,
                    Priority::High,
                    format!("Commercial establishment operating in {state_name}"),
                ));
            }
            if triggers.factories_act_required {
                if let Some(rule) = &bundle.factories_act {
                    obligations.push(resolve(
                        rule,
                        Priority::High,
                        format!(
                            "Manufacturing unit in {state_name} with {} workers",
                            classification.employees
                        ),
                    ));
                }
            }
            if let Some(rule) = &bundle.trade_license {
                obligations.push(resolve(
                    rule,
                    Priority::Medium,
                    format!("Local-body trade licence for business premises in {state_name}"),
                ));
            }
        }
        None => {
            if needs_shops_act(classification) {
                obligations.push(resolve(
                    &states::generic_shops_act(),
                    Priority::High,
                    "Commercial establishments must register under their state's Shops and Establishments Act"
                        .to_string(),
                ));
            }
        }
    }

    // Industry and platform extras, gated by their own clauses.
    let subject = ConditionSubject::from(classification);
    for rule in data.business_type_rules(classification.industry_code) {
        if clause_applies(rule.applicable_if.as_ref(), &subject) {
            obligations.push(resolve(
                rule,
                priority_for(rule),
                format!(
                    "Standard requirement for {} businesses",
                    classification.industry_code.label()
                ),
            ));
        }
    }
    for platform in &classification.platforms {
        for rule in data.platform_rules(platform) {
            if clause_applies(rule.applicable_if.as_ref(), &subject) {
                obligations.push(resolve(
                    rule,
                    priority_for(rule),
                    format!("Required for sellers on {platform}"),
                ));
            }
        }
    }

    // First emission wins on duplicate rule ids.
    let mut seen = HashSet::new();
    obligations.retain(|obligation| seen.insert(obligation.rule.id.clone()));

    // Mandatory first, then fastest first; stable, so insertion order
    // breaks ties.
    obligations.sort_by_key(|obligation| {
        (
            !obligation.rule.mandatory,
            extract_timeline_days(&obligation.rule.timeline),
        )
    });

    obligations
}

/// The shops-act trigger tracks the retail/services/general families,
/// but food businesses register as commercial establishments too; only
/// factory premises are outside the Shops Acts.
fn needs_shops_act(classification: &Classification) -> bool {
    classification.triggers.shops_act_required
        || classification.industry_code == IndustryCode::FoodBeverage
}

fn priority_for(rule: &ComplianceRule) -> Priority {
    if rule.mandatory {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// Build a fresh obligation record. Dataset rules are templates and
/// must never be handed out by reference.
fn resolve(rule: &ComplianceRule, priority: Priority, applicable_when: String) -> Obligation {
    Obligation {
        rule: rule.clone(),
        priority,
        applicable_when,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use compliance_types::BusinessProfile;
    use pretty_assertions::assert_eq;

    fn classified(json: &str) -> Classification {
        let profile: BusinessProfile = serde_json::from_str(json).unwrap();
        classify(Some(&profile)).unwrap()
    }

    fn ids(obligations: &[Obligation]) -> Vec<&str> {
        obligations.iter().map(|o| o.rule.id.as_str()).collect()
    }

    #[test]
    fn test_missing_classification_is_a_hard_error() {
        assert_eq!(map_obligations(None), Err(EngineError::MissingClassification));
    }

    #[test]
    fn test_udyam_always_present_and_optional() {
        let obligations = map_obligations(Some(&classified("{}"))).unwrap();
        let udyam = obligations
            .iter()
            .find(|o| o.rule.id == "udyam-registration")
            .expect("udyam entry missing");
        assert!(!udyam.rule.mandatory);
        assert_eq!(udyam.priority, Priority::Medium);
    }

    #[test]
    fn test_unmapped_state_gets_generic_shops_act() {
        let obligations = map_obligations(Some(&classified(
            r#"{"businessType":"retail shop","state":"Ruritania"}"#,
        )))
        .unwrap();
        assert!(ids(&obligations).contains(&"shops-establishments-registration"));
    }

    #[test]
    fn test_factory_in_karnataka_gets_state_factory_licence() {
        let obligations = map_obligations(Some(&classified(
            r#"{"businessType":"manufacturing","employees":25,"state":"Karnataka"}"#,
        )))
        .unwrap();
        let ids = ids(&obligations);
        assert!(ids.contains(&"ka-factories-licence"));
        assert!(ids.contains(&"pollution-consent"));
        // A factory is not a shop.
        assert!(!ids.contains(&"ka-shops-establishments"));
    }

    #[test]
    fn test_trade_licence_is_unconditional_when_defined() {
        let obligations = map_obligations(Some(&classified(
            r#"{"businessType":"software services","employees":3,"state":"Delhi"}"#,
        )))
        .unwrap();
        assert!(ids(&obligations).contains(&"dl-trade-licence"));
    }

    #[test]
    fn test_mandatory_entries_sort_before_optional() {
        let obligations = map_obligations(Some(&classified(
            r#"{"businessType":"restaurant","employees":5,"annualTurnover":6000000,"state":"Karnataka"}"#,
        )))
        .unwrap();
        let first_optional = obligations
            .iter()
            .position(|o| !o.rule.mandatory)
            .expect("no optional entries");
        assert!(obligations[..first_optional].iter().all(|o| o.rule.mandatory));
        assert!(obligations[first_optional..].iter().all(|o| !o.rule.mandatory));
    }

    #[test]
    fn test_sorted_by_timeline_days_within_mandatory_group() {
        let obligations = map_obligations(Some(&classified(
            r#"{"businessType":"restaurant","employees":5,"annualTurnover":6000000,"state":"Karnataka"}"#,
        )))
        .unwrap();
        let days: Vec<u32> = obligations
            .iter()
            .filter(|o| o.rule.mandatory)
            .map(|o| extract_timeline_days(&o.rule.timeline))
            .collect();
        let mut sorted = days.clone();
        sorted.sort_unstable();
        assert_eq!(days, sorted);
    }

    #[test]
    fn test_platform_seller_below_threshold_still_gets_gst() {
        let obligations = map_obligations(Some(&classified(
            r#"{"businessType":"retail shop","annualTurnover":500000,"platforms":["Amazon"]}"#,
        )))
        .unwrap();
        let gst = obligations
            .iter()
            .find(|o| o.rule.id == "gst-registration")
            .expect("platform GST missing");
        assert!(gst.applicable_when.contains("amazon"));
    }

    #[test]
    fn test_platform_gst_deduplicates_against_central() {
        let obligations = map_obligations(Some(&classified(
            r#"{"businessType":"retail shop","annualTurnover":9000000,"platforms":["amazon"]}"#,
        )))
        .unwrap();
        let gst_entries: Vec<_> = obligations
            .iter()
            .filter(|o| o.rule.id == "gst-registration")
            .collect();
        assert_eq!(gst_entries.len(), 1);
        // Central emission came first and wins.
        assert!(gst_entries[0].applicable_when.contains("turnover"));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let classification = classified(
            r#"{"businessType":"restaurant","employees":12,"annualTurnover":6000000,"state":"Maharashtra"}"#,
        );
        let first = map_obligations(Some(&classification)).unwrap();
        let second = map_obligations(Some(&classification)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_obligations_are_fresh_copies() {
        let classification = classified(r#"{"businessType":"restaurant"}"#);
        let mut obligations = map_obligations(Some(&classification)).unwrap();
        // Mutating a mapped record must not leak into later mappings.
        if let Some(first) = obligations.first_mut() {
            first.rule.name = "mutated".to_string();
        }
        let again = map_obligations(Some(&classification)).unwrap();
        assert!(again.iter().all(|o| o.rule.name != "mutated"));
    }
}
