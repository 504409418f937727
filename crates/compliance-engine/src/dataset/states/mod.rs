//! State-specific rule bundles.
//!
//! Each covered state gets its own module with that state's Shops &
//! Establishments registration, Factories Act licence, and municipal
//! trade licence. States without a bundle fall back to the generic
//! Shops Act entry below, so an unmapped state still gets an answer.

pub mod delhi;
pub mod gujarat;
pub mod karnataka;
pub mod maharashtra;
pub mod tamil_nadu;
pub mod uttar_pradesh;

use std::collections::HashMap;

use compliance_types::{ComplianceRule, Cost, RuleCategory, State};

use super::StateRuleBundle;

pub fn bundles() -> HashMap<State, StateRuleBundle> {
    [
        karnataka::bundle(),
        maharashtra::bundle(),
        delhi::bundle(),
        tamil_nadu::bundle(),
        gujarat::bundle(),
        uttar_pradesh::bundle(),
    ]
    .into_iter()
    .map(|bundle| (bundle.state, bundle))
    .collect()
}

/// Fallback Shops & Establishments entry for states without a bundle.
pub fn generic_shops_act() -> ComplianceRule {
    ComplianceRule {
        id: "shops-establishments-registration".to_string(),
        name: "Shops and Establishments Registration".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Proof of establishment address".to_string(),
            "Identity proof of the employer".to_string(),
            "Details of employees and working hours".to_string(),
        ],
        authority: "State Labour Department".to_string(),
        cost: Cost::Flat(500.0),
        timeline: "7-15 days".to_string(),
        penalties: Some("Fines under the applicable state Shops and Establishments Act".to_string()),
        benefits: None,
        obligations: vec![
            "Display the registration certificate at the establishment".to_string(),
            "Maintain registers of employment, wages and leave".to_string(),
            "Renew the registration as the state Act prescribes".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundles_registered() {
        let bundles = bundles();
        for state in [State::KA, State::MH, State::DL, State::TN, State::GJ, State::UP] {
            assert!(bundles.contains_key(&state), "missing bundle for {state}");
        }
    }

    #[test]
    fn test_generic_fallback_is_mandatory() {
        let rule = generic_shops_act();
        assert!(rule.mandatory);
        assert!(rule.applicable_if.is_none());
    }
}
