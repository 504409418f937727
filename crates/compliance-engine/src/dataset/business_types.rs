//! Industry-specific extras, keyed by the classified industry code.
//!
//! These sit on top of the central registrations: a food business
//! that grows past the basic-registration turnover ceiling needs a
//! state licence, a manufacturer needs pollution consents, and so on.
//! Each rule carries its own applicability clause, evaluated against
//! the resolved classification.

use std::collections::HashMap;

use compliance_types::{
    ApplicabilityClause, ComplianceRule, Cost, CostBreakdown, FieldConstraint, IndustryCode,
    NumericBound, ProfileField, RuleCategory,
};

/// FSSAI basic registration covers turnover up to ₹12 lakh; above
/// that a state licence is required.
const FSSAI_STATE_LICENCE_TURNOVER_INR: f64 = 1_200_000.0;

pub fn rules() -> HashMap<IndustryCode, Vec<ComplianceRule>> {
    HashMap::from([
        (
            IndustryCode::FoodBeverage,
            vec![fssai_state_licence(), fire_noc()],
        ),
        (IndustryCode::Manufacturing, vec![pollution_consent()]),
        (IndustryCode::RetailTrade, vec![legal_metrology()]),
        (IndustryCode::Services, vec![professional_tax()]),
        (IndustryCode::Construction, vec![bocw_registration()]),
    ])
}

fn fssai_state_licence() -> ComplianceRule {
    ComplianceRule {
        id: "fssai-state-licence".to_string(),
        name: "FSSAI State Licence".to_string(),
        category: RuleCategory::FoodSafety,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::AnnualTurnover,
            FieldConstraint::Bound(NumericBound::above(FSSAI_STATE_LICENCE_TURNOVER_INR)),
        )),
        documents: vec![
            "Form B application".to_string(),
            "Layout plan of the processing unit".to_string(),
            "List of food categories and equipment".to_string(),
            "Water test report".to_string(),
        ],
        authority: "State Food Safety Commissioner".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(2_000.0),
            renewal: Some(2_000.0),
            ..CostBreakdown::default()
        }),
        timeline: "30-60 days".to_string(),
        penalties: Some("Up to ₹5 lakh fine for operating beyond the registration ceiling".to_string()),
        benefits: None,
        obligations: vec![
            "Display the licence at the premises".to_string(),
            "File annual return Form D1".to_string(),
            "Maintain the food safety management plan".to_string(),
        ],
    }
}

fn fire_noc() -> ComplianceRule {
    ComplianceRule {
        id: "fire-safety-noc".to_string(),
        name: "Fire Safety No-Objection Certificate".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::Employees,
            FieldConstraint::Bound(NumericBound::at_least(10.0)),
        )),
        documents: vec![
            "Building plan with escape routes".to_string(),
            "Details of fire-fighting equipment installed".to_string(),
        ],
        authority: "State Fire and Emergency Services".to_string(),
        cost: Cost::Flat(1_500.0),
        timeline: "15-30 days".to_string(),
        penalties: Some("Closure orders for premises without fire clearance".to_string()),
        benefits: None,
        obligations: vec![
            "Conduct periodic fire drills".to_string(),
            "Keep extinguishers serviced and accessible".to_string(),
            "Renew the certificate as prescribed".to_string(),
        ],
    }
}

fn pollution_consent() -> ComplianceRule {
    ComplianceRule {
        id: "pollution-consent".to_string(),
        name: "Pollution Control Board Consent (CTE/CTO)".to_string(),
        category: RuleCategory::Environment,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Site and layout plan".to_string(),
            "Manufacturing process details with effluent quantities".to_string(),
            "Land ownership or lease documents".to_string(),
        ],
        authority: "State Pollution Control Board".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(5_000.0),
            renewal: Some(2_500.0),
            ..CostBreakdown::default()
        }),
        timeline: "60-120 days".to_string(),
        penalties: Some(
            "Closure directions and prosecution under the Water and Air Acts".to_string(),
        ),
        benefits: None,
        obligations: vec![
            "Obtain consent to establish before construction".to_string(),
            "Obtain consent to operate before production starts".to_string(),
            "Submit environmental statements annually".to_string(),
        ],
    }
}

fn legal_metrology() -> ComplianceRule {
    ComplianceRule {
        id: "legal-metrology-registration".to_string(),
        name: "Legal Metrology Registration".to_string(),
        category: RuleCategory::Registration,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Details of weights and measures in use".to_string(),
            "Identity proof of the dealer".to_string(),
        ],
        authority: "State Legal Metrology Department".to_string(),
        cost: Cost::Flat(500.0),
        timeline: "15-30 days".to_string(),
        penalties: Some("Fines for unverified weights or non-standard packaging declarations".to_string()),
        benefits: None,
        obligations: vec![
            "Get weighing instruments stamped and re-verified periodically".to_string(),
            "Declare quantity, MRP and origin on packaged goods".to_string(),
        ],
    }
}

fn professional_tax() -> ComplianceRule {
    ComplianceRule {
        id: "professional-tax-registration".to_string(),
        name: "Professional Tax Registration".to_string(),
        category: RuleCategory::Tax,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::Employees,
            FieldConstraint::Bound(NumericBound::at_least(1.0)),
        )),
        documents: vec![
            "PAN of the establishment".to_string(),
            "Employee salary details".to_string(),
        ],
        authority: "State Commercial Taxes Department".to_string(),
        cost: Cost::Flat(0.0),
        timeline: "7-15 days".to_string(),
        penalties: Some("Interest and penalty on delayed professional tax payments".to_string()),
        benefits: None,
        obligations: vec![
            "Deduct professional tax from salaries per the state slab".to_string(),
            "Remit deductions and file returns monthly or annually as prescribed".to_string(),
        ],
    }
}

fn bocw_registration() -> ComplianceRule {
    ComplianceRule {
        id: "bocw-registration".to_string(),
        name: "BOCW Act Establishment Registration".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::Employees,
            FieldConstraint::Bound(NumericBound::at_least(10.0)),
        )),
        documents: vec![
            "Details of construction work undertaken".to_string(),
            "Particulars of workers employed".to_string(),
        ],
        authority: "State Building and Other Construction Workers Welfare Board".to_string(),
        cost: Cost::Flat(1_000.0),
        timeline: "15-30 days".to_string(),
        penalties: Some("Penalty for employing building workers without registration".to_string()),
        benefits: None,
        obligations: vec![
            "Pay the labour welfare cess on construction cost".to_string(),
            "Maintain registers of building workers".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_industry_family_has_rules() {
        let rules = rules();
        for industry in [
            IndustryCode::FoodBeverage,
            IndustryCode::Manufacturing,
            IndustryCode::RetailTrade,
            IndustryCode::Services,
            IndustryCode::Construction,
        ] {
            assert!(!rules.get(&industry).unwrap().is_empty());
        }
        // General businesses get no industry extras.
        assert!(rules.get(&IndustryCode::General).is_none());
    }
}
