//! Tamil Nadu

use compliance_types::{ComplianceRule, Cost, CostBreakdown, RuleCategory, State};

use crate::dataset::StateRuleBundle;

pub fn bundle() -> StateRuleBundle {
    StateRuleBundle {
        state: State::TN,
        shops_act: shops_registration(),
        factories_act: Some(factories_licence()),
        trade_license: Some(trade_licence()),
    }
}

fn shops_registration() -> ComplianceRule {
    ComplianceRule {
        id: "tn-shops-establishments".to_string(),
        name: "Tamil Nadu Shops and Establishments Registration".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Proof of premises".to_string(),
            "Identity proof of the employer".to_string(),
            "Employee particulars".to_string(),
        ],
        authority: "Labour Department, Government of Tamil Nadu".to_string(),
        cost: Cost::Flat(250.0),
        timeline: "7-15 days".to_string(),
        penalties: Some("Fines under the Tamil Nadu Shops and Establishments Act, 1947".to_string()),
        benefits: None,
        obligations: vec![
            "Display the registration certificate".to_string(),
            "Maintain registers of employment and wages".to_string(),
        ],
    }
}

fn factories_licence() -> ComplianceRule {
    ComplianceRule {
        id: "tn-factories-licence".to_string(),
        name: "Tamil Nadu Factories Act Licence".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Approved building plan".to_string(),
            "Process and machinery details".to_string(),
        ],
        authority: "Directorate of Industrial Safety and Health, Tamil Nadu".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(1_000.0),
            renewal: Some(1_000.0),
            ..CostBreakdown::default()
        }),
        timeline: "30-60 days".to_string(),
        penalties: Some("Prosecution under the Factories Act for unlicensed operation".to_string()),
        benefits: None,
        obligations: vec![
            "Renew the licence annually".to_string(),
            "File the prescribed returns".to_string(),
        ],
    }
}

fn trade_licence() -> ComplianceRule {
    ComplianceRule {
        id: "tn-trade-licence".to_string(),
        name: "Tamil Nadu Municipal Trade Licence".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Property tax receipt or rent agreement".to_string(),
            "Identity proof of the applicant".to_string(),
        ],
        authority: "Greater Chennai Corporation or the local municipal body".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(500.0),
            renewal: Some(500.0),
            ..CostBreakdown::default()
        }),
        timeline: "15-30 days".to_string(),
        penalties: None,
        benefits: None,
        obligations: vec![
            "Renew the licence annually".to_string(),
            "Display the licence at the place of business".to_string(),
        ],
    }
}
