//! Uttar Pradesh

use compliance_types::{ComplianceRule, Cost, CostBreakdown, RuleCategory, State};

use crate::dataset::StateRuleBundle;

pub fn bundle() -> StateRuleBundle {
    StateRuleBundle {
        state: State::UP,
        shops_act: shops_registration(),
        factories_act: Some(factories_licence()),
        trade_license: None,
    }
}

fn shops_registration() -> ComplianceRule {
    ComplianceRule {
        id: "up-shops-establishments".to_string(),
        name: "Uttar Pradesh Shops and Establishments Registration".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Proof of premises".to_string(),
            "Identity proof of the employer".to_string(),
            "Employee particulars".to_string(),
        ],
        authority: "Labour Department, Government of Uttar Pradesh".to_string(),
        cost: Cost::Flat(300.0),
        timeline: "7-15 days".to_string(),
        penalties: Some(
            "Fines under the UP Dookan Aur Vanijya Adhishthan Adhiniyam, 1962".to_string(),
        ),
        benefits: None,
        obligations: vec![
            "Display the registration certificate".to_string(),
            "Maintain registers of employment and wages".to_string(),
        ],
    }
}

fn factories_licence() -> ComplianceRule {
    ComplianceRule {
        id: "up-factories-licence".to_string(),
        name: "Uttar Pradesh Factories Act Licence".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Approved factory plan".to_string(),
            "Machinery and process details".to_string(),
        ],
        authority: "Directorate of Factories, Uttar Pradesh".to_string(),
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
            "File the prescribed annual returns".to_string(),
        ],
    }
}
