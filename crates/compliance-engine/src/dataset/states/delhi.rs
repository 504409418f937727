//! Delhi (NCT)

use compliance_types::{ComplianceRule, Cost, CostBreakdown, RuleCategory, State};

use crate::dataset::StateRuleBundle;

pub fn bundle() -> StateRuleBundle {
    StateRuleBundle {
        state: State::DL,
        shops_act: shops_registration(),
        factories_act: Some(factories_licence()),
        trade_license: Some(trade_licence()),
    }
}

fn shops_registration() -> ComplianceRule {
    ComplianceRule {
        id: "dl-shops-establishments".to_string(),
        name: "Delhi Shops and Establishments Registration".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Proof of occupancy of the premises".to_string(),
            "Identity proof of the occupier".to_string(),
            "Details of employees".to_string(),
        ],
        authority: "Labour Department, Government of NCT of Delhi".to_string(),
        cost: Cost::Flat(500.0),
        timeline: "7-15 days".to_string(),
        penalties: Some("Fines under the Delhi Shops and Establishments Act, 1954".to_string()),
        benefits: None,
        obligations: vec![
            "Display the registration certificate".to_string(),
            "Observe the prescribed opening and closing hours".to_string(),
            "Maintain employment and wage registers".to_string(),
        ],
    }
}

fn factories_licence() -> ComplianceRule {
    ComplianceRule {
        id: "dl-factories-licence".to_string(),
        name: "Delhi Factories Act Licence".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Approved factory plan".to_string(),
            "List of machinery and processes".to_string(),
        ],
        authority: "Chief Inspector of Factories, Delhi".to_string(),
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
            "File annual returns with the Chief Inspector".to_string(),
        ],
    }
}

fn trade_licence() -> ComplianceRule {
    ComplianceRule {
        id: "dl-trade-licence".to_string(),
        name: "MCD General Trade Licence".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Ownership proof or rent agreement with NOC".to_string(),
            "Site plan of the premises".to_string(),
            "Identity proof of the applicant".to_string(),
        ],
        authority: "Municipal Corporation of Delhi".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(1_000.0),
            renewal: Some(500.0),
            ..CostBreakdown::default()
        }),
        timeline: "30-45 days".to_string(),
        penalties: Some("Sealing of premises for trading without a licence".to_string()),
        benefits: None,
        obligations: vec![
            "Renew the licence annually before expiry".to_string(),
            "Display the licence at the place of business".to_string(),
        ],
    }
}
