//! Maharashtra
//!
//! Registration under the Maharashtra Shops and Establishments
//! (Regulation of Employment and Conditions of Service) Act, 2017.

use compliance_types::{ComplianceRule, Cost, CostBreakdown, RuleCategory, State};

use crate::dataset::StateRuleBundle;

pub fn bundle() -> StateRuleBundle {
    StateRuleBundle {
        state: State::MH,
        shops_act: shops_registration(),
        factories_act: Some(factories_licence()),
        trade_license: Some(trade_licence()),
    }
}

fn shops_registration() -> ComplianceRule {
    ComplianceRule {
        id: "mh-shops-establishments".to_string(),
        name: "Maharashtra Shops and Establishments Registration".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Proof of premises (agreement, utility bill)".to_string(),
            "Photo identity and PAN of the employer".to_string(),
            "Details of employees".to_string(),
        ],
        authority: "Municipal Corporation Labour Department (Maharashtra)".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(450.0),
            renewal: Some(450.0),
            ..CostBreakdown::default()
        }),
        timeline: "7-21 days".to_string(),
        penalties: Some("Fine up to ₹1 lakh for non-registration under the 2017 Act".to_string()),
        benefits: None,
        obligations: vec![
            "Display the Labour Identification Number at the establishment".to_string(),
            "Maintain employment registers in the prescribed form".to_string(),
            "Intimate changes in employment within the prescribed period".to_string(),
        ],
    }
}

fn factories_licence() -> ComplianceRule {
    ComplianceRule {
        id: "mh-factories-licence".to_string(),
        name: "Maharashtra Factories Act Licence".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Approved building plan and stability certificate".to_string(),
            "List of manufacturing processes and machinery".to_string(),
            "Particulars of the occupier and manager".to_string(),
        ],
        authority: "Directorate of Industrial Safety and Health, Maharashtra".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(1_200.0),
            renewal: Some(1_200.0),
            ..CostBreakdown::default()
        }),
        timeline: "30-60 days".to_string(),
        penalties: Some("Prosecution under the Factories Act for unlicensed operation".to_string()),
        benefits: None,
        obligations: vec![
            "Renew the licence before 31 December each year".to_string(),
            "File annual returns with the Directorate".to_string(),
        ],
    }
}

fn trade_licence() -> ComplianceRule {
    ComplianceRule {
        id: "mh-trade-licence".to_string(),
        name: "Maharashtra Municipal Trade Licence".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Proof of premises ownership or tenancy".to_string(),
            "Identity proof of the applicant".to_string(),
        ],
        authority: "Brihanmumbai Municipal Corporation or the local municipal body".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(750.0),
            renewal: Some(750.0),
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
