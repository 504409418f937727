//! Karnataka
//!
//! Shops registration under the Karnataka Shops and Commercial
//! Establishments Act, 1961; factory licensing under the Factories
//! Act, 1948; trade licences through BBMP or the local municipal body.

use compliance_types::{ComplianceRule, Cost, CostBreakdown, RuleCategory, State};

use crate::dataset::StateRuleBundle;

pub fn bundle() -> StateRuleBundle {
    StateRuleBundle {
        state: State::KA,
        shops_act: shops_registration(),
        factories_act: Some(factories_licence()),
        trade_license: Some(trade_licence()),
    }
}

fn shops_registration() -> ComplianceRule {
    ComplianceRule {
        id: "ka-shops-establishments".to_string(),
        name: "Karnataka Shops and Commercial Establishments Registration".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Rental agreement or property proof for the premises".to_string(),
            "PAN and photo identity of the employer".to_string(),
            "Details of employees and weekly holiday".to_string(),
        ],
        authority: "Department of Labour, Government of Karnataka (e-Karmika)".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(300.0),
            renewal: Some(300.0),
            ..CostBreakdown::default()
        }),
        timeline: "7-15 days".to_string(),
        penalties: Some("Fine up to ₹1,000 for operating an unregistered establishment".to_string()),
        benefits: None,
        obligations: vec![
            "Display the registration certificate at the establishment".to_string(),
            "Maintain registers of attendance, wages and leave".to_string(),
            "Renew the registration every five years".to_string(),
        ],
    }
}

fn factories_licence() -> ComplianceRule {
    ComplianceRule {
        id: "ka-factories-licence".to_string(),
        name: "Karnataka Factories Act Licence".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Approved factory building plan".to_string(),
            "List of machinery and manufacturing processes".to_string(),
            "Particulars of the occupier and manager".to_string(),
        ],
        authority: "Department of Factories, Boilers, Industrial Safety and Health, Karnataka"
            .to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(1_000.0),
            renewal: Some(1_000.0),
            ..CostBreakdown::default()
        }),
        timeline: "30-60 days".to_string(),
        penalties: Some("Imprisonment up to 2 years or fine up to ₹1 lakh under the Factories Act".to_string()),
        benefits: None,
        obligations: vec![
            "Obtain plan approval before occupying the factory".to_string(),
            "File annual and half-yearly returns".to_string(),
            "Maintain safety, health and welfare provisions per the Act".to_string(),
        ],
    }
}

fn trade_licence() -> ComplianceRule {
    ComplianceRule {
        id: "ka-trade-licence".to_string(),
        name: "Karnataka Municipal Trade Licence".to_string(),
        category: RuleCategory::Licence,
        mandatory: true,
        applicable_if: None,
        documents: vec![
            "Khata certificate or property tax receipt".to_string(),
            "Occupancy certificate for the premises".to_string(),
            "Identity proof of the applicant".to_string(),
        ],
        authority: "Bruhat Bengaluru Mahanagara Palike or the local municipal body".to_string(),
        cost: Cost::Breakdown(CostBreakdown {
            basic: Some(500.0),
            renewal: Some(500.0),
            ..CostBreakdown::default()
        }),
        timeline: "15-30 days".to_string(),
        penalties: Some("Penalty and closure notices for trading without a licence".to_string()),
        benefits: None,
        obligations: vec![
            "Renew the licence annually before 31 March".to_string(),
            "Display the licence at the place of business".to_string(),
        ],
    }
}
