//! Central (nationwide) registrations.

use compliance_types::{
    ApplicabilityClause, ComplianceRule, Cost, FieldConstraint, NumericBound, ProfileField,
    RuleCategory,
};

use crate::classifier::{
    EPF_EMPLOYEE_THRESHOLD, ESI_EMPLOYEE_THRESHOLD, GST_TURNOVER_THRESHOLD_INR,
};

use super::CentralRules;

pub fn rules() -> CentralRules {
    CentralRules {
        gst: gst_registration(),
        fssai: fssai_registration(),
        epf: epf_registration(),
        esi: esi_registration(),
        udyam: udyam_registration(),
    }
}

pub fn gst_registration() -> ComplianceRule {
    ComplianceRule {
        id: "gst-registration".to_string(),
        name: "GST Registration".to_string(),
        category: RuleCategory::Tax,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::AnnualTurnover,
            FieldConstraint::Bound(NumericBound::at_least(GST_TURNOVER_THRESHOLD_INR)),
        )),
        documents: vec![
            "PAN of the business or proprietor".to_string(),
            "Aadhaar of the proprietor/partners".to_string(),
            "Proof of principal place of business".to_string(),
            "Bank account statement or cancelled cheque".to_string(),
            "Passport-size photographs".to_string(),
        ],
        authority: "Central Board of Indirect Taxes and Customs (GST portal)".to_string(),
        cost: Cost::Flat(0.0),
        timeline: "3-7 working days".to_string(),
        penalties: Some(
            "10% of tax due (minimum ₹10,000) for failure to register; 100% for deliberate evasion"
                .to_string(),
        ),
        benefits: Some(
            "Input tax credit on purchases; required for inter-state supply and e-commerce"
                .to_string(),
        ),
        obligations: vec![
            "File GSTR-1 (outward supplies) monthly or quarterly".to_string(),
            "File GSTR-3B summary return and pay tax due".to_string(),
            "Issue GST-compliant tax invoices".to_string(),
            "Display the GSTIN on the name board at the principal place of business".to_string(),
        ],
    }
}

pub fn fssai_registration() -> ComplianceRule {
    ComplianceRule {
        id: "fssai-registration".to_string(),
        name: "FSSAI Basic Registration".to_string(),
        category: RuleCategory::FoodSafety,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::BusinessType,
            FieldConstraint::OneOf(vec![
                "food".to_string(),
                "restaurant".to_string(),
                "cafe".to_string(),
                "catering".to_string(),
            ]),
        )),
        documents: vec![
            "Photo identity of the food business operator".to_string(),
            "Proof of premises (rent agreement or utility bill)".to_string(),
            "List of food products handled".to_string(),
        ],
        authority: "Food Safety and Standards Authority of India".to_string(),
        cost: Cost::Flat(100.0),
        timeline: "7-60 days".to_string(),
        penalties: Some(
            "Up to ₹5 lakh fine and imprisonment for operating an unregistered food business"
                .to_string(),
        ),
        benefits: None,
        obligations: vec![
            "Display the registration certificate at the premises".to_string(),
            "Follow Schedule 4 hygiene and sanitary practices".to_string(),
            "File annual return Form D1 by 31 May".to_string(),
            "Renew the registration before expiry".to_string(),
        ],
    }
}

pub fn epf_registration() -> ComplianceRule {
    ComplianceRule {
        id: "epf-registration".to_string(),
        name: "EPF Employer Registration".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::Employees,
            FieldConstraint::Bound(NumericBound::at_least(f64::from(EPF_EMPLOYEE_THRESHOLD))),
        )),
        documents: vec![
            "PAN of the establishment".to_string(),
            "Certificate of incorporation or registration".to_string(),
            "Bank account details and cancelled cheque".to_string(),
            "Digital signature of the authorised signatory".to_string(),
        ],
        authority: "Employees' Provident Fund Organisation".to_string(),
        cost: Cost::Flat(0.0),
        timeline: "3-7 days".to_string(),
        penalties: Some(
            "Interest at 12% p.a. on arrears plus damages up to 100% of the amount due".to_string(),
        ),
        benefits: None,
        obligations: vec![
            "Deposit 12% employer and 12% employee contributions by the 15th of each month"
                .to_string(),
            "File the monthly electronic challan-cum-return (ECR)".to_string(),
            "Allot UANs to all eligible employees".to_string(),
        ],
    }
}

pub fn esi_registration() -> ComplianceRule {
    ComplianceRule {
        id: "esi-registration".to_string(),
        name: "ESI Employer Registration".to_string(),
        category: RuleCategory::Labour,
        mandatory: true,
        applicable_if: Some(ApplicabilityClause::single(
            ProfileField::Employees,
            FieldConstraint::Bound(NumericBound::at_least(f64::from(ESI_EMPLOYEE_THRESHOLD))),
        )),
        documents: vec![
            "Registration certificate under the Shops Act or Factories Act".to_string(),
            "List of employees with monthly wages".to_string(),
            "PAN and address proof of the establishment".to_string(),
        ],
        authority: "Employees' State Insurance Corporation".to_string(),
        cost: Cost::Flat(0.0),
        timeline: "7-15 days".to_string(),
        penalties: Some("Interest at 12% p.a. and prosecution for non-payment of contributions".to_string()),
        benefits: None,
        obligations: vec![
            "Deposit 3.25% employer and 0.75% employee contributions monthly".to_string(),
            "File half-yearly returns of contributions".to_string(),
            "Register new employees within 10 days of joining".to_string(),
        ],
    }
}

/// Voluntary, but always surfaced: the benefits apply to every MSME.
pub fn udyam_registration() -> ComplianceRule {
    ComplianceRule {
        id: "udyam-registration".to_string(),
        name: "Udyam (MSME) Registration".to_string(),
        category: RuleCategory::Registration,
        mandatory: false,
        applicable_if: None,
        documents: vec![
            "Aadhaar of the proprietor or authorised signatory".to_string(),
            "PAN of the enterprise".to_string(),
        ],
        authority: "Ministry of Micro, Small and Medium Enterprises".to_string(),
        cost: Cost::Flat(0.0),
        timeline: "1 day".to_string(),
        penalties: None,
        benefits: Some(
            "Priority-sector lending, collateral-free credit, interest subvention and protection against delayed payments"
                .to_string(),
        ),
        obligations: vec![
            "Keep turnover and investment figures current on the Udyam portal".to_string(),
        ],
    }
}
