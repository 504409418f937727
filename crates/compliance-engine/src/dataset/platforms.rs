//! Marketplace onboarding requirements.
//!
//! E-commerce operators must collect TCS, so marketplaces demand a
//! GSTIN from every seller regardless of the turnover threshold, and
//! food-delivery platforms demand an FSSAI licence number. Platform
//! entries reuse the central rule ids on purpose: when the central
//! trigger already emitted the registration, de-duplication collapses
//! the platform copy.

use compliance_types::ComplianceRule;

use super::{central, PlatformRuleSet};

pub fn rule_sets() -> Vec<PlatformRuleSet> {
    vec![
        PlatformRuleSet {
            platform: "amazon",
            rules: vec![ecommerce_gst()],
        },
        PlatformRuleSet {
            platform: "flipkart",
            rules: vec![ecommerce_gst()],
        },
        PlatformRuleSet {
            platform: "meesho",
            rules: vec![ecommerce_gst()],
        },
        PlatformRuleSet {
            platform: "zomato",
            rules: vec![ecommerce_gst(), platform_fssai()],
        },
        PlatformRuleSet {
            platform: "swiggy",
            rules: vec![ecommerce_gst(), platform_fssai()],
        },
    ]
}

/// GST registration without the turnover clause: marketplace sellers
/// must register from the first rupee.
fn ecommerce_gst() -> ComplianceRule {
    let mut rule = central::gst_registration();
    rule.name = "GST Registration (E-commerce Seller)".to_string();
    rule.applicable_if = None;
    rule
}

fn platform_fssai() -> ComplianceRule {
    let mut rule = central::fssai_registration();
    rule.name = "FSSAI Registration (Food Delivery Onboarding)".to_string();
    rule.applicable_if = None;
    rule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_rules_reuse_central_ids() {
        assert_eq!(ecommerce_gst().id, central::gst_registration().id);
        assert_eq!(platform_fssai().id, central::fssai_registration().id);
    }

    #[test]
    fn test_platform_gst_is_unconditional() {
        assert!(ecommerce_gst().applicable_if.is_none());
    }
}
