//! Bundled reference dataset.
//!
//! Four rule families, merged by the mapper:
//! 1. Central — nationwide registrations (GST, FSSAI, EPF, ESI, Udyam)
//! 2. State — Shops & Establishments, Factories Act, trade licences
//! 3. Business type — industry-specific extras
//! 4. Platform — marketplace onboarding requirements
//!
//! The dataset is immutable after load. Rules are templates: the
//! mapper clones them into fresh obligation records and never hands
//! out shared instances.

pub mod business_types;
pub mod central;
pub mod platforms;
pub mod states;

use std::collections::HashMap;

use compliance_types::{ComplianceRule, IndustryCode, State, StateCode};
use lazy_static::lazy_static;

/// Nationwide registrations keyed by the classifier's triggers.
pub struct CentralRules {
    pub gst: ComplianceRule,
    pub fssai: ComplianceRule,
    pub epf: ComplianceRule,
    pub esi: ComplianceRule,
    pub udyam: ComplianceRule,
}

/// Rules for one state. Only `shops_act` is guaranteed; smaller
/// states may lack dedicated factory or trade-licence entries.
pub struct StateRuleBundle {
    pub state: State,
    pub shops_act: ComplianceRule,
    pub factories_act: Option<ComplianceRule>,
    pub trade_license: Option<ComplianceRule>,
}

/// Rules tied to selling on a named marketplace.
pub struct PlatformRuleSet {
    pub platform: &'static str,
    pub rules: Vec<ComplianceRule>,
}

pub struct ReferenceDataset {
    pub central: CentralRules,
    state_bundles: HashMap<State, StateRuleBundle>,
    business_type_rules: HashMap<IndustryCode, Vec<ComplianceRule>>,
    platform_rule_sets: Vec<PlatformRuleSet>,
}

impl ReferenceDataset {
    fn assemble() -> Self {
        Self {
            central: central::rules(),
            state_bundles: states::bundles(),
            business_type_rules: business_types::rules(),
            platform_rule_sets: platforms::rule_sets(),
        }
    }

    /// Bundle for a state, if it has one. Best-effort and unknown
    /// codes resolve to `None`; the mapper degrades to its generic
    /// fallback rather than failing.
    pub fn state_bundle(&self, code: &StateCode) -> Option<&StateRuleBundle> {
        self.state_bundles.get(&code.known()?)
    }

    pub fn business_type_rules(&self, industry: IndustryCode) -> &[ComplianceRule] {
        self.business_type_rules
            .get(&industry)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Rules for a marketplace name (already lowercased by the
    /// classifier). Matching is by substring so "amazon.in" and
    /// "amazon seller central" both resolve to the amazon set.
    pub fn platform_rules(&self, platform: &str) -> Vec<&ComplianceRule> {
        self.platform_rule_sets
            .iter()
            .filter(|set| platform.contains(set.platform))
            .flat_map(|set| set.rules.iter())
            .collect()
    }

    pub fn covered_states(&self) -> Vec<State> {
        let mut covered: Vec<State> = self.state_bundles.keys().copied().collect();
        covered.sort_by_key(|state| state.code());
        covered
    }
}

lazy_static! {
    static ref BUNDLED: ReferenceDataset = ReferenceDataset::assemble();
}

/// The process-wide immutable dataset.
pub fn bundled() -> &'static ReferenceDataset {
    &BUNDLED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_bundle_lookup() {
        let data = bundled();
        assert!(data
            .state_bundle(&StateCode::Known(State::KA))
            .is_some());
        assert!(data
            .state_bundle(&StateCode::Other("RURITANIA".to_string()))
            .is_none());
        assert!(data.state_bundle(&StateCode::Unknown).is_none());
    }

    #[test]
    fn test_platform_matching_is_substring() {
        let data = bundled();
        assert!(!data.platform_rules("amazon.in").is_empty());
        assert!(!data.platform_rules("zomato").is_empty());
        assert!(data.platform_rules("etsy").is_empty());
    }

    #[test]
    fn test_every_bundle_belongs_to_its_key() {
        let data = bundled();
        for state in data.covered_states() {
            let bundle = data.state_bundle(&StateCode::Known(state)).unwrap();
            assert_eq!(bundle.state, state);
            // State rule ids are namespaced by the state code.
            let prefix = state.code().to_lowercase();
            assert!(bundle.shops_act.id.starts_with(&prefix));
        }
    }

    #[test]
    fn test_central_rules_have_checklists() {
        let central = &bundled().central;
        for rule in [&central.gst, &central.fssai, &central.epf, &central.esi, &central.udyam] {
            assert!(!rule.obligations.is_empty(), "{} has no checklist", rule.id);
            assert!(!rule.documents.is_empty(), "{} has no documents", rule.id);
        }
    }
}
