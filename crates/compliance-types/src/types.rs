use serde::{Deserialize, Serialize};

use crate::jurisdiction::StateCode;

/// Raw business profile as supplied by the caller.
///
/// Every field is optional: the classifier infers what is missing and
/// never fails on absent fields alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub business_type: Option<String>,
    pub state: Option<String>,
    pub employees: Option<u32>,
    pub annual_turnover: Option<f64>,
    pub scale: Option<Scale>,
    /// Free-text amount, e.g. "5 lakh" or "₹2.5 crore".
    pub investment: Option<String>,
    /// Online marketplaces the business sells on, e.g. "amazon", "zomato".
    pub platforms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Small,
    Medium,
    Large,
}

/// Employee headcount band. Ordinal order matters: bands only move up
/// as headcount grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeBand {
    None,
    Micro,
    Small,
    Medium,
    Large,
}

/// Annual turnover band (INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TurnoverBand {
    Exempt,
    Micro,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndustryCode {
    FoodBeverage,
    Manufacturing,
    RetailTrade,
    Services,
    Construction,
    General,
}

impl IndustryCode {
    /// Label used in rationale strings.
    pub fn label(&self) -> &'static str {
        match self {
            IndustryCode::FoodBeverage => "food and beverage",
            IndustryCode::Manufacturing => "manufacturing",
            IndustryCode::RetailTrade => "retail trade",
            IndustryCode::Services => "services",
            IndustryCode::Construction => "construction",
            IndustryCode::General => "general",
        }
    }
}

/// Boolean regulatory triggers derived from the classified profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryTriggers {
    pub gst_required: bool,
    pub fssai_required: bool,
    pub epf_required: bool,
    pub esi_required: bool,
    pub factories_act_required: bool,
    pub pollution_clearance_required: bool,
    pub shops_act_required: bool,
}

/// Standardized classification of a business profile.
///
/// Carries the resolved (possibly inferred) headcount and turnover the
/// bands and triggers were derived from, so downstream rationale
/// strings and applicability clauses see the same numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub employee_band: EmployeeBand,
    pub turnover_band: TurnoverBand,
    pub industry_code: IndustryCode,
    pub state_code: StateCode,
    pub employees: u32,
    pub annual_turnover: f64,
    pub triggers: RegulatoryTriggers,
    /// Normalized (lowercased) marketplace names from the profile.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    Tax,
    FoodSafety,
    Labour,
    Licence,
    Registration,
    Environment,
}

/// Profile fields an applicability clause may test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Employees,
    AnnualTurnover,
    BusinessType,
    State,
}

/// Numeric bounds for a single field. Absent bounds are not checked;
/// all present bounds must hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumericBound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than_or_equal: Option<f64>,
}

impl NumericBound {
    pub fn at_least(value: f64) -> Self {
        Self {
            greater_than_or_equal: Some(value),
            ..Self::default()
        }
    }

    pub fn above(value: f64) -> Self {
        Self {
            greater_than: Some(value),
            ..Self::default()
        }
    }
}

/// A single field constraint: a numeric bound set or a membership list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldConstraint {
    OneOf(Vec<String>),
    Bound(NumericBound),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCondition {
    pub field: ProfileField,
    pub constraint: FieldConstraint,
}

/// Conjunction of field conditions; all must hold for a rule to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicabilityClause {
    pub conditions: Vec<FieldCondition>,
}

impl ApplicabilityClause {
    pub fn single(field: ProfileField, constraint: FieldConstraint) -> Self {
        Self {
            conditions: vec![FieldCondition { field, constraint }],
        }
    }
}

/// Monetary cost of an obligation: a flat rupee amount or a named
/// breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Flat(f64),
    Breakdown(CostBreakdown),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub central: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal: Option<f64>,
}

impl Cost {
    /// Resolve to a single rupee figure: flat value, else `basic`,
    /// else the first defined breakdown component, else 0.
    pub fn resolve(&self) -> f64 {
        match self {
            Cost::Flat(amount) => *amount,
            Cost::Breakdown(parts) => parts
                .basic
                .or(parts.state)
                .or(parts.central)
                .or(parts.renewal)
                .unwrap_or(0.0),
        }
    }
}

/// A single reference rule. Dataset entries are templates: obligation
/// construction always clones, never hands out shared instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRule {
    pub id: String,
    pub name: String,
    pub category: RuleCategory,
    pub mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable_if: Option<ApplicabilityClause>,
    pub documents: Vec<String>,
    pub authority: String,
    pub cost: Cost,
    /// Free-text duration, e.g. "7-15 days".
    pub timeline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    /// Concrete checklist once registered.
    pub obligations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
}

/// A resolved obligation: a fresh copy of a reference rule plus the
/// mapping's priority and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    #[serde(flatten)]
    pub rule: ComplianceRule,
    pub priority: Priority,
    pub applicable_when: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// 1-indexed week number.
    pub week: u32,
    pub obligation_id: String,
    pub cost: f64,
}

/// Ordered implementation timeline plus total cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostedTimeline {
    pub timeline: Vec<TimelineEntry>,
    pub total_cost: f64,
}

/// Full engine output for one request.
///
/// `checked_at` is metadata and deliberately excluded from any
/// equality the engine's determinism guarantees cover, so the type
/// does not implement `PartialEq`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompliancePlan {
    pub classification: Classification,
    pub obligations: Vec<Obligation>,
    pub timeline: Vec<TimelineEntry>,
    pub total_cost: f64,
    pub checked_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_accepts_partial_json() {
        let profile: BusinessProfile =
            serde_json::from_str(r#"{"businessType":"restaurant","employees":5}"#).unwrap();
        assert_eq!(profile.business_type.as_deref(), Some("restaurant"));
        assert_eq!(profile.employees, Some(5));
        assert_eq!(profile.annual_turnover, None);
        assert_eq!(profile.state, None);
    }

    #[test]
    fn test_cost_deserializes_flat_and_breakdown() {
        let flat: Cost = serde_json::from_str("7500").unwrap();
        assert_eq!(flat, Cost::Flat(7500.0));

        let breakdown: Cost = serde_json::from_str(r#"{"basic":2000,"state":500}"#).unwrap();
        assert_eq!(breakdown.resolve(), 2000.0);
    }

    #[test]
    fn test_cost_resolution_order() {
        assert_eq!(Cost::Flat(100.0).resolve(), 100.0);
        let no_basic = Cost::Breakdown(CostBreakdown {
            state: Some(300.0),
            central: Some(150.0),
            ..CostBreakdown::default()
        });
        assert_eq!(no_basic.resolve(), 300.0);
        assert_eq!(Cost::Breakdown(CostBreakdown::default()).resolve(), 0.0);
    }

    #[test]
    fn test_band_ordering_is_ordinal() {
        assert!(EmployeeBand::None < EmployeeBand::Micro);
        assert!(EmployeeBand::Medium < EmployeeBand::Large);
        assert!(TurnoverBand::Exempt < TurnoverBand::Micro);
        assert!(TurnoverBand::Medium < TurnoverBand::Large);
    }

    #[test]
    fn test_field_constraint_untagged_roundtrip() {
        let membership: FieldConstraint =
            serde_json::from_str(r#"["KA","MH"]"#).unwrap();
        assert_eq!(
            membership,
            FieldConstraint::OneOf(vec!["KA".to_string(), "MH".to_string()])
        );

        let bound: FieldConstraint =
            serde_json::from_str(r#"{"greaterThanOrEqual":10}"#).unwrap();
        assert_eq!(bound, FieldConstraint::Bound(NumericBound::at_least(10.0)));
    }
}
