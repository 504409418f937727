//! Generic applicability evaluation for reference rules.
//!
//! A rule's `applicable_if` clause is a conjunction of per-field
//! constraints. Numeric bounds fail closed: a bound over a field the
//! subject does not carry makes the rule not applicable, so missing
//! data never silently grants an exemption.

use compliance_types::{
    ApplicabilityClause, BusinessProfile, Classification, FieldCondition, FieldConstraint,
    NumericBound, ProfileField, StateCode,
};

/// The facts an applicability clause can test, independent of whether
/// they come from a raw profile or an already-derived classification.
#[derive(Debug, Clone, Default)]
pub struct ConditionSubject<'a> {
    pub employees: Option<f64>,
    pub annual_turnover: Option<f64>,
    pub business_type: Option<&'a str>,
    pub state_code: Option<StateCode>,
}

impl<'a> From<&'a BusinessProfile> for ConditionSubject<'a> {
    fn from(profile: &'a BusinessProfile) -> Self {
        Self {
            employees: profile.employees.map(f64::from),
            annual_turnover: profile.annual_turnover,
            business_type: profile.business_type.as_deref(),
            state_code: profile
                .state
                .as_deref()
                .map(|s| StateCode::from(s.to_string())),
        }
    }
}

impl<'a> From<&'a Classification> for ConditionSubject<'a> {
    fn from(classification: &'a Classification) -> Self {
        Self {
            employees: Some(f64::from(classification.employees)),
            annual_turnover: Some(classification.annual_turnover),
            // The raw business-type string is not retained past
            // classification; membership tests on it fail closed.
            business_type: None,
            state_code: Some(classification.state_code.clone()),
        }
    }
}

/// Evaluate a rule's applicability clause against a subject.
///
/// An absent clause means the rule always applies.
pub fn clause_applies(clause: Option<&ApplicabilityClause>, subject: &ConditionSubject<'_>) -> bool {
    match clause {
        None => true,
        Some(clause) => clause
            .conditions
            .iter()
            .all(|condition| condition_holds(condition, subject)),
    }
}

fn condition_holds(condition: &FieldCondition, subject: &ConditionSubject<'_>) -> bool {
    match &condition.constraint {
        FieldConstraint::Bound(bound) => match numeric_value(condition.field, subject) {
            Some(value) => bound_holds(bound, value),
            // Fail closed on missing numeric data.
            None => false,
        },
        FieldConstraint::OneOf(values) => membership_holds(condition.field, values, subject),
    }
}

fn numeric_value(field: ProfileField, subject: &ConditionSubject<'_>) -> Option<f64> {
    match field {
        ProfileField::Employees => subject.employees,
        ProfileField::AnnualTurnover => subject.annual_turnover,
        ProfileField::BusinessType | ProfileField::State => None,
    }
}

fn bound_holds(bound: &NumericBound, value: f64) -> bool {
    if let Some(limit) = bound.greater_than {
        if value <= limit {
            return false;
        }
    }
    if let Some(limit) = bound.greater_than_or_equal {
        if value < limit {
            return false;
        }
    }
    if let Some(limit) = bound.less_than {
        if value >= limit {
            return false;
        }
    }
    if let Some(limit) = bound.less_than_or_equal {
        if value > limit {
            return false;
        }
    }
    true
}

fn membership_holds(field: ProfileField, values: &[String], subject: &ConditionSubject<'_>) -> bool {
    match field {
        // Business-type matching is case-insensitive substring
        // containment, consistent with industry classification.
        ProfileField::BusinessType => match subject.business_type {
            Some(business_type) => {
                let haystack = business_type.to_lowercase();
                values
                    .iter()
                    .any(|value| haystack.contains(&value.to_lowercase()))
            }
            None => false,
        },
        // State membership is exact code equality.
        ProfileField::State => match &subject.state_code {
            Some(code) => values.iter().any(|value| value == code.as_str()),
            None => false,
        },
        // A membership list over a numeric field never holds.
        ProfileField::Employees | ProfileField::AnnualTurnover => false,
    }
}
