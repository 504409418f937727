pub mod error;
pub mod jurisdiction;
pub mod types;

pub use error::EngineError;
pub use jurisdiction::{State, StateCode};
pub use types::{
    ApplicabilityClause, BusinessProfile, Classification, CompliancePlan, ComplianceRule, Cost,
    CostBreakdown, CostedTimeline, EmployeeBand, FieldCondition, FieldConstraint, IndustryCode,
    NumericBound, Obligation, Priority, ProfileField, RegulatoryTriggers, RuleCategory, Scale,
    TimelineEntry, TurnoverBand,
};
