//! Profile classification: bands, industry, state, and triggers.
//!
//! Classification is a pure function of the profile. Missing numeric
//! fields are inferred (scale, then parsed investment, then defaults)
//! so a sparse profile still classifies rather than erroring.

use compliance_types::{
    BusinessProfile, Classification, EmployeeBand, EngineError, IndustryCode, RegulatoryTriggers,
    Scale, StateCode, TurnoverBand,
};

use crate::extractors::numeric::parse_money_amount;

/// GST registration threshold for goods suppliers: ₹40 lakh.
pub const GST_TURNOVER_THRESHOLD_INR: f64 = 4_000_000.0;

/// EPF coverage threshold under the EPF & MP Act, 1952.
pub const EPF_EMPLOYEE_THRESHOLD: u32 = 20;

/// ESI coverage threshold under the ESI Act, 1948.
pub const ESI_EMPLOYEE_THRESHOLD: u32 = 10;

/// Worker threshold for Factories Act licensing (power-aided units).
pub const FACTORIES_ACT_EMPLOYEE_THRESHOLD: u32 = 10;

/// Ordered keyword families for industry classification. Evaluation
/// order is the tie-break: "retail food store" must classify as food,
/// so the food family is checked before retail.
const INDUSTRY_KEYWORDS: &[(IndustryCode, &[&str])] = &[
    (
        IndustryCode::FoodBeverage,
        &["food", "restaurant", "cafe", "catering"],
    ),
    (
        IndustryCode::Manufacturing,
        &["manufacturing", "factory", "production", "textile"],
    ),
    (
        IndustryCode::RetailTrade,
        &["retail", "shop", "store", "trading"],
    ),
    (
        IndustryCode::Services,
        &["service", "consulting", "software", "it"],
    ),
    (
        IndustryCode::Construction,
        &["construction", "building", "infrastructure"],
    ),
];

/// Classify a business profile.
///
/// The only hard failure is an absent profile; every missing field is
/// resolved by inference.
pub fn classify(profile: Option<&BusinessProfile>) -> Result<Classification, EngineError> {
    let profile = profile.ok_or(EngineError::MissingProfile)?;

    let industry_code = classify_industry(profile.business_type.as_deref());
    let state_code = classify_state(profile.state.as_deref());
    let investment = parse_money_amount(profile.investment.as_deref());

    let employees = profile
        .employees
        .unwrap_or_else(|| infer_employees(profile.scale, investment));
    let annual_turnover = profile
        .annual_turnover
        .unwrap_or_else(|| investment * turnover_multiplier(industry_code));

    let triggers = derive_triggers(employees, annual_turnover, industry_code);

    Ok(Classification {
        employee_band: employee_band(employees),
        turnover_band: turnover_band(annual_turnover),
        industry_code,
        state_code,
        employees,
        annual_turnover,
        triggers,
        platforms: normalize_platforms(profile.platforms.as_deref()),
    })
}

/// First matching keyword family wins; no input and no match both
/// classify as general.
pub fn classify_industry(business_type: Option<&str>) -> IndustryCode {
    let Some(raw) = business_type else {
        return IndustryCode::General;
    };
    let haystack = raw.to_lowercase();
    for (code, keywords) in INDUSTRY_KEYWORDS {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *code;
        }
    }
    IndustryCode::General
}

pub fn classify_state(state: Option<&str>) -> StateCode {
    match state {
        Some(raw) => StateCode::from(raw.to_string()),
        None => StateCode::Unknown,
    }
}

pub fn employee_band(employees: u32) -> EmployeeBand {
    match employees {
        0 => EmployeeBand::None,
        1..=9 => EmployeeBand::Micro,
        10..=19 => EmployeeBand::Small,
        20..=49 => EmployeeBand::Medium,
        _ => EmployeeBand::Large,
    }
}

/// Band boundaries are inclusive on the upper end, except the exempt
/// cutoff which is strict.
pub fn turnover_band(annual_turnover: f64) -> TurnoverBand {
    if annual_turnover < GST_TURNOVER_THRESHOLD_INR {
        TurnoverBand::Exempt
    } else if annual_turnover <= 5_000_000.0 {
        TurnoverBand::Micro
    } else if annual_turnover <= 75_000_000.0 {
        TurnoverBand::Small
    } else if annual_turnover <= 2_500_000_000.0 {
        TurnoverBand::Medium
    } else {
        TurnoverBand::Large
    }
}

/// Infer a headcount from the stated scale, else from the investment
/// amount. The lowest investment band includes the ₹10 lakh default,
/// so an empty profile infers a 2-person micro business.
fn infer_employees(scale: Option<Scale>, investment: f64) -> u32 {
    if let Some(scale) = scale {
        return match scale {
            Scale::Small => 5,
            Scale::Medium => 25,
            Scale::Large => 75,
        };
    }
    if investment <= 1_000_000.0 {
        2
    } else if investment < 5_000_000.0 {
        10
    } else if investment < 20_000_000.0 {
        30
    } else {
        50
    }
}

/// Rough turnover-to-investment ratios per industry.
fn turnover_multiplier(industry: IndustryCode) -> f64 {
    match industry {
        IndustryCode::RetailTrade => 3.0,
        IndustryCode::FoodBeverage => 2.5,
        IndustryCode::Services => 2.0,
        IndustryCode::Manufacturing => 1.5,
        IndustryCode::Construction => 1.2,
        IndustryCode::General => 2.0,
    }
}

fn derive_triggers(employees: u32, annual_turnover: f64, industry: IndustryCode) -> RegulatoryTriggers {
    RegulatoryTriggers {
        gst_required: annual_turnover >= GST_TURNOVER_THRESHOLD_INR,
        fssai_required: industry == IndustryCode::FoodBeverage,
        epf_required: employees >= EPF_EMPLOYEE_THRESHOLD,
        esi_required: employees >= ESI_EMPLOYEE_THRESHOLD,
        factories_act_required: industry == IndustryCode::Manufacturing
            && employees >= FACTORIES_ACT_EMPLOYEE_THRESHOLD,
        pollution_clearance_required: industry == IndustryCode::Manufacturing,
        shops_act_required: matches!(
            industry,
            IndustryCode::RetailTrade | IndustryCode::Services | IndustryCode::General
        ),
    }
}

fn normalize_platforms(platforms: Option<&[String]>) -> Vec<String> {
    platforms
        .unwrap_or_default()
        .iter()
        .map(|platform| platform.trim().to_lowercase())
        .filter(|platform| !platform.is_empty())
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Classification never panics, whatever the caller typed.
        #[test]
        fn classify_no_panic(
            business_type in proptest::option::of("\\PC*"),
            state in proptest::option::of("\\PC*"),
            investment in proptest::option::of("\\PC*"),
            employees in proptest::option::of(0u32..100_000),
            turnover in proptest::option::of(0.0f64..1e12),
        ) {
            let profile = BusinessProfile {
                business_type,
                state,
                investment,
                employees,
                annual_turnover: turnover,
                ..BusinessProfile::default()
            };
            let _ = classify(Some(&profile));
        }

        /// More employees never lowers the employee band.
        #[test]
        fn employee_band_is_monotonic(a in 0u32..200_000, b in 0u32..200_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(employee_band(lo) <= employee_band(hi));
        }

        /// Higher turnover never lowers the turnover band.
        #[test]
        fn turnover_band_is_monotonic(a in 0.0f64..1e13, b in 0.0f64..1e13) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(turnover_band(lo) <= turnover_band(hi));
        }
    }
}
