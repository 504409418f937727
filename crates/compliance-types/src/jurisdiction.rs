//! Indian states and union territories for compliance mapping.
//!
//! State-level obligations (Shops & Establishments registration,
//! Factories Act licences, municipal trade licences) are resolved per
//! state, so the classifier normalizes whatever the caller typed into
//! a [`StateCode`].

use serde::{Deserialize, Serialize};

/// Indian states and union territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    // States
    AP,
    AR,
    AS,
    BR,
    CG,
    GA,
    GJ,
    HR,
    HP,
    JH,
    KA,
    KL,
    MP,
    MH,
    MN,
    ML,
    MZ,
    NL,
    OD,
    PB,
    RJ,
    SK,
    TN,
    TS,
    TR,
    UP,
    UK,
    WB,
    // Union territories
    AN,
    CH,
    DN,
    DL,
    JK,
    LA,
    LD,
    PY,
}

impl State {
    /// Full state name.
    pub fn name(&self) -> &'static str {
        match self {
            State::AP => "Andhra Pradesh",
            State::AR => "Arunachal Pradesh",
            State::AS => "Assam",
            State::BR => "Bihar",
            State::CG => "Chhattisgarh",
            State::GA => "Goa",
            State::GJ => "Gujarat",
            State::HR => "Haryana",
            State::HP => "Himachal Pradesh",
            State::JH => "Jharkhand",
            State::KA => "Karnataka",
            State::KL => "Kerala",
            State::MP => "Madhya Pradesh",
            State::MH => "Maharashtra",
            State::MN => "Manipur",
            State::ML => "Meghalaya",
            State::MZ => "Mizoram",
            State::NL => "Nagaland",
            State::OD => "Odisha",
            State::PB => "Punjab",
            State::RJ => "Rajasthan",
            State::SK => "Sikkim",
            State::TN => "Tamil Nadu",
            State::TS => "Telangana",
            State::TR => "Tripura",
            State::UP => "Uttar Pradesh",
            State::UK => "Uttarakhand",
            State::WB => "West Bengal",
            State::AN => "Andaman and Nicobar Islands",
            State::CH => "Chandigarh",
            State::DN => "Dadra and Nagar Haveli and Daman and Diu",
            State::DL => "Delhi",
            State::JK => "Jammu and Kashmir",
            State::LA => "Ladakh",
            State::LD => "Lakshadweep",
            State::PY => "Puducherry",
        }
    }

    /// Two-letter code used in obligation records.
    pub fn code(&self) -> &'static str {
        match self {
            State::AP => "AP",
            State::AR => "AR",
            State::AS => "AS",
            State::BR => "BR",
            State::CG => "CG",
            State::GA => "GA",
            State::GJ => "GJ",
            State::HR => "HR",
            State::HP => "HP",
            State::JH => "JH",
            State::KA => "KA",
            State::KL => "KL",
            State::MP => "MP",
            State::MH => "MH",
            State::MN => "MN",
            State::ML => "ML",
            State::MZ => "MZ",
            State::NL => "NL",
            State::OD => "OD",
            State::PB => "PB",
            State::RJ => "RJ",
            State::SK => "SK",
            State::TN => "TN",
            State::TS => "TS",
            State::TR => "TR",
            State::UP => "UP",
            State::UK => "UK",
            State::WB => "WB",
            State::AN => "AN",
            State::CH => "CH",
            State::DN => "DN",
            State::DL => "DL",
            State::JK => "JK",
            State::LA => "LA",
            State::LD => "LD",
            State::PY => "PY",
        }
    }

    /// Parse from a state code or full name (case-insensitive).
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AP" | "ANDHRA PRADESH" => Some(State::AP),
            "AR" | "ARUNACHAL PRADESH" => Some(State::AR),
            "AS" | "ASSAM" => Some(State::AS),
            "BR" | "BIHAR" => Some(State::BR),
            "CG" | "CHHATTISGARH" => Some(State::CG),
            "GA" | "GOA" => Some(State::GA),
            "GJ" | "GUJARAT" => Some(State::GJ),
            "HR" | "HARYANA" => Some(State::HR),
            "HP" | "HIMACHAL PRADESH" => Some(State::HP),
            "JH" | "JHARKHAND" => Some(State::JH),
            "KA" | "KARNATAKA" => Some(State::KA),
            "KL" | "KERALA" => Some(State::KL),
            "MP" | "MADHYA PRADESH" => Some(State::MP),
            "MH" | "MAHARASHTRA" => Some(State::MH),
            "MN" | "MANIPUR" => Some(State::MN),
            "ML" | "MEGHALAYA" => Some(State::ML),
            "MZ" | "MIZORAM" => Some(State::MZ),
            "NL" | "NAGALAND" => Some(State::NL),
            "OD" | "ODISHA" | "ORISSA" => Some(State::OD),
            "PB" | "PUNJAB" => Some(State::PB),
            "RJ" | "RAJASTHAN" => Some(State::RJ),
            "SK" | "SIKKIM" => Some(State::SK),
            "TN" | "TAMIL NADU" | "TAMILNADU" => Some(State::TN),
            "TS" | "TELANGANA" => Some(State::TS),
            "TR" | "TRIPURA" => Some(State::TR),
            "UP" | "UTTAR PRADESH" => Some(State::UP),
            "UK" | "UTTARAKHAND" => Some(State::UK),
            "WB" | "WEST BENGAL" => Some(State::WB),
            "AN" | "ANDAMAN AND NICOBAR ISLANDS" => Some(State::AN),
            "CH" | "CHANDIGARH" => Some(State::CH),
            "DN" | "DADRA AND NAGAR HAVELI AND DAMAN AND DIU" => Some(State::DN),
            "DL" | "DELHI" | "NEW DELHI" => Some(State::DL),
            "JK" | "JAMMU AND KASHMIR" => Some(State::JK),
            "LA" | "LADAKH" => Some(State::LA),
            "LD" | "LAKSHADWEEP" => Some(State::LD),
            "PY" | "PUDUCHERRY" | "PONDICHERRY" => Some(State::PY),
            _ => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Normalized state identifier carried in a classification.
///
/// Unrecognized but non-empty input is preserved uppercased as a
/// best-effort code; only empty/absent input maps to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StateCode {
    Known(State),
    Other(String),
    Unknown,
}

impl StateCode {
    pub fn as_str(&self) -> &str {
        match self {
            StateCode::Known(state) => state.code(),
            StateCode::Other(code) => code,
            StateCode::Unknown => "UNKNOWN",
        }
    }

    /// Display name for rationale strings.
    pub fn display_name(&self) -> &str {
        match self {
            StateCode::Known(state) => state.name(),
            StateCode::Other(code) => code,
            StateCode::Unknown => "your state",
        }
    }

    pub fn known(&self) -> Option<State> {
        match self {
            StateCode::Known(state) => Some(*state),
            _ => None,
        }
    }
}

impl From<String> for StateCode {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
            return StateCode::Unknown;
        }
        match State::parse_code(trimmed) {
            Some(state) => StateCode::Known(state),
            None => StateCode::Other(trimmed.to_uppercase()),
        }
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.as_str().to_string()
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
