// Numeric extraction utilities for profile inference and sorting
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DECIMAL_RE: Regex = Regex::new(r"(\d+(?:\.\d+)?)").unwrap();
    static ref INTEGER_RE: Regex = Regex::new(r"(\d+)").unwrap();
}

/// Assumed investment when the caller gave nothing usable: ₹10 lakh.
pub const DEFAULT_INVESTMENT_INR: f64 = 1_000_000.0;

/// Sort key for obligations whose timeline string has no number in it.
pub const UNPARSABLE_TIMELINE_DAYS: u32 = 999;

/// Parse a free-text rupee amount like "5 lakh", "₹2.5 crore" or "50k".
///
/// Strips currency symbols and separators, takes the first decimal
/// number, and scales it by the unit suffix. Absent or unparsable
/// input falls back to [`DEFAULT_INVESTMENT_INR`].
pub fn parse_money_amount(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return DEFAULT_INVESTMENT_INR;
    };

    let cleaned = raw
        .to_lowercase()
        .replace(['₹', ','], "")
        .replace("inr", "")
        .replace("rs.", "")
        .replace("rupees", "");

    let Some(cap) = DECIMAL_RE.captures(&cleaned) else {
        return DEFAULT_INVESTMENT_INR;
    };
    let Ok(value) = cap[1].parse::<f64>() else {
        return DEFAULT_INVESTMENT_INR;
    };

    // Check larger units first: "lakh" itself contains a "k".
    let multiplier = if cleaned.contains("crore") || cleaned.contains("cr") {
        1e7
    } else if cleaned.contains("lakh") || cleaned.contains("lac") {
        1e5
    } else if cleaned.contains('k') {
        1e3
    } else {
        1.0
    };

    value * multiplier
}

/// Extract the day count used to sort obligations by timeline.
///
/// Takes the first integer in the string; for a range like
/// "7-15 days" that is the lower bound, which can understate the real
/// duration but matches how timelines have always been ordered here.
pub fn extract_timeline_days(timeline: &str) -> u32 {
    INTEGER_RE
        .captures(timeline)
        .and_then(|cap| cap[1].parse::<u32>().ok())
        .unwrap_or(UNPARSABLE_TIMELINE_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_lakh_and_crore() {
        assert_eq!(parse_money_amount(Some("5 lakh")), 500_000.0);
        assert_eq!(parse_money_amount(Some("2.5 crore")), 25_000_000.0);
        assert_eq!(parse_money_amount(Some("₹1,50,000")), 150_000.0);
        assert_eq!(parse_money_amount(Some("50k")), 50_000.0);
    }

    #[test]
    fn test_plain_number_is_raw_rupees() {
        assert_eq!(parse_money_amount(Some("750000")), 750_000.0);
    }

    #[test]
    fn test_defaults_on_missing_or_garbage() {
        assert_eq!(parse_money_amount(None), DEFAULT_INVESTMENT_INR);
        assert_eq!(parse_money_amount(Some("a fair bit")), DEFAULT_INVESTMENT_INR);
        assert_eq!(parse_money_amount(Some("")), DEFAULT_INVESTMENT_INR);
    }

    #[test]
    fn test_timeline_days_uses_first_number() {
        assert_eq!(extract_timeline_days("7-15 days"), 7);
        assert_eq!(extract_timeline_days("within 30 days"), 30);
        assert_eq!(extract_timeline_days("1 day"), 1);
    }

    #[test]
    fn test_unparsable_timeline_sorts_last() {
        assert_eq!(extract_timeline_days("varies"), UNPARSABLE_TIMELINE_DAYS);
        assert_eq!(extract_timeline_days(""), UNPARSABLE_TIMELINE_DAYS);
    }
}
