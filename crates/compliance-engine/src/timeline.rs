//! Implementation timeline and total cost.
//!
//! Obligations arrive already sorted (mandatory first, fastest
//! first); they are bucketed two per week and their normalized costs
//! summed. Input is read-only.

use compliance_types::{CostedTimeline, Obligation, TimelineEntry};

/// Registrations scheduled per week.
const OBLIGATIONS_PER_WEEK: u32 = 2;

pub fn build_timeline(obligations: &[Obligation]) -> CostedTimeline {
    let timeline = obligations
        .iter()
        .enumerate()
        .map(|(index, obligation)| TimelineEntry {
            week: index as u32 / OBLIGATIONS_PER_WEEK + 1,
            obligation_id: obligation.rule.id.clone(),
            cost: obligation.rule.cost.resolve(),
        })
        .collect();

    let total_cost = obligations
        .iter()
        .map(|obligation| obligation.rule.cost.resolve())
        .sum();

    CostedTimeline {
        timeline,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compliance_types::{ComplianceRule, Cost, CostBreakdown, Priority, RuleCategory};
    use pretty_assertions::assert_eq;

    fn obligation(id: &str, cost: Cost) -> Obligation {
        Obligation {
            rule: ComplianceRule {
                id: id.to_string(),
                name: id.to_string(),
                category: RuleCategory::Registration,
                mandatory: true,
                applicable_if: None,
                documents: vec![],
                authority: "test".to_string(),
                cost,
                timeline: "7 days".to_string(),
                penalties: None,
                benefits: None,
                obligations: vec![],
            },
            priority: Priority::High,
            applicable_when: "always".to_string(),
        }
    }

    #[test]
    fn test_two_obligations_per_week() {
        let obligations = vec![
            obligation("a", Cost::Flat(100.0)),
            obligation("b", Cost::Flat(200.0)),
            obligation("c", Cost::Flat(300.0)),
            obligation("d", Cost::Flat(400.0)),
            obligation("e", Cost::Flat(500.0)),
        ];
        let costed = build_timeline(&obligations);
        let weeks: Vec<u32> = costed.timeline.iter().map(|entry| entry.week).collect();
        assert_eq!(weeks, vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_total_cost_sums_entries() {
        let obligations = vec![
            obligation("flat", Cost::Flat(750.0)),
            obligation(
                "breakdown",
                Cost::Breakdown(CostBreakdown {
                    basic: Some(300.0),
                    state: Some(9_999.0),
                    ..CostBreakdown::default()
                }),
            ),
            obligation(
                "no-basic",
                Cost::Breakdown(CostBreakdown {
                    central: Some(150.0),
                    ..CostBreakdown::default()
                }),
            ),
        ];
        let costed = build_timeline(&obligations);
        assert_eq!(costed.total_cost, 750.0 + 300.0 + 150.0);
        let entry_sum: f64 = costed.timeline.iter().map(|entry| entry.cost).sum();
        assert_eq!(costed.total_cost, entry_sum);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let costed = build_timeline(&[]);
        assert!(costed.timeline.is_empty());
        assert_eq!(costed.total_cost, 0.0);
    }

    #[test]
    fn test_entries_preserve_input_order() {
        let obligations = vec![
            obligation("first", Cost::Flat(1.0)),
            obligation("second", Cost::Flat(2.0)),
        ];
        let costed = build_timeline(&obligations);
        assert_eq!(costed.timeline[0].obligation_id, "first");
        assert_eq!(costed.timeline[1].obligation_id, "second");
    }
}
