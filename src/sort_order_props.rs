//! Property tests for the incident ordering rules.

use proptest::prelude::*;
use serde_json::json;

use crate::models::{sort_incidents_by_priority, summarize_priorities, Incident};

fn incident(id: u32, priority_code: i64) -> Incident {
    serde_json::from_value(json!({
        "id": id,
        "incident_number": format!("INC{:07}", id),
        "short_description": "generated",
        "priority": priority_code,
        "state": 1
    }))
    .unwrap()
}

proptest! {
    /// Ranks are non-decreasing after sorting, whatever codes the backend
    /// sends (including out-of-range ones that collapse to Unknown).
    #[test]
    fn sorted_ranks_are_monotonic(codes in prop::collection::vec(0i64..10, 0..50)) {
        let mut incidents: Vec<Incident> = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| incident(i as u32, code))
            .collect();
        sort_incidents_by_priority(&mut incidents);
        for pair in incidents.windows(2) {
            prop_assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
    }

    /// Equal-rank incidents keep their input order.
    #[test]
    fn sort_is_stable(codes in prop::collection::vec(1i64..6, 0..50)) {
        let mut incidents: Vec<Incident> = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| incident(i as u32, code))
            .collect();
        sort_incidents_by_priority(&mut incidents);
        for pair in incidents.windows(2) {
            if pair[0].priority.rank() == pair[1].priority.rank() {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Every incident lands in exactly one summary bucket except Unknown,
    /// which only counts toward the total.
    #[test]
    fn summary_buckets_partition_known_priorities(codes in prop::collection::vec(0i64..10, 0..50)) {
        let incidents: Vec<Incident> = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| incident(i as u32, code))
            .collect();
        let summary = summarize_priorities(&incidents);
        let unknown = incidents.iter().filter(|i| i.priority.rank() == 6).count();
        prop_assert_eq!(summary.high + summary.medium + summary.low + unknown, summary.total);
        prop_assert_eq!(summary.total, incidents.len());
    }
}
