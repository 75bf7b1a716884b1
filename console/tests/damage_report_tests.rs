//! Damage report filtering and aggregation tests
//!
//! Properties covered:
//! - The filtered set is exactly the subset matching year and month
//! - Month partitions of a fixed year sum to that year's totals

use chrono::NaiveDate;
use proptest::prelude::*;

use shared::damage::{filter_reports, monthly_breakdown, totals, DamageFilter, DamageTotals};
use shared::models::DamageReport;

fn report(year: i32, month: u32, day: u32, good: i64, damage: i64) -> DamageReport {
    DamageReport {
        id: 0,
        item_id: 1,
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid test date"),
        good_quantity: good,
        damage_quantity: damage,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_list_gives_zero_totals() {
        let filter = DamageFilter { year: 2024, month: None };
        assert_eq!(totals(&[], &filter), DamageTotals::default());
        assert!(filter_reports(&[], &filter).is_empty());
    }

    #[test]
    fn test_month_filter_excludes_other_months() {
        let reports = vec![
            report(2024, 1, 10, 50, 5),
            report(2024, 2, 10, 30, 3),
        ];
        let january = DamageFilter { year: 2024, month: Some(1) };
        let picked = filter_reports(&reports, &january);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].good_quantity, 50);
    }

    #[test]
    fn test_breakdown_covers_all_months() {
        let breakdown = monthly_breakdown(&[report(2024, 7, 1, 10, 2)], 2024);
        assert_eq!(breakdown.len(), 12);
        assert_eq!(breakdown[6].0, 7);
        assert_eq!(breakdown[6].1.total_good, 10);
        assert_eq!(breakdown[0].1, DamageTotals::default());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn report_strategy() -> impl Strategy<Value = DamageReport> {
    (2022i32..=2025, 1u32..=12, 1u32..=28, 0i64..1_000, 0i64..1_000)
        .prop_map(|(y, m, d, good, damage)| report(y, m, d, good, damage))
}

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// filter_reports returns exactly the records matching the predicate
        #[test]
        fn prop_filter_is_exact_subset(
            reports in prop::collection::vec(report_strategy(), 0..50),
            year in 2022i32..=2025,
            month in prop::option::of(1u32..=12)
        ) {
            let filter = DamageFilter { year, month };
            let picked = filter_reports(&reports, &filter);

            for r in &picked {
                prop_assert!(filter.matches(r));
            }
            let matching = reports.iter().filter(|r| filter.matches(r)).count();
            prop_assert_eq!(picked.len(), matching);
        }

        /// For a fixed year, summing the twelve month partitions equals the
        /// whole-year totals
        #[test]
        fn prop_month_partitions_sum_to_year(
            reports in prop::collection::vec(report_strategy(), 0..50),
            year in 2022i32..=2025
        ) {
            let year_totals = totals(&reports, &DamageFilter { year, month: None });

            let mut summed = DamageTotals::default();
            for (_, month_totals) in monthly_breakdown(&reports, year) {
                summed.total_good += month_totals.total_good;
                summed.total_damage += month_totals.total_damage;
            }

            prop_assert_eq!(summed, year_totals);
        }
    }
}
