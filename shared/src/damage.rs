//! Damage report filtering and aggregation

use serde::Serialize;

use crate::models::DamageReport;

/// Year plus optional month selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageFilter {
    pub year: i32,
    /// `None` means the whole year
    pub month: Option<u32>,
}

impl DamageFilter {
    pub fn matches(&self, report: &DamageReport) -> bool {
        report.year() == self.year && self.month.map(|m| report.month() == m).unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DamageTotals {
    pub total_good: i64,
    pub total_damage: i64,
}

impl DamageTotals {
    pub fn total_handled(&self) -> i64 {
        self.total_good + self.total_damage
    }
}

/// Reports matching the filter, in input order.
pub fn filter_reports<'a>(reports: &'a [DamageReport], filter: &DamageFilter) -> Vec<&'a DamageReport> {
    reports.iter().filter(|r| filter.matches(r)).collect()
}

/// Sum good/damaged quantities over the filtered set.
pub fn totals(reports: &[DamageReport], filter: &DamageFilter) -> DamageTotals {
    reports
        .iter()
        .filter(|r| filter.matches(r))
        .fold(DamageTotals::default(), |mut acc, r| {
            acc.total_good += r.good_quantity;
            acc.total_damage += r.damage_quantity;
            acc
        })
}

/// Per-month totals for a fixed year, months 1..=12 in order.
///
/// Partition invariant: the twelve entries sum to the whole-year totals.
pub fn monthly_breakdown(reports: &[DamageReport], year: i32) -> Vec<(u32, DamageTotals)> {
    (1..=12)
        .map(|month| {
            let filter = DamageFilter {
                year,
                month: Some(month),
            };
            (month, totals(reports, &filter))
        })
        .collect()
}
