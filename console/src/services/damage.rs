//! Damage report view and CSV export
//!
//! The CSV export replaces the original system's print window; it writes
//! the filtered rows plus a totals line.

use chrono::NaiveDate;
use shared::damage::{filter_reports, monthly_breakdown, totals, DamageFilter, DamageTotals};
use shared::models::DamageReport;
use shared::validation;
use std::path::Path;

use crate::api::{ApiClient, DamageEntryRequest};
use crate::error::AppResult;

#[derive(Debug)]
pub struct DamageReportView {
    pub item_id: i64,
    pub filter: DamageFilter,
    /// Reports matching the filter, in backend order
    pub reports: Vec<DamageReport>,
    pub totals: DamageTotals,
    /// Whole-year month-by-month totals; present only for year-wide views
    pub monthly: Option<Vec<(u32, DamageTotals)>>,
}

#[derive(Clone)]
pub struct DamageService {
    api: ApiClient,
}

impl DamageService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn report(
        &self,
        item_id: i64,
        year: i32,
        month: Option<u32>,
    ) -> AppResult<DamageReportView> {
        validation::validate_report_year(year)?;
        if let Some(m) = month {
            validation::validate_report_month(m)?;
        }

        let all = self.api.damage_reports(item_id).await?;
        let filter = DamageFilter { year, month };
        let reports: Vec<DamageReport> =
            filter_reports(&all, &filter).into_iter().cloned().collect();
        let totals = totals(&all, &filter);
        let monthly = month.is_none().then(|| monthly_breakdown(&all, year));

        Ok(DamageReportView {
            item_id,
            filter,
            reports,
            totals,
            monthly,
        })
    }

    pub async fn record(
        &self,
        item_id: i64,
        date: NaiveDate,
        good_quantity: i64,
        damage_quantity: i64,
    ) -> AppResult<DamageReport> {
        validation::validate_damage_counts(good_quantity, damage_quantity)?;

        let request = DamageEntryRequest {
            date,
            good_quantity,
            damage_quantity,
        };
        let report = self.api.record_damage(item_id, &request).await?;
        tracing::info!(item_id, %date, "damage report recorded");
        Ok(report)
    }
}

/// Write the filtered report to CSV.
pub fn export_csv(view: &DamageReportView, path: &Path) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "good_quantity", "damage_quantity"])?;

    for report in &view.reports {
        writer.write_record([
            report.date.to_string(),
            report.good_quantity.to_string(),
            report.damage_quantity.to_string(),
        ])?;
    }

    writer.write_record([
        "total".to_string(),
        view.totals.total_good.to_string(),
        view.totals.total_damage.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}
