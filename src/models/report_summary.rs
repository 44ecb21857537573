use derive_getters::Getters;
use rust_decimal::Decimal;

use super::ReportRow;
use crate::app::calc;

/// Totals over a set of report rows. Assets that fail the depreciation
/// precondition still count towards `asset_count` and `depreciable_cost`.
/// Sums saturate at the `Decimal` bounds.
#[derive(Clone, Debug, Default, Getters, PartialEq)]
pub struct ReportSummary {
    asset_count: usize,
    depreciable_count: usize,
    depreciable_cost: Decimal,
    accumulated_depreciation: Decimal,
    current_value: Decimal,
    annual_depreciation: Decimal,
}

pub type CategorySummary = ReportSummary;

impl ReportSummary {
    pub fn add(&mut self, row: &ReportRow) {
        let asset = row.asset();
        let result = row.result();

        self.asset_count += 1;
        if calc::is_depreciable(&asset.depreciation_input()) {
            self.depreciable_count += 1;
        }
        self.depreciable_cost = self
            .depreciable_cost
            .saturating_add(asset.depreciable_cost().unwrap_or(Decimal::ZERO));
        self.accumulated_depreciation = self
            .accumulated_depreciation
            .saturating_add(*result.accumulated_depreciation());
        self.current_value = self.current_value.saturating_add(*result.current_value());
        self.annual_depreciation = self
            .annual_depreciation
            .saturating_add(*result.annual_depreciation());
    }

    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a ReportRow>) -> Self {
        rows.into_iter().fold(Self::default(), |mut summary, row| {
            summary.add(row);
            summary
        })
    }
}
