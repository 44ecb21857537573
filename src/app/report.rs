use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use log::debug;

use crate::{
    app::{calc, utils::format_date},
    models::{Asset, CategorySummary, ReportFilter, ReportRow, ReportSummary},
};

#[derive(Clone, Debug)]
pub struct DepreciationReport {
    as_of: DateTime<Local>,
    rows: Vec<ReportRow>,
    summary: ReportSummary,
}

impl DepreciationReport {
    pub fn build(assets: &[Asset], as_of: &DateTime<Local>, filter: &ReportFilter) -> Self {
        let rows: Vec<ReportRow> = assets
            .iter()
            .filter(|asset| filter.matches(asset))
            .map(|asset| {
                let result = calc::calculate(&asset.depreciation_input(), as_of);
                ReportRow::new(asset.clone(), result)
            })
            .collect();

        let summary = ReportSummary::from_rows(&rows);

        debug!(
            "Built depreciation report for {} of {} assets as of {}",
            rows.len(),
            assets.len(),
            format_date(as_of)
        );

        Self {
            as_of: *as_of,
            rows,
            summary,
        }
    }

    pub fn as_of(&self) -> &DateTime<Local> {
        &self.as_of
    }

    pub fn rows(&self) -> &Vec<ReportRow> {
        &self.rows
    }

    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    pub fn by_category(&self) -> BTreeMap<String, CategorySummary> {
        let mut categories: BTreeMap<String, CategorySummary> = BTreeMap::new();

        for row in &self.rows {
            categories
                .entry(row.asset().category_or_default().to_string())
                .or_default()
                .add(row);
        }

        categories
    }

    pub fn to_text_table(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Depreciation report as of {}\n",
            format_date(&self.as_of)
        ));
        out.push_str(&format!(
            "{:<12} {:<30} {:<18} {:<18} {:>14} {:>12} {:>12} {:>14} {:>14} {:>8}\n",
            "Tag",
            "Name",
            "Category",
            "Method",
            "Cost",
            "Monthly",
            "Annual",
            "Accumulated",
            "Current",
            "Elapsed",
        ));

        for row in &self.rows {
            let asset = row.asset();
            let result = row.result();
            let method = asset
                .depreciation_method()
                .map(|method| method.to_string())
                .unwrap_or_default();
            let cost = asset
                .depreciable_cost()
                .map(|cost| format!("{:.2}", cost))
                .unwrap_or_default();

            out.push_str(&format!(
                "{:<12} {:<30} {:<18} {:<18} {:>14} {:>12.2} {:>12.2} {:>14.2} {:>14.2} {:>8}\n",
                asset.asset_tag(),
                asset.name(),
                asset.category_or_default(),
                method,
                cost,
                result.monthly_depreciation(),
                result.annual_depreciation(),
                result.accumulated_depreciation(),
                result.current_value(),
                format!(
                    "{}y {}m",
                    result.depreciation_years(),
                    result.depreciation_months()
                ),
            ));
        }

        let summary = &self.summary;
        out.push_str(&format!(
            "Total: {} assets ({} depreciable), cost {:.2}, annual {:.2}, \
             accumulated {:.2}, current {:.2}\n",
            summary.asset_count(),
            summary.depreciable_count(),
            summary.depreciable_cost(),
            summary.annual_depreciation(),
            summary.accumulated_depreciation(),
            summary.current_value(),
        ));

        out
    }
}
