use anyhow::{Context, Error, Result};
use chrono::{DateTime, Local};
use csv::{ReaderBuilder, Trim};
use log::{info, warn};
use serde::Deserialize;

use crate::{
    app::{
        report::DepreciationReport,
        utils::{
            non_empty, parse_flag, parse_optional_datetime, parse_optional_decimal,
            parse_optional_months,
        },
    },
    models::{Asset, DepreciationMethod, ReportFilter},
};

#[derive(Debug, Deserialize)]
struct RegisterRecord {
    asset_tag: String,
    name: String,
    category: Option<String>,
    is_depreciable: Option<String>,
    depreciable_cost: Option<String>,
    salvage_value: Option<String>,
    asset_life_months: Option<String>,
    depreciation_method: Option<String>,
    date_acquired: Option<String>,
}

impl RegisterRecord {
    fn into_asset(self, row: usize) -> Result<Asset> {
        let asset_tag = non_empty(Some(&self.asset_tag))
            .ok_or_else(|| Error::msg(format!("Missing asset tag at row {}", row)))?
            .to_string();

        let is_depreciable = parse_flag(self.is_depreciable.as_deref(), "is_depreciable")
            .with_context(|| format!("Asset {} at row {}", asset_tag, row))?;
        let depreciable_cost =
            parse_optional_decimal(self.depreciable_cost.as_deref(), "depreciable_cost")
                .with_context(|| format!("Asset {} at row {}", asset_tag, row))?;
        let salvage_value = parse_optional_decimal(self.salvage_value.as_deref(), "salvage_value")
            .with_context(|| format!("Asset {} at row {}", asset_tag, row))?;
        let asset_life_months =
            parse_optional_months(self.asset_life_months.as_deref(), "asset_life_months")
                .with_context(|| format!("Asset {} at row {}", asset_tag, row))?;
        let date_acquired = parse_optional_datetime(self.date_acquired.as_deref())
            .with_context(|| format!("Asset {} at row {}", asset_tag, row))?;

        let depreciation_method = non_empty(self.depreciation_method.as_deref()).map(|label| {
            let method = DepreciationMethod::from_label(Some(label));
            if label.parse::<DepreciationMethod>().is_err() {
                warn!(
                    "Unknown depreciation method '{}' for asset {} at row {}, using {}",
                    label, asset_tag, row, method
                );
            }
            method
        });

        Ok(Asset::new(
            asset_tag,
            self.name,
            non_empty(self.category.as_deref()).map(str::to_string),
            is_depreciable,
            depreciable_cost,
            salvage_value,
            asset_life_months,
            depreciation_method,
            date_acquired,
        ))
    }
}

#[derive(Clone, Debug, Default)]
pub struct AssetRegister {
    assets: Vec<Asset>,
}

impl AssetRegister {
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    pub fn from_assets(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &Vec<Asset> {
        &self.assets
    }

    /// Replaces the register with the assets read from a CSV file. Nothing is
    /// replaced when any row fails to parse.
    pub fn import_assets(&mut self, path: &str) -> Result<usize> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

        let mut assets = Vec::new();

        for (row_idx, record) in reader.deserialize::<RegisterRecord>().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;
            assets.push(rec.into_asset(row_idx + 1)?);
        }

        info!("Imported {} assets from {}", assets.len(), path);

        self.assets = assets;
        Ok(self.assets.len())
    }

    /// Categories in the register, compared without regard to case as the
    /// report filter does. The first spelling seen is kept.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .assets
            .iter()
            .filter_map(|asset| asset.category().clone())
            .collect();
        categories.sort_by_key(|category| category.to_ascii_lowercase());
        categories.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        categories
    }

    pub fn report(&self, as_of: &DateTime<Local>, filter: &ReportFilter) -> DepreciationReport {
        DepreciationReport::build(&self.assets, as_of, filter)
    }
}
