use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::{DepreciationInput, DepreciationMethod};

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct Asset {
    asset_tag: String,
    name: String,
    category: Option<String>,
    is_depreciable: bool,
    depreciable_cost: Option<Decimal>,
    salvage_value: Option<Decimal>,
    asset_life_months: Option<i32>,
    depreciation_method: Option<DepreciationMethod>,
    date_acquired: Option<DateTime<Local>>,
}

impl Asset {
    pub fn depreciation_input(&self) -> DepreciationInput {
        DepreciationInput::new(
            self.is_depreciable,
            self.depreciable_cost,
            self.salvage_value,
            self.asset_life_months,
            self.depreciation_method,
            self.date_acquired,
        )
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}
