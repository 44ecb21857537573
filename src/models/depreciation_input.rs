use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::DepreciationMethod;

#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct DepreciationInput {
    is_depreciable_asset: bool,
    depreciable_cost: Option<Decimal>,
    salvage_value: Option<Decimal>,
    asset_life_months: Option<i32>,
    depreciation_method: Option<DepreciationMethod>,
    date_acquired: Option<DateTime<Local>>,
}
