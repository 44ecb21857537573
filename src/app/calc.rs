use chrono::{DateTime, Local};
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{DepreciationInput, DepreciationMethod, DepreciationResult};

/// Elapsed time is counted in fixed 30-day months, not calendar months.
pub const DAYS_PER_MONTH: i64 = 30;

const MONTHS_PER_YEAR: i32 = 12;

const SECONDS_PER_DAY: i64 = 86_400;

/// Returns cost, life and acquisition date when the input carries everything
/// needed to depreciate.
fn depreciation_basis(input: &DepreciationInput) -> Option<(Decimal, i32, DateTime<Local>)> {
    if !*input.is_depreciable_asset() {
        return None;
    }

    let depreciable_cost = (*input.depreciable_cost())?;
    let asset_life_months = (*input.asset_life_months()).filter(|months| *months > 0)?;
    let date_acquired = (*input.date_acquired())?;

    Some((depreciable_cost, asset_life_months, date_acquired))
}

pub fn is_depreciable(input: &DepreciationInput) -> bool {
    depreciation_basis(input).is_some()
}

pub fn months_elapsed(
    date_acquired: &DateTime<Local>,
    as_of: &DateTime<Local>,
    asset_life_months: i32,
) -> i32 {
    // Floored, so an acquisition after `as_of` gives a negative count
    let days = (*as_of - *date_acquired)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY);
    let months = days
        .div_euclid(DAYS_PER_MONTH)
        .min(i64::from(asset_life_months));

    i32::try_from(months).unwrap_or(i32::MIN)
}

/// Arithmetic overflow on extreme inputs yields the zero result instead of a
/// panic.
pub fn calculate(input: &DepreciationInput, as_of: &DateTime<Local>) -> DepreciationResult {
    let Some((depreciable_cost, asset_life_months, date_acquired)) = depreciation_basis(input)
    else {
        return DepreciationResult::zero();
    };

    let salvage_value = input.salvage_value().unwrap_or(Decimal::ZERO);
    let months = months_elapsed(&date_acquired, as_of, asset_life_months);

    let result = match input.depreciation_method().unwrap_or_default() {
        DepreciationMethod::StraightLine => {
            straight_line(depreciable_cost, salvage_value, asset_life_months, months)
        }
        DepreciationMethod::DecliningBalance => {
            declining_balance(depreciable_cost, salvage_value, asset_life_months, months)
        }
    };

    result.unwrap_or_else(|| {
        warn!(
            "Depreciation overflowed for cost {} over {} months",
            depreciable_cost, asset_life_months
        );
        DepreciationResult::zero()
    })
}

fn build_result(
    depreciable_cost: Decimal,
    monthly_depreciation: Decimal,
    accumulated_depreciation: Decimal,
    months: i32,
) -> Option<DepreciationResult> {
    Some(DepreciationResult::new(
        monthly_depreciation,
        monthly_depreciation.checked_mul(dec!(12))?,
        accumulated_depreciation,
        depreciable_cost.checked_sub(accumulated_depreciation)?,
        months.div_euclid(MONTHS_PER_YEAR),
        months.rem_euclid(MONTHS_PER_YEAR),
        months,
    ))
}

fn straight_line(
    depreciable_cost: Decimal,
    salvage_value: Decimal,
    asset_life_months: i32,
    months: i32,
) -> Option<DepreciationResult> {
    let monthly_depreciation = depreciable_cost
        .checked_sub(salvage_value)?
        .checked_div(Decimal::from(asset_life_months))?;
    let accumulated_depreciation = monthly_depreciation.checked_mul(Decimal::from(months))?;

    build_result(
        depreciable_cost,
        monthly_depreciation,
        accumulated_depreciation,
        months,
    )
}

// Double-declining rate applied monthly to the remaining value. Once the
// remaining value falls under salvage the asset is treated as fully
// depreciated and the remaining months are not iterated.
fn declining_balance(
    depreciable_cost: Decimal,
    salvage_value: Decimal,
    asset_life_months: i32,
    months: i32,
) -> Option<DepreciationResult> {
    let rate = dec!(2).checked_div(Decimal::from(asset_life_months))?;
    let mut remaining_value = depreciable_cost;
    let mut accumulated_depreciation = Decimal::ZERO;

    for _ in 0..months.min(asset_life_months) {
        let monthly = remaining_value.checked_mul(rate)?;
        accumulated_depreciation = accumulated_depreciation.checked_add(monthly)?;
        remaining_value = remaining_value.checked_sub(monthly)?;

        if remaining_value < salvage_value {
            accumulated_depreciation = depreciable_cost.checked_sub(salvage_value)?;
            break;
        }
    }

    let monthly_depreciation = if months == 0 {
        Decimal::ZERO
    } else {
        accumulated_depreciation.checked_div(Decimal::from(months))?
    };

    build_result(
        depreciable_cost,
        monthly_depreciation,
        accumulated_depreciation,
        months,
    )
}
