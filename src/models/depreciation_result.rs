use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Default, Getters, new, PartialEq)]
pub struct DepreciationResult {
    monthly_depreciation: Decimal,
    annual_depreciation: Decimal,
    accumulated_depreciation: Decimal,
    current_value: Decimal,
    depreciation_years: i32,
    depreciation_months: i32,
    months_elapsed: i32,
}

impl DepreciationResult {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
