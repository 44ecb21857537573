use derive_getters::Getters;
use derive_new::new;

use super::{Asset, DepreciationResult};

#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct ReportRow {
    asset: Asset,
    result: DepreciationResult,
}
