use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;

use super::Asset;

#[derive(Clone, Debug, Default, Getters, new, PartialEq)]
pub struct ReportFilter {
    category: Option<String>,
    acquired_from: Option<DateTime<Local>>,
    acquired_to: Option<DateTime<Local>>,
}

impl ReportFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(category) = &self.category {
            match asset.category() {
                Some(asset_category) if asset_category.eq_ignore_ascii_case(category) => {}
                _ => return false,
            }
        }

        if self.acquired_from.is_none() && self.acquired_to.is_none() {
            return true;
        }

        let Some(date_acquired) = asset.date_acquired() else {
            return false;
        };

        if let Some(from) = &self.acquired_from {
            if date_acquired < from {
                return false;
            }
        }

        if let Some(to) = &self.acquired_to {
            if date_acquired > to {
                return false;
            }
        }

        true
    }
}
