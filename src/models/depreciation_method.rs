use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
pub enum DepreciationMethod {
    #[default]
    #[strum(serialize = "Straight-line")]
    StraightLine,
    #[strum(serialize = "Declining Balance")]
    DecliningBalance,
}

impl DepreciationMethod {
    /// Absent or unrecognised labels fall back to straight-line.
    pub fn from_label(label: Option<&str>) -> DepreciationMethod {
        label
            .and_then(|label| label.trim().parse::<DepreciationMethod>().ok())
            .unwrap_or_default()
    }
}
