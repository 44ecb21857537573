pub mod asset;
pub mod depreciation_input;
pub mod depreciation_method;
pub mod depreciation_result;
pub mod report_filter;
pub mod report_row;
pub mod report_summary;

pub use asset::{Asset, UNCATEGORIZED};
pub use depreciation_input::DepreciationInput;
pub use depreciation_method::DepreciationMethod;
pub use depreciation_result::DepreciationResult;
pub use report_filter::ReportFilter;
pub use report_row::ReportRow;
pub use report_summary::{CategorySummary, ReportSummary};
