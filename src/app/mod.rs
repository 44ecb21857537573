pub mod app;
pub mod calc;
pub mod register;
pub mod report;
pub mod ui;
pub mod utils;

pub use app::App;
pub use register::AssetRegister;
pub use report::DepreciationReport;
