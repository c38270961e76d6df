pub mod filter_expression;
pub mod local_sheet_backend;

pub use local_sheet_backend::LocalSheetBackend;
