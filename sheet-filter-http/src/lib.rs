pub mod http_applier_config;
pub mod http_filter_applier;

pub use http_applier_config::HttpApplierConfig;
pub use http_filter_applier::{HttpApplierError, HttpFilterApplier};
