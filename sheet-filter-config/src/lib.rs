pub mod config_structs;
pub mod error;
pub mod filter_set_config_impl;
