pub mod filter_applier;
