pub mod apply_filter_request_struct;
pub mod filter_object_struct;
pub mod filter_panel_props_struct;
pub mod filter_set_struct;
pub mod step_id_struct;
