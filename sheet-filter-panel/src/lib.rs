pub mod column_filter_panel;
pub mod filter_update_dispatcher;

pub use column_filter_panel::ColumnFilterPanel;
pub use filter_update_dispatcher::FilterUpdateDispatcher;

#[cfg(test)]
mod tests;
