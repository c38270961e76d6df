use sheet_filter_applier::filter_applier::FilterApplier;
use sheet_filter_config::config_structs::{
    apply_filter_request_struct::ApplyFilterRequest, filter_panel_props_struct::FilterPanelProps,
    step_id_struct::StepId,
};
use sheet_filter_state::{FilterState, FilterStateError};
use sheet_filter_types::{Combinator, FilterCondition};
use tracing::{info, warn};

use crate::filter_update_dispatcher::FilterUpdateDispatcher;

/// Filter editor of one sheet column.
///
/// Owns the column's [`FilterState`]. Every mutation is applied locally first
/// and then handed to the dispatcher, so local state never waits on the
/// backend and never reflects a backend failure.
pub struct ColumnFilterPanel {
    sheet_index: usize,
    column_id: String,
    state: FilterState,
    dispatcher: FilterUpdateDispatcher,
}

impl ColumnFilterPanel {
    /// Open a panel on the filters currently applied to a column.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open<A>(props: &FilterPanelProps, applier: A) -> Result<Self, FilterStateError>
    where
        A: FilterApplier + 'static,
    {
        let state = FilterState::from_props(props)?;
        info!(
            "Opened {} filter panel on column {} of sheet {} with {} clauses",
            state.kind(),
            props.column_header,
            props.selected_sheet_index,
            state.len()
        );

        Ok(Self {
            sheet_index: props.selected_sheet_index,
            column_id: props.column_header.clone(),
            state,
            dispatcher: FilterUpdateDispatcher::spawn(applier),
        })
    }

    /// Read-only view for the rendering layer.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn add_clause(&mut self) {
        self.state.add_clause();
        self.send_update();
    }

    pub fn remove_clause(&mut self, index: usize) {
        self.state.remove_clause(index);
        self.send_update();
    }

    /// A condition that does not apply to the column type leaves the state
    /// untouched and sends nothing.
    pub fn set_condition(
        &mut self,
        index: usize,
        condition: FilterCondition,
    ) -> Result<(), FilterStateError> {
        if let Err(e) = self.state.set_condition(index, condition) {
            warn!("Column {}: {e}", self.column_id);
            return Err(e);
        }
        self.send_update();
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, raw: &str) {
        self.state.set_value(index, raw);
        self.send_update();
    }

    pub fn set_combinator(&mut self, combinator: Combinator) {
        self.state.set_combinator(combinator);
        self.send_update();
    }

    /// Hand the currently valid filters to the backend.
    pub fn send_update(&mut self) {
        let request = ApplyFilterRequest::builder()
            .sheet_index(self.sheet_index)
            .column_id(self.column_id.clone())
            .filters(self.state.build_filter_objects())
            .combinator(self.state.combinator())
            .build();

        self.dispatcher.submit(request);
    }

    /// Step id of the last filter step the backend applied for this column.
    pub fn step_id(&self) -> Option<StepId> {
        self.dispatcher.step_id()
    }

    /// Wait until every update sent so far has reached the backend.
    pub async fn flush(&self) {
        self.dispatcher.flush().await;
    }

    /// Flush pending updates and release the dispatcher.
    pub async fn close(self) -> FilterState {
        self.dispatcher.shutdown().await;
        self.state
    }
}
