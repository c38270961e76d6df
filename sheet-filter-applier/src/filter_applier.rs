use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sheet_filter_config::config_structs::{
    apply_filter_request_struct::ApplyFilterRequest, step_id_struct::StepId,
};

/// The backend a column filter panel reports to.
#[async_trait]
pub trait FilterApplier: Send + Sync {
    /// Applies the filters of one column and returns the step id of the
    /// applied filter step.
    ///
    /// When `request.step_id` names a step the backend knows, that step is
    /// replaced; otherwise a new step is appended.
    async fn apply_filter(&self, request: &ApplyFilterRequest) -> Result<StepId>;
}

#[async_trait]
impl<T: FilterApplier + ?Sized> FilterApplier for Arc<T> {
    async fn apply_filter(&self, request: &ApplyFilterRequest) -> Result<StepId> {
        (**self).apply_filter(request).await
    }
}
