use bon::Builder;
use serde::{Deserialize, Serialize};
use sheet_filter_types::Combinator;

use super::filter_object_struct::FilterObject;
use super::step_id_struct::StepId;

/// Payload of one apply-filter call.
///
/// `step_id` is the token returned by the previous call for the same column,
/// or `None` on the first call. Sending it lets the backend replace its
/// earlier filter step instead of appending a new one.
#[derive(Builder, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplyFilterRequest {
    pub sheet_index: usize,
    #[builder(into)]
    pub column_id: String,
    #[builder(default)]
    pub filters: Vec<FilterObject>,
    #[builder(default)]
    pub combinator: Combinator,
    #[serde(rename = "stepID")]
    pub step_id: Option<StepId>,
}

impl ApplyFilterRequest {
    /// Same request, tagged with the step id known at send time.
    pub fn with_step_id(mut self, step_id: Option<StepId>) -> Self {
        self.step_id = step_id;
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApplyFilterResponse {
    #[serde(rename = "stepID")]
    pub step_id: StepId,
}
