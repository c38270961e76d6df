use serde::{Deserialize, Serialize};
use sheet_filter_types::{ColumnKind, Combinator};

use super::filter_object_struct::FilterObject;

/// Initial state handed to a column filter panel by the owning grid.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterPanelProps {
    pub selected_sheet_index: usize,
    pub column_header: String,
    #[serde(default)]
    pub filters: Vec<FilterObject>,
    pub column_type: ColumnKind,
    #[serde(default)]
    pub operator: Combinator,
}

impl FilterPanelProps {
    /// Props for a column with no filter applied yet.
    pub fn for_column(
        selected_sheet_index: usize,
        column_header: impl Into<String>,
        column_type: ColumnKind,
    ) -> Self {
        Self {
            selected_sheet_index,
            column_header: column_header.into(),
            filters: Vec::new(),
            column_type,
            operator: Combinator::And,
        }
    }
}
