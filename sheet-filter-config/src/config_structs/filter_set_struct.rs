use serde::{Deserialize, Serialize};
use sheet_filter_types::{ColumnKind, Combinator, FilterCondition};

/// A column filter stored on disk, replayed clause by clause into a panel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterSetConfig {
    #[serde(default)]
    pub sheet_index: usize,
    pub column: String,
    pub column_type: ColumnKind,
    #[serde(default)]
    pub combinator: Combinator,
    #[serde(default)]
    pub clauses: Vec<FilterSetClause>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterSetClause {
    pub condition: FilterCondition,
    /// Raw input as a user would type it. Absent for no-input conditions.
    pub value: Option<String>,
}

impl Default for FilterSetConfig {
    fn default() -> Self {
        Self {
            sheet_index: 0,
            column: String::new(),
            column_type: ColumnKind::String,
            combinator: Combinator::And,
            clauses: Vec::new(),
        }
    }
}
