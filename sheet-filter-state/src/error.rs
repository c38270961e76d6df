use sheet_filter_types::{ColumnKind, FilterCondition};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FilterStateError {
    #[error("Condition `{condition}` does not apply to {kind} columns")]
    ConditionNotApplicable {
        condition: FilterCondition,
        kind: ColumnKind,
    },

    #[error("Filter {index} is typed {found}, but the column is {expected}")]
    KindMismatch {
        index: usize,
        expected: ColumnKind,
        found: ColumnKind,
    },
}
