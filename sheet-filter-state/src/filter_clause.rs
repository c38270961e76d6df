use sheet_filter_config::config_structs::filter_object_struct::FilterObject;
use sheet_filter_types::{ColumnKind, FilterCondition};

use crate::clause_value::ClauseValue;

/// One filter predicate on a single column.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterClause {
    pub kind: ColumnKind,
    pub condition: FilterCondition,
    pub value: ClauseValue,
}

impl FilterClause {
    /// A fresh clause: the kind's default condition and an empty value.
    pub fn new(kind: ColumnKind) -> Self {
        Self {
            kind,
            condition: FilterCondition::default_for(kind),
            value: ClauseValue::Blank,
        }
    }

    pub fn to_filter_object(&self) -> FilterObject {
        FilterObject {
            kind: self.kind,
            condition: self.condition,
            value: self.value.to_filter_value(),
        }
    }
}
