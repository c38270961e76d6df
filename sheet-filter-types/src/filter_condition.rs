use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::column_kind::ColumnKind;

/// Predicate tag of a filter clause.
///
/// The wire name of each variant is its snake_case form. Datetime
/// comparisons live in their own `datetime_` namespace so a backend can tell
/// them apart from numeric comparisons without looking at the column type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FilterCondition {
    IsEmpty,
    IsNotEmpty,
    Contains,
    DoesNotContain,
    IsExactly,
    Equals,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    DatetimeEquals,
    DatetimeGreater,
    DatetimeGreaterOrEqual,
    DatetimeLess,
    DatetimeLessOrEqual,
}

/// Relational operator shared by the number and datetime namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl FilterCondition {
    /// Conditions that never carry a value.
    pub fn is_no_input(self) -> bool {
        matches!(self, FilterCondition::IsEmpty | FilterCondition::IsNotEmpty)
    }

    pub fn applies_to(self, kind: ColumnKind) -> bool {
        use FilterCondition::*;

        match self {
            IsEmpty | IsNotEmpty => true,
            Contains | DoesNotContain | IsExactly => kind == ColumnKind::String,
            Equals | Greater | GreaterOrEqual | Less | LessOrEqual => kind == ColumnKind::Number,
            DatetimeEquals | DatetimeGreater | DatetimeGreaterOrEqual | DatetimeLess
            | DatetimeLessOrEqual => kind == ColumnKind::Datetime,
        }
    }

    /// Condition a freshly added clause starts with.
    pub fn default_for(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::String => FilterCondition::Contains,
            ColumnKind::Number => FilterCondition::Equals,
            ColumnKind::Datetime => FilterCondition::DatetimeEquals,
        }
    }

    /// Every condition usable on a column of `kind`, kind-specific ones first.
    pub fn conditions_for(kind: ColumnKind) -> Vec<FilterCondition> {
        let (no_input, specific): (Vec<_>, Vec<_>) = FilterCondition::iter()
            .filter(|condition| condition.applies_to(kind))
            .partition(|condition| condition.is_no_input());

        specific.into_iter().chain(no_input).collect()
    }

    /// The relational operator behind a number or datetime comparison.
    pub fn relation(self) -> Option<Relation> {
        use FilterCondition::*;

        match self {
            Equals | DatetimeEquals => Some(Relation::Equal),
            Greater | DatetimeGreater => Some(Relation::Greater),
            GreaterOrEqual | DatetimeGreaterOrEqual => Some(Relation::GreaterOrEqual),
            Less | DatetimeLess => Some(Relation::Less),
            LessOrEqual | DatetimeLessOrEqual => Some(Relation::LessOrEqual),
            IsEmpty | IsNotEmpty | Contains | DoesNotContain | IsExactly => None,
        }
    }
}
