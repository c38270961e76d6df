use sheet_filter_config::config_structs::{
    filter_object_struct::{FilterObject, FilterValue},
    filter_panel_props_struct::FilterPanelProps,
};
use sheet_filter_types::{ColumnKind, Combinator, FilterCondition};
use tracing::debug;

use crate::clause_value::ClauseValue;
use crate::error::FilterStateError;
use crate::filter_clause::FilterClause;

/// Filter clauses of one column and the combinator joining them.
///
/// The state is owned by a single panel and mutated in place. Mutators never
/// talk to the backend; the owner decides when to send
/// [`FilterState::build_filter_objects`] out.
///
/// Indices past the end of the clause list are ignored by every mutator.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    kind: ColumnKind,
    clauses: Vec<FilterClause>,
    combinator: Combinator,
}

impl FilterState {
    pub fn new(kind: ColumnKind) -> Self {
        Self {
            kind,
            clauses: Vec::new(),
            combinator: Combinator::And,
        }
    }

    /// Build the state from the filters currently applied to the column.
    ///
    /// Every incoming filter must be typed like the column and use a
    /// condition that applies to it.
    pub fn from_props(props: &FilterPanelProps) -> Result<Self, FilterStateError> {
        let kind = props.column_type;

        let clauses = props
            .filters
            .iter()
            .enumerate()
            .map(|(index, filter)| Self::clause_from_filter(kind, index, filter))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            kind,
            clauses,
            combinator: props.operator,
        })
    }

    fn clause_from_filter(
        kind: ColumnKind,
        index: usize,
        filter: &FilterObject,
    ) -> Result<FilterClause, FilterStateError> {
        if filter.kind != kind {
            return Err(FilterStateError::KindMismatch {
                index,
                expected: kind,
                found: filter.kind,
            });
        }
        if !filter.condition.applies_to(kind) {
            return Err(FilterStateError::ConditionNotApplicable {
                condition: filter.condition,
                kind,
            });
        }

        let value = match (&filter.value, kind) {
            _ if filter.condition.is_no_input() => ClauseValue::Unset,
            (FilterValue::Text(raw), _) => ClauseValue::parse(kind, raw),
            (FilterValue::Number(number), ColumnKind::Number) => ClauseValue::Number(*number),
            (FilterValue::Number(number), _) => ClauseValue::Text(number.to_string()),
        };

        Ok(FilterClause {
            kind,
            condition: filter.condition,
            value,
        })
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn add_clause(&mut self) {
        self.clauses.push(FilterClause::new(self.kind));
        debug!("Added {} clause #{}", self.kind, self.clauses.len() - 1);
    }

    pub fn remove_clause(&mut self, index: usize) {
        if index < self.clauses.len() {
            let removed = self.clauses.remove(index);
            debug!("Removed clause #{index} ({})", removed.condition);
        } else {
            debug!("Ignoring removal of missing clause #{index}");
        }
    }

    /// Change the condition of a clause.
    ///
    /// Switching to a no-input condition clears the value. Switching to a
    /// condition that takes input gives an unset value an empty placeholder
    /// and keeps any other value as it is.
    pub fn set_condition(
        &mut self,
        index: usize,
        condition: FilterCondition,
    ) -> Result<(), FilterStateError> {
        if !condition.applies_to(self.kind) {
            return Err(FilterStateError::ConditionNotApplicable {
                condition,
                kind: self.kind,
            });
        }

        let Some(clause) = self.clauses.get_mut(index) else {
            debug!("Ignoring condition change of missing clause #{index}");
            return Ok(());
        };

        clause.condition = condition;
        if condition.is_no_input() {
            clause.value = ClauseValue::Unset;
        } else if clause.value.is_unset() {
            clause.value = ClauseValue::Blank;
        }
        debug!("Clause #{index} condition set to {condition}");

        Ok(())
    }

    /// Store raw user input as the value of a clause.
    ///
    /// Number clauses keep input that does not parse as
    /// [`ClauseValue::Invalid`] instead of rejecting it. Input for a no-input
    /// clause is dropped.
    pub fn set_value(&mut self, index: usize, raw: &str) {
        let Some(clause) = self.clauses.get_mut(index) else {
            debug!("Ignoring value change of missing clause #{index}");
            return;
        };

        if clause.condition.is_no_input() {
            debug!(
                "Ignoring value for clause #{index}, {} takes no input",
                clause.condition
            );
            return;
        }

        clause.value = ClauseValue::parse(clause.kind, raw);
    }

    pub fn set_combinator(&mut self, combinator: Combinator) {
        self.combinator = combinator;
        debug!("Combinator set to {combinator}");
    }

    /// The filters the backend should see right now.
    ///
    /// Unset values are defaulted to `0` first, then every filter whose value
    /// would reach the backend as `""` is dropped. The order matters: no-input
    /// clauses survive, half-entered clauses do not.
    pub fn build_filter_objects(&self) -> Vec<FilterObject> {
        self.clauses
            .iter()
            .map(FilterClause::to_filter_object)
            .filter(|filter| !filter.value.serializes_to_empty())
            .collect()
    }

    /// Indices and raw text of number clauses whose input does not parse.
    pub fn validation_errors(&self) -> Vec<(usize, &str)> {
        self.clauses
            .iter()
            .enumerate()
            .filter_map(|(index, clause)| match &clause.value {
                ClauseValue::Invalid(raw) => Some((index, raw.as_str())),
                _ => None,
            })
            .collect()
    }
}
