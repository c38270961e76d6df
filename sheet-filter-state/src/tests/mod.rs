use pretty_assertions::assert_eq;
use serde_json::json;
use sheet_filter_config::config_structs::{
    filter_object_struct::FilterObject, filter_panel_props_struct::FilterPanelProps,
};
use sheet_filter_types::{ColumnKind, Combinator, FilterCondition};

use crate::{ClauseValue, FilterClause, FilterState, FilterStateError};

fn state_with(kind: ColumnKind, clauses: Vec<(FilterCondition, ClauseValue)>) -> FilterState {
    let mut state = FilterState::new(kind);
    for (index, (condition, value)) in clauses.into_iter().enumerate() {
        state.add_clause();
        state.set_condition(index, condition).unwrap();
        if let ClauseValue::Text(raw) | ClauseValue::Invalid(raw) = &value {
            state.set_value(index, raw);
        } else if let ClauseValue::Number(number) = value {
            state.set_value(index, &number.to_string());
        }
    }
    state
}

#[test]
fn test_add_clause_on_empty_state() {
    for kind in [ColumnKind::String, ColumnKind::Number, ColumnKind::Datetime] {
        let mut state = FilterState::new(kind);
        state.add_clause();

        assert_eq!(
            state.clauses(),
            &[FilterClause {
                kind,
                condition: FilterCondition::default_for(kind),
                value: ClauseValue::Blank,
            }]
        );
    }
}

#[test]
fn test_remove_out_of_range_leaves_clauses_unchanged() {
    let mut state = state_with(
        ColumnKind::String,
        vec![
            (FilterCondition::Contains, ClauseValue::Text("a".into())),
            (FilterCondition::IsEmpty, ClauseValue::Unset),
        ],
    );
    let before = state.clone();

    state.remove_clause(2);
    state.remove_clause(usize::MAX);

    assert_eq!(state, before);
}

#[test]
fn test_remove_clause_keeps_order_of_the_rest() {
    let mut state = state_with(
        ColumnKind::String,
        vec![
            (FilterCondition::Contains, ClauseValue::Text("a".into())),
            (FilterCondition::IsExactly, ClauseValue::Text("b".into())),
            (FilterCondition::DoesNotContain, ClauseValue::Text("c".into())),
        ],
    );

    state.remove_clause(1);

    let conditions = state
        .clauses()
        .iter()
        .map(|clause| clause.condition)
        .collect::<Vec<_>>();
    assert_eq!(
        conditions,
        vec![FilterCondition::Contains, FilterCondition::DoesNotContain]
    );
}

#[test]
fn test_no_input_condition_clears_value() {
    let mut state = state_with(
        ColumnKind::Number,
        vec![(FilterCondition::Greater, ClauseValue::Number(5.0))],
    );

    state.set_condition(0, FilterCondition::IsNotEmpty).unwrap();
    assert_eq!(state.clauses()[0].value, ClauseValue::Unset);

    state.set_condition(0, FilterCondition::IsEmpty).unwrap();
    assert_eq!(state.clauses()[0].value, ClauseValue::Unset);
}

#[test]
fn test_input_condition_after_no_input_gets_placeholder() {
    let mut state = state_with(
        ColumnKind::Datetime,
        vec![(FilterCondition::IsEmpty, ClauseValue::Unset)],
    );

    state
        .set_condition(0, FilterCondition::DatetimeLess)
        .unwrap();

    assert_eq!(state.clauses()[0].value, ClauseValue::Blank);
}

#[test]
fn test_switching_between_input_conditions_keeps_value() {
    let mut state = state_with(
        ColumnKind::Number,
        vec![(FilterCondition::Equals, ClauseValue::Number(7.0))],
    );

    state.set_condition(0, FilterCondition::LessOrEqual).unwrap();

    assert_eq!(state.clauses()[0].value, ClauseValue::Number(7.0));
}

#[test]
fn test_condition_of_other_kind_is_rejected() {
    let mut state = state_with(
        ColumnKind::Number,
        vec![(FilterCondition::Equals, ClauseValue::Number(7.0))],
    );
    let before = state.clone();

    assert_eq!(
        state.set_condition(0, FilterCondition::Contains),
        Err(FilterStateError::ConditionNotApplicable {
            condition: FilterCondition::Contains,
            kind: ColumnKind::Number,
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_condition_change_of_missing_clause_is_ignored() {
    let mut state = FilterState::new(ColumnKind::String);

    assert_eq!(state.set_condition(3, FilterCondition::IsEmpty), Ok(()));
    assert!(state.is_empty());
}

#[test]
fn test_unparseable_number_is_retained_and_sent() {
    let mut state = FilterState::new(ColumnKind::Number);
    state.add_clause();
    state.set_value(0, "abc");

    assert_eq!(state.clauses()[0].value, ClauseValue::Invalid("abc".into()));
    assert_eq!(state.validation_errors(), vec![(0, "abc")]);
    assert_eq!(
        state.build_filter_objects(),
        vec![FilterObject::new(
            ColumnKind::Number,
            FilterCondition::Equals,
            "abc"
        )]
    );

    state.set_value(0, "12");
    assert_eq!(state.clauses()[0].value, ClauseValue::Number(12.0));
    assert!(state.validation_errors().is_empty());
}

#[test]
fn test_value_for_no_input_clause_is_dropped() {
    let mut state = state_with(
        ColumnKind::String,
        vec![(FilterCondition::IsEmpty, ClauseValue::Unset)],
    );

    state.set_value(0, "ignored");

    assert_eq!(state.clauses()[0].value, ClauseValue::Unset);
}

#[test]
fn test_empty_number_value_is_not_sent() {
    let mut state = FilterState::new(ColumnKind::Number);
    state.add_clause();
    state.set_value(0, "");

    assert!(state.build_filter_objects().is_empty());
}

#[test]
fn test_no_input_clause_is_sent_with_zero() {
    let state = state_with(
        ColumnKind::String,
        vec![(FilterCondition::IsEmpty, ClauseValue::Unset)],
    );

    let filters = state.build_filter_objects();
    assert_eq!(
        serde_json::to_value(&filters).unwrap(),
        json!([{"type": "string", "condition": "is_empty", "value": 0}])
    );
}

#[test]
fn test_emitted_filters_never_carry_empty_strings() {
    let mut state = state_with(
        ColumnKind::String,
        vec![
            (FilterCondition::Contains, ClauseValue::Text("x".into())),
            (FilterCondition::IsNotEmpty, ClauseValue::Unset),
            (FilterCondition::IsExactly, ClauseValue::Blank),
        ],
    );
    state.add_clause();
    state.set_value(0, "");
    state.set_value(0, "y");

    let filters = state.build_filter_objects();
    assert!(filters.iter().all(|filter| !filter.value.serializes_to_empty()));
    assert_eq!(
        filters,
        vec![
            FilterObject::new(ColumnKind::String, FilterCondition::Contains, "y"),
            FilterObject::new(ColumnKind::String, FilterCondition::IsNotEmpty, 0.0),
        ]
    );
}

#[test]
fn test_combinator_round_trip_keeps_filters() {
    let mut state = state_with(
        ColumnKind::Number,
        vec![
            (FilterCondition::Greater, ClauseValue::Number(1.0)),
            (FilterCondition::IsEmpty, ClauseValue::Unset),
        ],
    );
    let before = state.build_filter_objects();

    state.set_combinator(Combinator::Or);
    assert_eq!(state.combinator(), Combinator::Or);
    state.set_combinator(state.combinator().toggled());

    assert_eq!(state.combinator(), Combinator::And);
    assert_eq!(state.build_filter_objects(), before);
}

#[test]
fn test_from_props_restores_clauses() {
    let props: FilterPanelProps = serde_json::from_value(json!({
        "selectedSheetIndex": 0,
        "columnHeader": "age",
        "columnType": "number",
        "operator": "Or",
        "filters": [
            {"type": "number", "condition": "greater", "value": 18},
            {"type": "number", "condition": "less", "value": "abc"},
            {"type": "number", "condition": "is_empty", "value": 0},
            {"type": "number", "condition": "equals", "value": ""},
        ],
    }))
    .unwrap();

    let state = FilterState::from_props(&props).unwrap();

    assert_eq!(state.kind(), ColumnKind::Number);
    assert_eq!(state.combinator(), Combinator::Or);
    assert_eq!(
        state
            .clauses()
            .iter()
            .map(|clause| clause.value.clone())
            .collect::<Vec<_>>(),
        vec![
            ClauseValue::Number(18.0),
            ClauseValue::Invalid("abc".into()),
            ClauseValue::Unset,
            ClauseValue::Blank,
        ]
    );
}

#[test]
fn test_from_props_rejects_mismatched_filters() {
    let mut props = FilterPanelProps::for_column(0, "name", ColumnKind::String);
    props.filters = vec![FilterObject::new(
        ColumnKind::Number,
        FilterCondition::Equals,
        1.0,
    )];

    assert_eq!(
        FilterState::from_props(&props),
        Err(FilterStateError::KindMismatch {
            index: 0,
            expected: ColumnKind::String,
            found: ColumnKind::Number,
        })
    );

    props.filters = vec![FilterObject::new(
        ColumnKind::String,
        FilterCondition::Greater,
        "b",
    )];
    assert_eq!(
        FilterState::from_props(&props),
        Err(FilterStateError::ConditionNotApplicable {
            condition: FilterCondition::Greater,
            kind: ColumnKind::String,
        })
    );
}

#[test]
fn test_from_props_reads_values_by_column_kind() {
    let mut props = FilterPanelProps::for_column(0, "name", ColumnKind::String);
    props.filters = vec![FilterObject::new(
        ColumnKind::String,
        FilterCondition::IsExactly,
        5.0,
    )];
    let state = FilterState::from_props(&props).unwrap();
    assert_eq!(state.clauses()[0].value, ClauseValue::Text("5".into()));

    let mut props = FilterPanelProps::for_column(0, "created_at", ColumnKind::Datetime);
    props.filters = vec![FilterObject::new(
        ColumnKind::Datetime,
        FilterCondition::DatetimeGreater,
        2024.0,
    )];
    let state = FilterState::from_props(&props).unwrap();
    assert_eq!(state.clauses()[0].value, ClauseValue::Text("2024".into()));

    let mut props = FilterPanelProps::for_column(0, "age", ColumnKind::Number);
    props.filters = vec![FilterObject::new(
        ColumnKind::Number,
        FilterCondition::Equals,
        "abc",
    )];
    let state = FilterState::from_props(&props).unwrap();
    assert_eq!(state.clauses()[0].value, ClauseValue::Invalid("abc".into()));
}

#[test]
fn test_value_change_of_missing_clause_is_ignored() {
    let mut state = state_with(
        ColumnKind::Number,
        vec![(FilterCondition::Greater, ClauseValue::Number(3.0))],
    );
    let before = state.clone();

    state.set_value(1, "7");
    state.set_value(usize::MAX, "7");

    assert_eq!(state, before);
}

#[test]
fn test_datetime_value_is_kept_as_text() {
    let mut state = FilterState::new(ColumnKind::Datetime);
    state.add_clause();
    state.set_value(5, "2024");
    state.set_value(0, "2024-01-05");

    assert_eq!(
        state.clauses(),
        &[FilterClause {
            kind: ColumnKind::Datetime,
            condition: FilterCondition::DatetimeEquals,
            value: ClauseValue::Text("2024-01-05".into()),
        }]
    );
    assert_eq!(
        state.build_filter_objects(),
        vec![FilterObject::new(
            ColumnKind::Datetime,
            FilterCondition::DatetimeEquals,
            "2024-01-05"
        )]
    );

    state.set_value(0, "");

    assert_eq!(state.clauses()[0].value, ClauseValue::Blank);
    assert!(state.build_filter_objects().is_empty());
}
