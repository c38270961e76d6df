use anyhow::{Result, bail};
use polars::prelude::*;
use sheet_filter_config::config_structs::filter_object_struct::{FilterObject, FilterValue};
use sheet_filter_types::{ColumnKind, Combinator, FilterCondition, Relation};

/// Compiles the filters of one column into a single polars predicate.
///
/// Returns `None` for an empty filter list, which keeps every row.
pub fn compile_filters(
    column: &str,
    filters: &[FilterObject],
    combinator: Combinator,
) -> Result<Option<Expr>> {
    let mut predicates = filters
        .iter()
        .map(|filter| compile_filter(column, filter))
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    let Some(first) = predicates.next() else {
        return Ok(None);
    };

    Ok(Some(predicates.fold(first, |joined, predicate| {
        match combinator {
            Combinator::And => joined.and(predicate),
            Combinator::Or => joined.or(predicate),
        }
    })))
}

fn compile_filter(column: &str, filter: &FilterObject) -> Result<Expr> {
    if !filter.condition.applies_to(filter.kind) {
        bail!(
            "condition `{}` does not apply to {} filters",
            filter.condition,
            filter.kind
        );
    }

    match filter.kind {
        ColumnKind::String => compile_string_filter(column, filter),
        ColumnKind::Number => compile_number_filter(column, filter),
        ColumnKind::Datetime => compile_datetime_filter(column, filter),
    }
}

fn compile_string_filter(column: &str, filter: &FilterObject) -> Result<Expr> {
    let text = col(column).cast(DataType::String);
    let value = value_as_text(&filter.value);

    let expr = match filter.condition {
        FilterCondition::IsEmpty => text.clone().is_null().or(text.eq(lit(""))),
        FilterCondition::IsNotEmpty => text.clone().is_not_null().and(text.neq(lit(""))),
        FilterCondition::Contains => text.str().contains_literal(lit(value)),
        FilterCondition::DoesNotContain => text.str().contains_literal(lit(value)).not(),
        FilterCondition::IsExactly => text.eq(lit(value)),
        other => bail!("unsupported string condition `{other}`"),
    };
    Ok(expr)
}

fn compile_number_filter(column: &str, filter: &FilterObject) -> Result<Expr> {
    let number = col(column).cast(DataType::Float64);

    match (filter.condition, filter.condition.relation()) {
        (FilterCondition::IsEmpty, _) => Ok(number.is_null()),
        (FilterCondition::IsNotEmpty, _) => Ok(number.is_not_null()),
        (_, Some(relation)) => match &filter.value {
            FilterValue::Number(value) => Ok(compare(number, relation, lit(*value))),
            FilterValue::Text(raw) => bail!("value `{raw}` is not a number"),
        },
        (other, None) => bail!("unsupported number condition `{other}`"),
    }
}

/// Datetime values are compared against the ISO rendering of the column, so
/// `datetime_equals` with `2024-01-05` matches any time on that day.
fn compile_datetime_filter(column: &str, filter: &FilterObject) -> Result<Expr> {
    let rendered = col(column).cast(DataType::String);

    match (filter.condition, filter.condition.relation()) {
        (FilterCondition::IsEmpty, _) => Ok(rendered.is_null()),
        (FilterCondition::IsNotEmpty, _) => Ok(rendered.is_not_null()),
        (_, Some(Relation::Equal)) => Ok(rendered
            .str()
            .starts_with(lit(value_as_text(&filter.value)))),
        (_, Some(relation)) => Ok(compare(
            rendered,
            relation,
            lit(value_as_text(&filter.value)),
        )),
        (other, None) => bail!("unsupported datetime condition `{other}`"),
    }
}

fn compare(left: Expr, relation: Relation, right: Expr) -> Expr {
    match relation {
        Relation::Equal => left.eq(right),
        Relation::Greater => left.gt(right),
        Relation::GreaterOrEqual => left.gt_eq(right),
        Relation::Less => left.lt(right),
        Relation::LessOrEqual => left.lt_eq(right),
    }
}

fn value_as_text(value: &FilterValue) -> String {
    match value {
        FilterValue::Text(text) => text.clone(),
        FilterValue::Number(number) => number.to_string(),
    }
}
