use anyhow::Result;
use cliclack::{intro, outro, outro_note};
use console::style;
use sheet_filter_config::config_structs::filter_set_struct::{FilterSetClause, FilterSetConfig};
use sheet_filter_types::{ColumnKind, Combinator, FilterCondition};
use strum::IntoEnumIterator;

fn main() -> Result<()> {
    ctrlc::set_handler(move || {})?;

    cliclack::clear_screen()?;

    intro(style(" Edit a column filter set! ").on_cyan().black())?;

    let path: String = cliclack::input("Which filter set file do you want to edit?")
        .default_input("filters.toml")
        .interact()?;

    let mut filter_set = FilterSetConfig::load_from(&path)?;
    if !filter_set.column.is_empty() {
        cliclack::log::info(format!(
            "Found {} clauses for column {}",
            filter_set.clauses.len(),
            filter_set.column
        ))?;
    }

    let column: String = if filter_set.column.is_empty() {
        cliclack::input("Which column do you want to filter?").interact()?
    } else {
        cliclack::input("Which column do you want to filter?")
            .default_input(&filter_set.column)
            .interact()?
    };

    let sheet_index: String = cliclack::input("Which sheet is the column on?")
        .default_input(&filter_set.sheet_index.to_string())
        .validate(|input: &String| match input.trim().parse::<usize>() {
            Ok(_) => Ok(()),
            Err(_) => Err("Sheet index must be a non-negative integer"),
        })
        .interact()?;

    let column_type = build_column_kind_selection(filter_set.column_type)?;
    if column_type != filter_set.column_type {
        // Clauses of the previous type would not validate against the new one.
        filter_set
            .clauses
            .retain(|clause| clause.condition.applies_to(column_type));
    }

    let combinator = cliclack::select("How should the clauses be joined?")
        .initial_value(filter_set.combinator)
        .item(Combinator::And, "And", "Rows must match every clause")
        .item(Combinator::Or, "Or", "Rows must match at least one clause")
        .interact()?;

    filter_set.column = column;
    filter_set.sheet_index = sheet_index.trim().parse()?;
    filter_set.column_type = column_type;
    filter_set.combinator = combinator;

    while cliclack::confirm("Add a clause?")
        .initial_value(filter_set.clauses.is_empty())
        .interact()?
    {
        filter_set.clauses.push(build_clause(column_type)?);
    }

    filter_set.validate()?;

    _ = outro_note(
        format!("The following filter set will be written to: {path}"),
        filter_set.to_toml_string()?,
    );

    filter_set.write_to(&path)?;

    outro("You're all set!")?;

    Ok(())
}

fn build_column_kind_selection(initial: ColumnKind) -> Result<ColumnKind> {
    let items = ColumnKind::iter()
        .map(|kind| (kind, kind.to_string(), ""))
        .collect::<Vec<_>>();

    Ok(cliclack::select("Select the column type:")
        .initial_value(initial)
        .items(&items)
        .interact()?)
}

fn build_clause(kind: ColumnKind) -> Result<FilterSetClause> {
    let items = FilterCondition::conditions_for(kind)
        .into_iter()
        .map(|condition| (condition, format!("{:?}", condition), condition.to_string()))
        .collect::<Vec<_>>();

    let condition = cliclack::select("Select the condition:")
        .initial_value(FilterCondition::default_for(kind))
        .items(&items)
        .interact()?;

    if condition.is_no_input() {
        return Ok(FilterSetClause {
            condition,
            value: None,
        });
    }

    let value: String = if kind == ColumnKind::Number {
        cliclack::input("Enter the value:")
            .validate(|input: &String| match input.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => Ok(()),
                _ => Err("Value must be a number"),
            })
            .interact()?
    } else {
        cliclack::input("Enter the value:").interact()?
    };

    Ok(FilterSetClause {
        condition,
        value: Some(value),
    })
}
