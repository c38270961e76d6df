use sheet_filter_config::config_structs::filter_object_struct::FilterValue;
use sheet_filter_types::ColumnKind;

/// Value held by a filter clause while the user edits it.
#[derive(Clone, Debug, PartialEq)]
pub enum ClauseValue {
    /// No value at all. The only value a no-input condition may carry.
    Unset,
    /// Empty input, kept so the input control has something to bind to.
    Blank,
    /// Text typed into a string or datetime clause.
    Text(String),
    /// A finite number typed into a number clause.
    Number(f64),
    /// Number-clause input that does not parse. Kept verbatim so a user can
    /// keep editing it.
    Invalid(String),
}

impl ClauseValue {
    /// Interpret raw input for a clause of the given kind.
    pub fn parse(kind: ColumnKind, raw: &str) -> Self {
        if raw.is_empty() {
            return ClauseValue::Blank;
        }

        match kind {
            ColumnKind::Number => match raw.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => ClauseValue::Number(number),
                _ => ClauseValue::Invalid(raw.to_string()),
            },
            ColumnKind::String | ColumnKind::Datetime => ClauseValue::Text(raw.to_string()),
        }
    }

    /// Value sent to the backend. `Unset` goes out as `0`.
    pub fn to_filter_value(&self) -> FilterValue {
        match self {
            ClauseValue::Unset => FilterValue::default(),
            ClauseValue::Blank => FilterValue::Text(String::new()),
            ClauseValue::Text(text) | ClauseValue::Invalid(text) => FilterValue::Text(text.clone()),
            ClauseValue::Number(number) => FilterValue::Number(*number),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ClauseValue::Unset)
    }
}
