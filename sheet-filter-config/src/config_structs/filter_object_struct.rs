use serde::{Deserialize, Serialize, Serializer};
use sheet_filter_types::{ColumnKind, FilterCondition};

/// Scalar carried by an outbound filter: a JSON number or a JSON string.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

impl FilterValue {
    /// True when the value would reach the backend as `""`.
    pub fn serializes_to_empty(&self) -> bool {
        matches!(self, FilterValue::Text(text) if text.is_empty())
    }
}

impl Default for FilterValue {
    fn default() -> Self {
        FilterValue::Number(0.0)
    }
}

// Integral numbers go out as JSON integers so `0` stays `0` rather than `0.0`.
impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

        match self {
            FilterValue::Number(number)
                if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER =>
            {
                serializer.serialize_i64(*number as i64)
            }
            FilterValue::Number(number) => serializer.serialize_f64(*number),
            FilterValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

/// One filter as the apply-filter endpoint receives it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterObject {
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    pub condition: FilterCondition,
    #[serde(default)]
    pub value: FilterValue,
}

impl FilterObject {
    pub fn new(kind: ColumnKind, condition: FilterCondition, value: impl Into<FilterValue>) -> Self {
        Self {
            kind,
            condition,
            value: value.into(),
        }
    }
}
