use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Declared type of a sheet column. Every clause of a column filter shares it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColumnKind {
    String,
    Number,
    Datetime,
}
