use std::path::PathBuf;

use sheet_filter_types::{ColumnKind, FilterCondition};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterSetConfigError {
    #[error("Error reading filter set {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing filter set {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Error serializing filter set: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Error writing filter set {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Clause {index} uses `{condition}`, which does not apply to {kind} columns")]
    ConditionNotApplicable {
        index: usize,
        condition: FilterCondition,
        kind: ColumnKind,
    },
}
