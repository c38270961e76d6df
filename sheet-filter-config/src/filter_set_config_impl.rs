use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::config_structs::filter_set_struct::FilterSetConfig;
use crate::error::FilterSetConfigError;

const GENERATED_BANNER: &str = "###### Generated by sheet-filter-editor #####\n";

impl FilterSetConfig {
    /// Load a filter set from a TOML file.
    ///
    /// A missing file yields the default, empty filter set. A file that
    /// exists but cannot be parsed, or whose clauses use conditions that do
    /// not apply to the declared column type, is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<FilterSetConfig, FilterSetConfigError> {
        let path = path.as_ref();
        debug!("Filter set file path: {:?}", path.as_os_str());

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(FilterSetConfig::default()),
            Err(source) => {
                return Err(FilterSetConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: FilterSetConfig =
            toml::from_str(&raw).map_err(|source| FilterSetConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        Ok(config)
    }

    /// Check every clause condition against the declared column type.
    pub fn validate(&self) -> Result<(), FilterSetConfigError> {
        match self
            .clauses
            .iter()
            .enumerate()
            .find(|(_, clause)| !clause.condition.applies_to(self.column_type))
        {
            Some((index, clause)) => Err(FilterSetConfigError::ConditionNotApplicable {
                index,
                condition: clause.condition,
                kind: self.column_type,
            }),
            None => Ok(()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, FilterSetConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Write the filter set to `path`, replacing any previous content.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), FilterSetConfigError> {
        let path = path.as_ref();
        let formatted = format!("{GENERATED_BANNER}{}", self.to_toml_string()?);

        fs::write(path, formatted).map_err(|source| FilterSetConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
