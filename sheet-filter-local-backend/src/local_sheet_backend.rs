use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use polars::prelude::*;
use rand::Rng as _;
use sheet_duration::beautify_duration;
use sheet_filter_applier::filter_applier::FilterApplier;
use sheet_filter_config::config_structs::{
    apply_filter_request_struct::ApplyFilterRequest, step_id_struct::StepId,
};
use sheet_filter_types::ColumnKind;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::filter_expression::compile_filters;

struct FilterStep {
    column_id: String,
    predicate: Option<Expr>,
}

struct Sheet {
    data: DataFrame,
    steps: IndexMap<StepId, FilterStep>,
}

/// In-process apply-filter backend over polars frames, one frame per sheet.
///
/// Every sheet keeps an ordered pipeline of filter steps. A request carrying a
/// known step id replaces that step in place; any other request appends a new
/// step. Steps are AND-ed when the sheet is evaluated.
pub struct LocalSheetBackend {
    sheets: RwLock<Vec<Sheet>>,
}

impl LocalSheetBackend {
    pub fn new(frames: Vec<DataFrame>) -> Self {
        let sheets = frames
            .into_iter()
            .map(|data| Sheet {
                data,
                steps: IndexMap::new(),
            })
            .collect();

        Self {
            sheets: RwLock::new(sheets),
        }
    }

    /// Load every CSV file as one sheet, in the given order.
    pub fn from_csv_files(paths: &[impl AsRef<Path>]) -> Result<Self> {
        let frames = paths
            .iter()
            .map(|path| read_csv_sheet(path.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(frames))
    }

    /// Column type as a grid would declare it from the frame's dtype.
    pub async fn column_kind(&self, sheet_index: usize, column: &str) -> Result<ColumnKind> {
        let sheets = self.sheets.read().await;
        let sheet = sheets
            .get(sheet_index)
            .with_context(|| format!("unknown sheet {sheet_index}"))?;
        let dtype = sheet.data.column(column)?.dtype();

        Ok(infer_column_kind(dtype))
    }

    pub async fn step_ids(&self, sheet_index: usize) -> Result<Vec<StepId>> {
        let sheets = self.sheets.read().await;
        let sheet = sheets
            .get(sheet_index)
            .with_context(|| format!("unknown sheet {sheet_index}"))?;

        Ok(sheet.steps.keys().cloned().collect())
    }

    /// Rows of a sheet that pass every filter step.
    pub async fn filtered(&self, sheet_index: usize) -> Result<DataFrame> {
        let sheets = self.sheets.read().await;
        let sheet = sheets
            .get(sheet_index)
            .with_context(|| format!("unknown sheet {sheet_index}"))?;

        let start = Instant::now();
        let frame = sheet
            .steps
            .values()
            .filter_map(|step| step.predicate.clone())
            .fold(sheet.data.clone().lazy(), |frame, predicate| {
                frame.filter(predicate)
            })
            .collect()?;

        info!(
            "Sheet {sheet_index} filtered through {} steps, {} of {} rows left. Time taken: {}",
            sheet.steps.len(),
            frame.height(),
            sheet.data.height(),
            beautify_duration(start.elapsed())
        );

        Ok(frame)
    }
}

#[async_trait]
impl FilterApplier for LocalSheetBackend {
    async fn apply_filter(&self, request: &ApplyFilterRequest) -> Result<StepId> {
        let predicate = compile_filters(&request.column_id, &request.filters, request.combinator)?;

        let mut sheets = self.sheets.write().await;
        let sheet = sheets
            .get_mut(request.sheet_index)
            .with_context(|| format!("unknown sheet {}", request.sheet_index))?;
        sheet
            .data
            .column(&request.column_id)
            .with_context(|| format!("unknown column {}", request.column_id))?;

        let step = FilterStep {
            column_id: request.column_id.clone(),
            predicate,
        };

        let step_id = match &request.step_id {
            Some(step_id) if sheet.steps.contains_key(step_id) => {
                debug!("Replacing filter step {step_id} on column {}", step.column_id);
                step_id.clone()
            }
            _ => {
                let step_id = generate_step_id();
                debug!("Appending filter step {step_id} on column {}", step.column_id);
                step_id
            }
        };
        sheet.steps.insert(step_id.clone(), step);

        Ok(step_id)
    }
}

fn read_csv_sheet(path: &Path) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
        .with_context(|| format!("failed to read sheet {}", path.display()))?;

    debug!("Loaded sheet {} with shape {:?}", path.display(), frame.shape());
    Ok(frame)
}

pub fn infer_column_kind(dtype: &DataType) -> ColumnKind {
    if dtype.is_integer() || dtype.is_float() {
        ColumnKind::Number
    } else if matches!(dtype, DataType::Date | DataType::Datetime(_, _)) {
        ColumnKind::Datetime
    } else {
        ColumnKind::String
    }
}

fn generate_step_id() -> StepId {
    StepId::new(format!("step-{:016x}", rand::rng().random::<u64>()))
}
