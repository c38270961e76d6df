use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use polars::prelude::DataFrame;
use sheet_filter_applier::filter_applier::FilterApplier;
use sheet_filter_config::config_structs::{
    filter_panel_props_struct::FilterPanelProps, filter_set_struct::FilterSetConfig,
};
use sheet_filter_http::{HttpApplierConfig, HttpFilterApplier};
use sheet_filter_local_backend::LocalSheetBackend;
use sheet_filter_panel::ColumnFilterPanel;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a filter set against CSV sheets loaded in memory
    Apply {
        /// CSV files, one per sheet, in sheet index order
        #[arg(long = "sheet", required = true, num_args = 1..)]
        sheets: Vec<PathBuf>,
        /// Filter set to replay
        /// Example: filters/price.toml
        #[arg(long, required = true)]
        filters_from_file: PathBuf,
        /// Number of filtered rows to print
        #[arg(long, required = false, default_value_t = 10)]
        head: usize,
    },
    /// Replay a filter set against a remote apply-filter endpoint
    Remote {
        /// Filter set to replay
        #[arg(long, required = true)]
        filters_from_file: PathBuf,
        /// Base url of the backend, falls back to SHEET_FILTER_BACKEND_URL
        #[arg(long, required = false)]
        backend_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Apply {
            sheets,
            filters_from_file,
            head,
        } => {
            let filter_set = load_filter_set(&filters_from_file)?;

            info!("{}", "Loading sheets".bold().green());
            let backend = Arc::new(LocalSheetBackend::from_csv_files(&sheets)?);

            let inferred = backend
                .column_kind(filter_set.sheet_index, &filter_set.column)
                .await?;
            if inferred != filter_set.column_type {
                warn!(
                    "Column {} is declared {} but its values look {}",
                    filter_set.column, filter_set.column_type, inferred
                );
            }

            replay(&filter_set, backend.clone()).await?;

            let filtered = backend.filtered(filter_set.sheet_index).await?;
            print_frame(&filtered, head);
        }
        Commands::Remote {
            filters_from_file,
            backend_url,
        } => {
            let filter_set = load_filter_set(&filters_from_file)?;

            let config = match backend_url {
                Some(base_url) => HttpApplierConfig::builder().base_url(base_url).build(),
                None => HttpApplierConfig::from_env()?,
            };
            info!(
                "{}",
                format!("Sending filters to {}", config.apply_filter_url())
                    .bold()
                    .green()
            );

            replay(&filter_set, HttpFilterApplier::new(&config)?).await?;
        }
    }

    Ok(())
}

fn load_filter_set(path: &Path) -> Result<FilterSetConfig> {
    let filter_set = FilterSetConfig::load_from(path)?;
    if filter_set.column.is_empty() {
        bail!("no filter set found at {}", path.display());
    }

    info!(
        "Loaded {} {} clauses for column {}",
        filter_set.clauses.len(),
        filter_set.column_type,
        filter_set.column
    );
    Ok(filter_set)
}

/// Feed a filter set through a panel the way a user would edit it, one
/// mutation at a time.
async fn replay(filter_set: &FilterSetConfig, applier: impl FilterApplier + 'static) -> Result<()> {
    let props = FilterPanelProps::for_column(
        filter_set.sheet_index,
        filter_set.column.clone(),
        filter_set.column_type,
    );
    let mut panel = ColumnFilterPanel::open(&props, applier)?;

    for (index, clause) in filter_set.clauses.iter().enumerate() {
        panel.add_clause();
        panel
            .set_condition(index, clause.condition)
            .with_context(|| format!("clause {index} of the filter set"))?;
        if let Some(value) = &clause.value {
            panel.set_value(index, value);
        }
    }
    panel.set_combinator(filter_set.combinator);

    for (index, raw) in panel.state().validation_errors() {
        warn!("Clause {index}: `{raw}` is not a number");
    }

    let filters = panel.state().build_filter_objects();
    info!(
        "{}\n{}",
        format!("Emitted filters ({})", panel.state().combinator())
            .bold()
            .blue(),
        serde_json::to_string_pretty(&filters)?
    );

    panel.flush().await;
    match panel.step_id() {
        Some(step_id) => info!("{}", format!("Applied as step {step_id}").bold().green()),
        None => warn!("{}", "The backend did not apply the filters".bold().red()),
    }
    panel.close().await;

    Ok(())
}

fn print_frame(frame: &DataFrame, head: usize) {
    info!(
        "{}",
        format!("{} rows match", frame.height()).bold().green()
    );
    println!("{}", frame.head(Some(head)));
}
