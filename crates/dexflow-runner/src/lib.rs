//! Command-line front end for dexflow
//!
//! Each subcommand loads the records, builds one dataset and returns it as
//! text. [`run`] holds all of the logic so the binary stays a thin wrapper.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dexflow_flow::charts::{rank_by_total, rollup_plot, scatter_plot, RadarProfile};
use dexflow_flow::exporter::ChartExporter;
use dexflow_flow::loader::load_records;
use dexflow_flow::renderer::FlowGraphRenderer;
use dexflow_flow::ChartConfig;
use dexflow_types::{Record, Stat};
use std::path::PathBuf;
use tracing::{debug, info};

/// Builds chart datasets from a creature stats CSV.
#[derive(Parser, Debug)]
#[command(name = "dexflow", version, about, long_about = None)]
pub struct Cli {
    /// Path to the records CSV.
    #[arg(long, env = "DEXFLOW_DATA", default_value = "data/creatures.csv", global = true)]
    pub data: PathBuf,

    /// Optional YAML chart configuration.
    #[arg(long, env = "DEXFLOW_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Category flow graph for a Sankey layout.
    Sankey {
        #[arg(long, value_enum, default_value_t = SankeyFormat::Json)]
        format: SankeyFormat,
    },
    /// Records ranked by summed stats.
    Rank {
        /// Overrides the configured number of entries.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Attack against defense, sized by HP.
    Scatter,
    /// Average totals grouped by category and the rollup key, with zoom extents.
    Rollup,
    /// Base stat profile of one record.
    Radar {
        /// Record identifier, e.g. "Pikachu".
        id: String,
    },
    /// Write every dataset to `<DIR>/chart_data.json`.
    Export { dir: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SankeyFormat {
    Json,
    Tree,
}

/// Load configuration and records, then run the selected command
pub fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let records = load_records(&cli.data)
        .with_context(|| format!("Failed to load records from {}", cli.data.display()))?;
    debug!("Running {:?} over {} records", cli.command, records.len());

    execute(&cli.command, &records, &config)
}

/// Run a command over already loaded records
pub fn execute(command: &Command, records: &[Record], config: &ChartConfig) -> Result<String> {
    match command {
        Command::Sankey { format } => {
            let graph = config
                .builder()
                .build(records)
                .context("Failed to build flow graph")?;
            match format {
                SankeyFormat::Json => Ok(serde_json::to_string_pretty(&graph)?),
                SankeyFormat::Tree => Ok(graph.render_as_ascii_tree()),
            }
        }
        Command::Rank { limit } => {
            let fields = config.resolved_rank_fields()?;
            let ranked = rank_by_total(records, &fields, limit.unwrap_or(config.rank_limit));
            Ok(serde_json::to_string_pretty(&ranked)?)
        }
        Command::Scatter => {
            let plot = scatter_plot(records, Stat::Attack, Stat::Defense, Stat::Hp);
            Ok(serde_json::to_string_pretty(&plot)?)
        }
        Command::Rollup => {
            let plot = rollup_plot(
                records,
                config.resolved_rollup_key()?,
                &config.resolved_rank_fields()?,
            );
            Ok(serde_json::to_string_pretty(&plot)?)
        }
        Command::Radar { id } => {
            let profile = RadarProfile::for_record(records, id)
                .with_context(|| format!("No record named '{id}'"))?;
            Ok(serde_json::to_string_pretty(&profile)?)
        }
        Command::Export { dir } => {
            let exporter = ChartExporter::new(dir.clone());
            let bundle = exporter.export(records, config)?;
            info!("Exported {} records", bundle.record_count);
            Ok(format!(
                "Exported {} records to {}",
                bundle.record_count,
                exporter.output_path().display()
            ))
        }
    }
}
