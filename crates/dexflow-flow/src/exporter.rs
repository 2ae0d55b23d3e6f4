//! Chart data export
//!
//! Bundles every chart dataset, plus the colors a renderer needs, into one
//! JSON document for a front end to consume.

use crate::charts::{
    rank_by_total, rollup_plot, scatter_plot, RankedRecord, RollupPlot, ScatterPlot,
};
use crate::error::{FlowError, FlowResult};
use crate::palette::Palette;
use crate::ChartConfig;
use dexflow_types::{FlowGraph, Record, Stat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the file written by [`ChartExporter::export`]
pub const CHART_DATA_FILE: &str = "chart_data.json";

/// Everything a front end needs to draw the four charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartBundle {
    /// RFC 3339 timestamp of the export
    pub generated_at: String,
    pub record_count: usize,
    pub sankey: SankeyData,
    pub ranking: Vec<RankedRecord>,
    pub scatter: ScatterPlot,
    pub rollup: RollupPlot,
    pub palette: Palette,
}

/// Sankey graph with precomputed colors, aligned by index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SankeyData {
    pub graph: FlowGraph,
    pub node_colors: Vec<String>,
    pub link_colors: Vec<String>,
}

/// Chart export functionality
pub struct ChartExporter {
    output_path: PathBuf,
}

impl ChartExporter {
    /// Create a new exporter writing into `output_path`
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Build every dataset without writing anything
    pub fn bundle(&self, records: &[Record], config: &ChartConfig) -> FlowResult<ChartBundle> {
        config.validate()?;
        let rank_fields = config.resolved_rank_fields()?;
        let rollup_key = config.resolved_rollup_key()?;
        let palette = config.palette();

        let graph = config.builder().build(records)?;
        let sankey = self.color_graph(graph, &palette, config);

        Ok(ChartBundle {
            generated_at: chrono::Utc::now().to_rfc3339(),
            record_count: records.len(),
            sankey,
            ranking: rank_by_total(records, &rank_fields, config.rank_limit),
            scatter: scatter_plot(records, Stat::Attack, Stat::Defense, Stat::Hp),
            rollup: rollup_plot(records, rollup_key, &rank_fields),
            palette,
        })
    }

    /// Build every dataset and write it to `chart_data.json`
    pub fn export(&self, records: &[Record], config: &ChartConfig) -> FlowResult<ChartBundle> {
        let bundle = self.bundle(records, config)?;

        let json_content = serde_json::to_string_pretty(&bundle)
            .map_err(|e| FlowError::serialization("Failed to encode chart data", e))?;

        std::fs::create_dir_all(&self.output_path)
            .map_err(|e| FlowError::file(&self.output_path, e))?;
        let file_path = self.output_path.join(CHART_DATA_FILE);
        std::fs::write(&file_path, json_content).map_err(|e| FlowError::file(&file_path, e))?;

        info!("Chart data exported to {}", file_path.display());
        Ok(bundle)
    }

    fn color_graph(&self, graph: FlowGraph, palette: &Palette, config: &ChartConfig) -> SankeyData {
        let bucket_count = config.rules.len();
        let node_colors = (0..graph.nodes.len())
            .map(|i| {
                palette
                    .node_color(&graph, i, bucket_count, &config.bucket_colors)
                    .to_string()
            })
            .collect();
        let link_colors = graph
            .links
            .iter()
            .map(|l| palette.link_color(&graph, l).to_string())
            .collect();
        SankeyData {
            graph,
            node_colors,
            link_colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_creation() {
        let exporter = ChartExporter::new(PathBuf::from("/tmp"));
        assert_eq!(exporter.output_path(), Path::new("/tmp"));
    }

    #[test]
    fn test_bundle_of_empty_records() {
        let exporter = ChartExporter::new(PathBuf::from("/tmp"));
        let bundle = exporter.bundle(&[], &ChartConfig::default()).unwrap();
        assert_eq!(bundle.record_count, 0);
        assert_eq!(bundle.sankey.graph.nodes.len(), 4);
        assert_eq!(bundle.sankey.node_colors.len(), 4);
        assert!(bundle.sankey.link_colors.is_empty());
        assert!(bundle.ranking.is_empty());
        assert!(bundle.scatter.x_extent.is_none());
    }
}
