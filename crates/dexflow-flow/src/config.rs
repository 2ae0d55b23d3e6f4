//! Chart configuration
//!
//! Loaded from YAML. Every field is optional; missing fields fall back to
//! the stock chart settings.
//!
//! ```yaml
//! root_label: All Pokémon
//! rules:
//!   - { label: Attack > 100, measurement: attack, threshold: 100 }
//! rank_limit: 10
//! rank_fields: [attack, hp, defense]
//! rollup_key: catch_rate
//! palette:
//!   Fire: "#F08030"
//! ```

use crate::builder::{default_rules, FlowGraphBuilder, DEFAULT_ROOT_LABEL};
use crate::charts::{DEFAULT_RANK_FIELDS, DEFAULT_RANK_LIMIT};
use crate::error::{FlowError, FlowResult};
use crate::palette::{default_bucket_colors, Palette, DEFAULT_FALLBACK_COLOR};
use dexflow_types::{Stat, ThresholdRule};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Settings for every chart dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Name of the Sankey root node
    pub root_label: String,
    /// Threshold buckets, in display order
    pub rules: Vec<ThresholdRule>,
    /// Number of bars in the ranking
    pub rank_limit: usize,
    /// Stats summed for the ranking and rollup totals
    pub rank_fields: Vec<String>,
    /// Stat the rollup groups on within each category
    pub rollup_key: String,
    /// Category colors; empty means the stock creature type colors
    pub palette: IndexMap<String, String>,
    pub fallback_color: String,
    pub bucket_colors: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            rules: default_rules(),
            rank_limit: DEFAULT_RANK_LIMIT,
            rank_fields: DEFAULT_RANK_FIELDS.iter().map(|s| s.to_string()).collect(),
            rollup_key: Stat::CatchRate.to_string(),
            palette: IndexMap::new(),
            fallback_color: DEFAULT_FALLBACK_COLOR.to_string(),
            bucket_colors: default_bucket_colors(),
        }
    }
}

impl ChartConfig {
    pub fn from_yaml_str(content: &str) -> FlowResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| FlowError::yaml("Failed to parse chart config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> FlowResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FlowError::file(path, e))?;
        let config = Self::from_yaml_str(&content)?;
        debug!("Loaded chart config from {}", path.display());
        Ok(config)
    }

    /// Check stat names up front so later stages never see an unknown one
    pub fn validate(&self) -> FlowResult<()> {
        self.resolved_rank_fields()?;
        self.resolved_rollup_key()?;
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.resolve().is_none() {
                return Err(FlowError::invalid_input(
                    format!("rules[{i}].measurement"),
                    format!("unknown measurement '{}'", rule.measurement),
                ));
            }
        }
        Ok(())
    }

    pub fn resolved_rank_fields(&self) -> FlowResult<Vec<Stat>> {
        self.rank_fields
            .iter()
            .enumerate()
            .map(|(i, name)| resolve_stat(&format!("rank_fields[{i}]"), name))
            .collect()
    }

    pub fn resolved_rollup_key(&self) -> FlowResult<Stat> {
        resolve_stat("rollup_key", &self.rollup_key)
    }

    /// Graph builder for these settings
    pub fn builder(&self) -> FlowGraphBuilder {
        FlowGraphBuilder::new(self.rules.clone()).with_root_label(self.root_label.as_str())
    }

    /// Configured palette, or the stock creature colors when none is given
    pub fn palette(&self) -> Palette {
        if self.palette.is_empty() {
            Palette::creature_types().with_fallback(self.fallback_color.as_str())
        } else {
            Palette::new(self.palette.clone(), self.fallback_color.as_str())
        }
    }
}

fn resolve_stat(field: &str, name: &str) -> FlowResult<Stat> {
    Stat::from_str(name.trim()).map_err(|_| {
        FlowError::invalid_input(field, format!("unknown measurement '{name}'"))
    })
}
